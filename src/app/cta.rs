use leptos::prelude::*;

const BASE_CLASSES: &str = "group relative inline-flex items-center justify-center text-center px-8 py-3 rounded-lg font-semibold transition-all duration-300 ease-out hover:-translate-y-[1px] active:translate-y-0 overflow-hidden";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaVariant {
    Filled,
    Outlined,
}

fn variant_classes(variant: CtaVariant, disabled: bool) -> String {
    let (base, hover) = match variant {
        CtaVariant::Filled => (
            "bg-gradient-to-r from-purple-600 to-purple-700 text-white shadow-lg border border-purple-500/30",
            "hover:from-purple-500 hover:to-purple-600 hover:shadow-xl hover:shadow-purple-500/30 hover:border-purple-400/50",
        ),
        CtaVariant::Outlined => (
            "bg-transparent text-purple-300 border-2 border-purple-500/50 shadow-lg shadow-purple-500/10",
            "hover:bg-purple-600/10 hover:text-white hover:border-purple-400 hover:shadow-purple-500/20",
        ),
    };
    if disabled {
        format!("{BASE_CLASSES} {base} cursor-not-allowed opacity-50")
    } else {
        format!("{BASE_CLASSES} {base} {hover}")
    }
}

#[component]
fn CtaInner(variant: CtaVariant, children: Children) -> impl IntoView {
    view! {
        <span class="relative z-10 flex items-center justify-center gap-2 text-center">
            {children()}
            <span class="flex items-center justify-center text-center transition-all duration-300 group-hover:translate-x-1 group-hover:scale-110">
                "→"
            </span>
        </span>
        // shine sweep
        <div class="absolute inset-0 -translate-x-full -skew-x-12 bg-gradient-to-r from-transparent via-white/10 to-transparent transition-transform duration-700 group-hover:translate-x-full" />
        {(variant == CtaVariant::Filled)
            .then(|| {
                view! {
                    <div class="absolute inset-0 rounded-lg bg-gradient-to-r from-purple-400/20 to-purple-600/20 opacity-0 transition-opacity duration-300 group-hover:opacity-100" />
                }
            })}
    }
}

/// Call to action rendered as a link. External links open in a new tab.
#[component]
pub fn CtaLink(
    text: &'static str,
    variant: CtaVariant,
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
) -> impl IntoView {
    let class = variant_classes(variant, false);
    if external {
        view! {
            <a href=href class=class target="_blank" rel="noopener noreferrer">
                <CtaInner variant>{text}</CtaInner>
            </a>
        }
        .into_any()
    } else {
        view! {
            <a href=href class=class>
                <CtaInner variant>{text}</CtaInner>
            </a>
        }
        .into_any()
    }
}

/// Submit button for a form; label and disabled state follow the signals.
#[component]
pub fn CtaSubmit(
    text: Signal<String>,
    disabled: Signal<bool>,
    variant: CtaVariant,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || disabled.get()
            class=move || format!("{} {class}", variant_classes(variant, disabled.get()))
        >
            <CtaInner variant>{move || text.get()}</CtaInner>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_drops_hover_styles() {
        let enabled = variant_classes(CtaVariant::Filled, false);
        assert!(enabled.contains("hover:from-purple-500"));
        assert!(!enabled.contains("cursor-not-allowed"));

        let disabled = variant_classes(CtaVariant::Filled, true);
        assert!(!disabled.contains("hover:from-purple-500"));
        assert!(disabled.contains("cursor-not-allowed opacity-50"));
    }

    #[test]
    fn test_variants_differ() {
        let outlined = variant_classes(CtaVariant::Outlined, false);
        assert!(outlined.contains("border-2"));
        assert!(outlined.starts_with(BASE_CLASSES));
    }
}
