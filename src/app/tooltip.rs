use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::overflow::{HoverDisclosure, HoverTicket};

/// Hover disclosure. Opens `delay` after the pointer enters the trigger and
/// closes as soon as it leaves; leaving early cancels the pending open.
#[component]
pub fn Tooltip(
    #[prop(into)] trigger: String,
    #[prop(optional)] delay: Option<std::time::Duration>,
    children: ChildrenFn,
) -> impl IntoView {
    let disclosure = RwSignal::new(delay.map(HoverDisclosure::new).unwrap_or_default());
    let delay_ms = disclosure.with_untracked(|d| d.delay()).as_millis() as f64;
    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |ticket: HoverTicket| disclosure.update(|d| d.open(ticket)),
        delay_ms,
    );

    view! {
        <div class="relative inline-block">
            <div
                class="cursor-help"
                on:mouseenter=move |_| start(disclosure.update_untracked(|d| d.enter()))
                on:mouseleave=move |_| {
                    stop();
                    disclosure.update(|d| d.leave());
                }
            >
                {trigger}
            </div>
            <Show when=move || disclosure.with(|d| d.is_visible())>
                <div class="tooltip-pop absolute bottom-full left-1/2 z-50 mb-2 -translate-x-1/2 transform">
                    <div class="bg-card border-border/80 rounded-lg border px-3 py-2 shadow-lg backdrop-blur-sm">
                        <div class="text-foreground text-sm whitespace-nowrap">{children()}</div>
                    </div>
                    <div class="absolute top-full left-1/2 -translate-x-1/2 transform">
                        <div class="bg-card border-border/80 h-2 w-2 rotate-45 transform border-r border-b"></div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
