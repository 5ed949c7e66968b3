use leptos::prelude::*;

use super::tooltip::Tooltip;
use crate::overflow::Overflow;

/// Bullet list that keeps the first entries inline and tucks the rest into a
/// "+N more" tooltip.
#[component]
pub fn HighlightList(items: &'static [&'static str], noun: &'static str) -> impl IntoView {
    let overflow = Overflow::split(items);
    let hidden = overflow.hidden;
    view! {
        <ul class="space-y-2">
            {overflow
                .inline
                .iter()
                .map(|item| {
                    view! {
                        <li class="text-muted-foreground flex items-center text-sm">
                            <span class="mr-3 h-1.5 w-1.5 flex-shrink-0 rounded-full bg-purple-400" />
                            {*item}
                        </li>
                    }
                })
                .collect_view()}
            {overflow
                .more_label(noun)
                .map(|label| {
                    view! {
                        <li class="text-sm text-purple-400">
                            <Tooltip trigger=label>
                                <div class="text-left">
                                    {hidden
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class="flex items-center py-1">
                                                    <span class="mr-2 h-1.5 w-1.5 flex-shrink-0 rounded-full bg-purple-400" />
                                                    {*item}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Tooltip>
                        </li>
                    }
                })}
        </ul>
    }
}

#[component]
pub fn TechTags(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {items
                .iter()
                .map(|tech| {
                    view! {
                        <span class="bg-muted/50 border-border rounded border px-2 py-1 text-xs text-white">
                            {*tech}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
