use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Tooltip, TooltipContent};
use crate::filters::Filters;
use crate::selection::fuzzy_rank;
use icons::Filter;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// Include/exclude filter picker over per-category candidate pools.
///
/// Click adds a value to the includes of its category, shift-click to the
/// excludes; chips in the header remove again. Values already tracked on
/// either side leave the selectable pool, which keeps the two sets disjoint.
/// Every mutation hands a snapshot copy of the filters to `on_change`.
#[component]
pub fn FilterPopover(
    data: BTreeMap<String, Vec<String>>,
    #[prop(into, optional)] initial_value: Option<Filters>,
    on_change: Callback<Filters>,
    #[prop(into, default = "Only include these values".into())] include_help: String,
    #[prop(into, default = "Exclude these values".into())] exclude_help: String,
) -> impl IntoView {
    let filters = RwSignal::new(Filters::seeded(&data, initial_value.as_ref()));
    let is_open = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let data = StoredValue::new(data);

    let chip_row = move |excludes: bool, help: String| {
        view! {
            <div class="flex-1 px-2 py-1">
                <div class="text-sm font-semibold">
                    {if excludes { "Removes" } else { "Includes" }}
                    <span class="ml-1 text-xs font-normal text-muted-foreground">
                        {if excludes { "Shift-Click to Add" } else { "Click to Add" }}
                    </span>
                </div>
                <div class="flex flex-wrap gap-1 py-2 text-xs text-muted-foreground">
                    {move || {
                        let current = filters.get();
                        let selected = if excludes { &current.excludes } else { &current.includes };
                        if selected.values().all(|s| s.is_empty()) {
                            return view! { <span>{help.clone()}</span> }.into_any();
                        }
                        data.with_value(|data| {
                            data.iter()
                                .flat_map(|(key, pool)| {
                                    let tracked = |v: &String| {
                                        if excludes {
                                            current.has_exclude(key, v)
                                        } else {
                                            current.has_include(key, v)
                                        }
                                    };
                                    pool.iter()
                                        .filter(|v| tracked(v))
                                        .map(|v| {
                                            let key = key.clone();
                                            let value = v.clone();
                                            let label = v.clone();
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    size=ButtonSize::Sm
                                                    on:click=move |_| {
                                                        filters.update(|f| {
                                                            if excludes {
                                                                f.remove_exclude(&key, &value);
                                                            } else {
                                                                f.remove_include(&key, &value);
                                                            }
                                                        });
                                                        on_change.run(filters.get_untracked());
                                                    }
                                                >
                                                    {label}
                                                </Button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                                .collect_view()
                                .into_any()
                        })
                    }}
                </div>
            </div>
        }
    };

    view! {
        <div
            data-name="FilterPopover"
            class="relative inline-block"
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" && is_open.get_untracked() {
                    ev.prevent_default();
                    is_open.set(false);
                }
            }
        >
            <Tooltip>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    on:click=move |ev| {
                        ev.stop_propagation();
                        is_open.update(|open| *open = !*open);
                    }
                >
                    <span
                        class="inline-flex"
                        class=("text-destructive", move || !filters.get().is_empty())
                    >
                        <Filter />
                    </span>
                </Button>
                <TooltipContent>"Filters"</TooltipContent>
            </Tooltip>

            <Show when=move || is_open.get() fallback=|| ().into_view()>
                <div
                    class="absolute right-0 top-[calc(100%+4px)] z-50 flex w-[500px] max-w-[90vw] flex-col rounded-md border bg-card p-2 shadow-md"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div class="flex divide-x divide-border">
                        {chip_row(false, include_help.clone())}
                        {chip_row(true, exclude_help.clone())}
                    </div>

                    <div class="border-t border-border p-2">
                        <Input bind_value=search placeholder="Search values" class="h-8 text-sm" />
                    </div>

                    <div class="flex max-h-[245px] divide-x divide-border overflow-y-auto">
                        {move || {
                            let current = filters.get();
                            let query = search.get();
                            data.with_value(|data| {
                                data.iter()
                                    .map(|(key, pool)| {
                                        let ranked = if query.is_empty() {
                                            pool.clone()
                                        } else {
                                            fuzzy_rank(&query, pool)
                                        };
                                        let selectable: Vec<String> = ranked
                                            .into_iter()
                                            .filter(|v| !current.is_tracked(key, v))
                                            .collect();
                                        let key = key.clone();
                                        view! {
                                            <div class="flex flex-1 flex-wrap content-start gap-1 px-2 py-1">
                                                {selectable
                                                    .into_iter()
                                                    .map(|value| {
                                                        let key = key.clone();
                                                        let label = value.clone();
                                                        view! {
                                                            <Button
                                                                variant=ButtonVariant::Outline
                                                                size=ButtonSize::Sm
                                                                on:click=move |ev: web_sys::MouseEvent| {
                                                                    filters.update(|f| {
                                                                        if ev.shift_key() {
                                                                            f.exclude(&key, &value);
                                                                        } else {
                                                                            f.include(&key, &value);
                                                                        }
                                                                    });
                                                                    on_change.run(filters.get_untracked());
                                                                }
                                                            >
                                                                {label}
                                                            </Button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
