use crate::components::hooks::use_arrow_key_down::use_arrow_key_down;
use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input, Menu, MenuEntry};
use crate::selection::fuzzy_filter;
use icons::Plus;
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Free-text input with fuzzy-filtered suggestions.
///
/// Suggestions are the best fuzzy matches of the current value against
/// `options`, capped to a short list; an empty value shows none. Arrow keys
/// cycle the highlighted suggestion, Enter takes it (or confirms the raw
/// value once the menu is closed), Escape dismisses the menu. Selection by
/// mouse happens on mousedown so it wins against the input's blur.
#[component]
pub fn AutocompleteInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into, optional)] on_confirm: Option<Callback<()>>,
    #[prop(into, optional)] on_blur: Option<Callback<String>>,
    #[prop(into, default = "Enter value".into())] placeholder: String,
    /// Show a trailing add button that triggers `on_confirm`.
    #[prop(default = false)] show_button: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let is_typing = RwSignal::new(false);
    let input_ref = NodeRef::<html::Input>::new();
    let menu_id = use_random_id_for("suggestions");

    let items = Memo::new(move |_| {
        let query = value.get();
        if query.is_empty() {
            Vec::new()
        } else {
            fuzzy_filter(&query, &options.get())
        }
    });

    let on_enter = Callback::new(move |picked: String| {
        if is_open.get_untracked() {
            value.set(picked);
            is_typing.set(false);
        } else if let Some(confirm) = on_confirm {
            confirm.run(());
        } else {
            is_open.set(true);
        }
    });
    let (active_index, on_key_down) = use_arrow_key_down(items.into(), on_enter);

    // The menu follows the suggestions and the typing state.
    Effect::new(move |_| {
        if items.get().is_empty() || !is_typing.get() {
            is_open.set(false);
        } else {
            is_open.set(true);
        }
    });

    let merged_class = tw_merge!("relative w-full", class);

    view! {
        <div data-name="AutocompleteInput" class=merged_class>
            <div class="flex items-center gap-1">
                <Input
                    bind_value=value
                    placeholder=placeholder
                    autofocus=true
                    node_ref=input_ref
                    attr:role="combobox"
                    attr:aria-autocomplete="list"
                    attr:aria-controls=menu_id.clone()
                    attr:aria-expanded=move || is_open.get().to_string()
                    on:input=move |_| is_typing.set(true)
                    on:click=move |_| is_typing.set(true)
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.stop_propagation();
                            is_open.set(false);
                        } else {
                            on_key_down.run(ev);
                        }
                    }
                    on:blur=move |_| {
                        is_typing.set(false);
                        if let Some(blurred) = on_blur {
                            blurred.run(value.get_untracked());
                        }
                    }
                />
                <Show when=move || show_button fallback=|| ().into_view()>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        on:click=move |_| {
                            if let Some(confirm) = on_confirm {
                                confirm.run(());
                            }
                        }
                    >
                        <Plus />
                    </Button>
                </Show>
            </div>

            <Show when=move || is_open.get() fallback=|| ().into_view()>
                <Menu attr:id=menu_id.clone() attr:role="listbox" class="absolute left-0 top-[calc(100%+4px)] max-w-[400px]">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, item)| {
                                let picked = item.clone();
                                view! {
                                    <MenuEntry
                                        active=Signal::derive(move || active_index.get() == i)
                                        on_mousedown=Callback::new(move |ev: web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            is_typing.set(false);
                                            value.set(picked.clone());
                                            if let Some(input) = input_ref.get_untracked() {
                                                let _ = input.focus();
                                            }
                                        })
                                    >
                                        <span class="truncate">{item}</span>
                                    </MenuEntry>
                                }
                            })
                            .collect_view()
                    }}
                </Menu>
            </Show>
        </div>
    }
}
