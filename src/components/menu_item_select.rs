use crate::components::hooks::use_arrow_key_down::use_arrow_key_down;
use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{Button, ButtonVariant, Menu, MenuEntry};
use icons::ChevronDown;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Dropdown that picks one item from a list.
///
/// Controlled: the caller owns the active item and receives every pick
/// through `on_select`. Arrow keys cycle the highlighted entry while the
/// menu is open; Enter confirms it.
#[component]
pub fn MenuItemSelect(
    #[prop(into)] items: Signal<Vec<String>>,
    #[prop(into)] active_item: Signal<Option<String>>,
    on_select: Callback<String>,
    #[prop(into, default = "Choose...".into())] empty_text: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let is_open = RwSignal::new(false);
    let menu_id = use_random_id_for("menu");

    let on_enter = Callback::new(move |item: String| {
        on_select.run(item);
        is_open.set(false);
    });
    let (active_index, on_key_down) = use_arrow_key_down(items, on_enter);

    let merged_class = tw_merge!("relative w-fit", class);

    view! {
        <div
            data-name="MenuItemSelect"
            class=merged_class
            on:keydown=move |ev| {
                if !is_open.get_untracked() {
                    return;
                }
                if ev.key() == "Escape" {
                    ev.stop_propagation();
                    is_open.set(false);
                } else {
                    on_key_down.run(ev);
                }
            }
        >
            <Button
                variant=ButtonVariant::Outline
                attr:aria-haspopup="listbox"
                attr:aria-controls=menu_id.clone()
                attr:aria-expanded=move || is_open.get().to_string()
                on:click=move |ev| {
                    ev.stop_propagation();
                    is_open.update(|open| *open = !*open);
                }
            >
                {move || match active_item.get() {
                    Some(item) => view! { <span class="truncate">{item}</span> }.into_any(),
                    None => view! { <i class="opacity-50">{empty_text.clone()}</i> }.into_any(),
                }}
                <ChevronDown class="text-muted-foreground" />
            </Button>

            <Show when=move || is_open.get() fallback=|| ().into_view()>
                <Menu attr:id=menu_id.clone() attr:role="listbox" class="absolute left-0 top-[calc(100%+4px)]">
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
                                        show_check=true
                                        on_select=Callback::new(move |_| {
                                            on_select.run(picked.clone());
                                            is_open.set(false);
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
