use icons::Check;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::*;

mod components {
    use super::*;
    clx! {Menu, ul, "z-50 max-h-[300px] min-w-[150px] overflow-auto rounded-md border bg-card p-1 shadow-md [scrollbar-width:none] [&::-webkit-scrollbar]:hidden"}
}

#[allow(unused_imports)]
pub use components::*;

#[component]
pub fn MenuEntry(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(default = false.into(), into)] active: Signal<bool>,
    #[prop(into, optional)] on_select: Option<Callback<()>>,
    /// Runs before the input underneath loses focus; use for selections that
    /// must beat the blur handler.
    #[prop(into, optional)] on_mousedown: Option<Callback<web_sys::MouseEvent>>,
    /// Reserve space for the check glyph shown on the active entry.
    #[prop(default = false)] show_check: bool,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "group flex w-full cursor-pointer select-none items-center gap-2 rounded-sm px-2 py-1.5 text-sm text-popover-foreground outline-none transition-colors duration-200 hover:bg-accent hover:text-accent-foreground aria-selected:bg-accent aria-selected:text-accent-foreground [&_svg:not([class*='size-'])]:size-4",
        class
    );

    view! {
        <li
            data-name="MenuEntry"
            class=merged_class
            role="option"
            tabindex="0"
            aria-selected=move || active.get().to_string()
            on:mousedown=move |ev| {
                if let Some(cb) = on_mousedown {
                    cb.run(ev);
                }
            }
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(());
                }
            }
        >
            {children()}
            {show_check
                .then(|| view! {
                    <Check class="ml-auto size-4 text-muted-foreground opacity-0 group-aria-selected:opacity-100" />
                })}
        </li>
    }
}
