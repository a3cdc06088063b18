use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

#[component]
pub fn Checkbox(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] id: String,
    #[prop(into, optional)] label: String,
    #[prop(into)] bind_checked: RwSignal<bool>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "size-4 shrink-0 rounded-sm border border-input accent-primary outline-none focus-visible:ring-2 focus-visible:ring-ring/50 disabled:cursor-not-allowed disabled:opacity-50",
        class
    );

    let on_change = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                bind_checked.set(input.checked());
            }
        }
    };

    view! {
        <label class="inline-flex items-center gap-2 text-sm select-none">
            <input
                data-name="Checkbox"
                type="checkbox"
                class=merged_class
                id=id
                prop:checked=move || bind_checked.get()
                on:change=on_change
            />
            {(!label.is_empty()).then_some(label)}
        </label>
    }
}
