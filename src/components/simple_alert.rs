use crate::components::ui::{Button, ButtonSize, ButtonVariant, Checkbox};
use crate::extension::OverlayCloser;
use crate::markdown;
use crate::store::OutlineStore;
use leptos::prelude::*;

/// Child text appended when the user opts out of seeing an alert again.
pub const DONT_SHOW_AGAIN_MARKER: &str = "Do not show again";

/// Modal confirmation dialog over markdown content.
///
/// Confirm and cancel are mutually exclusive terminal outcomes. The cancel
/// button (plus Escape and backdrop dismissal) appears when a cancel handler
/// is supplied or `cancelable` is set; dismissing without confirming runs
/// the handler when there is one. With `dont_show_again` set, a checked
/// opt-out box appends [`DONT_SHOW_AGAIN_MARKER`] under that node
/// (fire-and-forget) before the confirm callback runs.
#[component]
pub fn SimpleAlert<S>(
    store: S,
    #[prop(into)] content: String,
    #[prop(into, optional)] on_confirm: Option<Callback<()>>,
    #[prop(into, default = "Ok".into())] confirm_text: String,
    #[prop(into, optional)] on_cancel: Option<Callback<()>>,
    /// Allow dismissal without a custom cancel handler.
    #[prop(default = false)] cancelable: bool,
    /// Force links in `content` to open in a new browsing context.
    #[prop(default = false)] external_links: bool,
    /// Node id under which the opt-out marker is appended.
    #[prop(optional, into)] dont_show_again: Option<String>,
    on_close: OverlayCloser,
) -> impl IntoView
where
    S: OutlineStore + Clone + 'static,
{
    let checked = RwSignal::new(false);
    let html = markdown::render_html(&content, external_links);
    let show_cancel = cancelable || on_cancel.is_some();
    let show_opt_out = dont_show_again.is_some();

    let cancel_close = {
        let on_close = on_close.clone();
        move || {
            on_close.close();
            if let Some(cancel) = on_cancel {
                cancel.run(());
            }
        }
    };
    let cancel_close_backdrop = cancel_close.clone();
    let cancel_close_escape = cancel_close.clone();

    let confirm = {
        let on_close = on_close.clone();
        move || {
            if checked.get_untracked() {
                if let Some(parent) = &dont_show_again {
                    let order = store.tree(parent).len();
                    store.create_node(parent, order, DONT_SHOW_AGAIN_MARKER);
                }
            }
            on_close.close();
            if let Some(confirmed) = on_confirm {
                confirmed.run(());
            }
        }
    };

    view! {
        <div
            data-name="SimpleAlert"
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4"
            tabindex="-1"
            on:click=move |_| {
                if show_cancel {
                    cancel_close_backdrop();
                }
            }
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" && show_cancel {
                    ev.prevent_default();
                    cancel_close_escape();
                }
            }
        >
            <div
                class="w-full max-w-md rounded-md border border-border bg-background p-4 shadow-lg"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="whitespace-pre-wrap text-sm" inner_html=html></div>

                {show_opt_out
                    .then(|| view! {
                        <div class="pt-3">
                            <Checkbox bind_checked=checked label="Don't show again" />
                        </div>
                    })}

                <div class="flex items-center justify-end gap-2 pt-4">
                    {show_cancel
                        .then(|| view! {
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                on:click=move |_| cancel_close()
                            >
                                "Cancel"
                            </Button>
                        })}
                    <Button size=ButtonSize::Sm on:click=move |_| confirm()>
                        {confirm_text}
                    </Button>
                </div>
            </div>
        </div>
    }
}
