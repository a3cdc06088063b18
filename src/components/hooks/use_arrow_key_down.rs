use crate::selection::{next_index, prev_index};
use leptos::prelude::*;

/// Keyboard navigation over a result list.
///
/// ArrowDown/ArrowUp cycle the active index through `results`; Enter hands
/// the active entry to `on_enter` and restarts from the top. Handled keys
/// have their default behavior and propagation suppressed so the host's own
/// shortcuts don't fire underneath an open menu. With no results every key
/// falls through untouched.
///
/// Returns the active index and the keydown handler to attach to the input.
pub fn use_arrow_key_down(
    results: Signal<Vec<String>>,
    on_enter: Callback<String>,
) -> (Signal<usize>, Callback<web_sys::KeyboardEvent>) {
    let active_index = RwSignal::new(0usize);

    // The selection restarts whenever the result set changes.
    Effect::new(move |_| {
        results.track();
        active_index.set(0);
    });

    let on_key_down = Callback::new(move |ev: web_sys::KeyboardEvent| {
        let results = results.get_untracked();
        if results.is_empty() {
            return;
        }
        match ev.key().as_str() {
            "ArrowDown" => {
                active_index.update(|i| *i = next_index(*i, results.len()));
            }
            "ArrowUp" => {
                active_index.update(|i| *i = prev_index(*i, results.len()));
            }
            "Enter" => {
                let i = active_index.get_untracked().min(results.len() - 1);
                on_enter.run(results[i].clone());
                active_index.set(0);
            }
            _ => return,
        }
        ev.prevent_default();
        ev.stop_propagation();
    });

    (active_index.into(), on_key_down)
}
