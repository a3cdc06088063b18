//! Explicit per-extension context.
//!
//! An extension constructs one [`ExtensionContext`] at startup and passes it
//! (or clones of it) wherever host access is needed, instead of reaching for
//! process-wide state. `teardown` closes whatever the context mounted so the
//! host can unload the extension cleanly.

use crate::settings::service::{service_page_title, token_for_service};
use crate::store::OutlineStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Callable handle that closes an overlay mounted by [`ExtensionContext`].
#[derive(Clone)]
pub struct OverlayCloser(Rc<dyn Fn()>);

impl OverlayCloser {
    pub fn new(close: impl Fn() + 'static) -> Self {
        Self(Rc::new(close))
    }

    pub fn close(&self) {
        (self.0)()
    }
}

/// Identity and capabilities of one loaded extension.
#[derive(Clone)]
pub struct ExtensionContext<S> {
    pub id: String,
    pub store: S,
    overlay_closers: Rc<RefCell<Vec<OverlayCloser>>>,
}

impl<S: OutlineStore + Clone + 'static> ExtensionContext<S> {
    /// Set up the context for an extension id and an injected store.
    pub fn init(id: impl Into<String>, store: S) -> Self {
        console_error_panic_hook::set_once();
        Self {
            id: id.into(),
            store,
            overlay_closers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Title of this extension's settings page.
    pub fn settings_page_title(&self) -> String {
        service_page_title(&self.id)
    }

    /// Id of this extension's settings page, when it exists.
    pub fn settings_parent_id(&self) -> Option<String> {
        self.store.find_page_by_title(&self.settings_page_title())
    }

    /// Service token for this extension (localStorage cache, then settings).
    pub fn token(&self) -> Option<String> {
        token_for_service(&self.store, &self.id)
    }

    /// Human-readable name derived from the extension id.
    pub fn display_name(&self) -> String {
        title_from_id(&self.id)
    }

    /// Close every overlay this context mounted.
    pub fn teardown(&self) {
        let closers: Vec<OverlayCloser> = self.overlay_closers.borrow_mut().drain(..).collect();
        for closer in closers {
            closer.close();
        }
    }

    /// Mount a view into a dedicated root appended to `document.body`.
    ///
    /// The view receives an [`OverlayCloser`]; calling it unmounts the view
    /// and removes the root element. The closer is also returned so callers
    /// can dismiss the overlay themselves.
    #[cfg(target_arch = "wasm32")]
    pub fn render_overlay<F, V>(&self, name: &str, view: F) -> Option<OverlayCloser>
    where
        F: FnOnce(OverlayCloser) -> V + 'static,
        V: leptos::prelude::IntoView + 'static,
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let root = document.create_element("div").ok()?;
        root.set_id(&format!("ext-{}-{name}-root", self.id));
        document.body()?.append_child(&root).ok()?;
        let root: web_sys::HtmlElement = root.unchecked_into();

        let cleanup: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(None));
        let closer = {
            let cleanup = Rc::clone(&cleanup);
            let root = root.clone();
            OverlayCloser::new(move || {
                if let Some(unmount) = cleanup.borrow_mut().take() {
                    unmount();
                }
                root.remove();
            })
        };

        let handle = leptos::mount::mount_to(root, {
            let closer = closer.clone();
            move || view(closer)
        });
        *cleanup.borrow_mut() = Some(Box::new(move || drop(handle)));

        self.overlay_closers.borrow_mut().push(closer.clone());
        Some(closer)
    }
}

/// "my-extension" -> "My Extension".
pub fn title_from_id(id: &str) -> String {
    id.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn title_from_id_capitalizes_each_part() {
        assert_eq!(title_from_id("my-extension"), "My Extension");
        assert_eq!(title_from_id("todo"), "Todo");
        assert_eq!(title_from_id(""), "");
    }

    #[test]
    fn context_resolves_its_settings_page() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/todo");

        let ctx = ExtensionContext::init("todo", store);
        assert_eq!(ctx.settings_page_title(), "ext/todo");
        assert_eq!(ctx.settings_parent_id(), Some(page));
        assert_eq!(ctx.display_name(), "Todo");
    }

    #[test]
    fn context_reads_token_through_its_store() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/todo");
        let key = store.create_node(&page, 0, "token");
        store.create_node(&key, 0, "abc123");

        let ctx = ExtensionContext::init("todo", store);
        assert_eq!(ctx.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn teardown_runs_every_registered_closer() {
        use std::cell::Cell;

        let ctx = ExtensionContext::init("todo", MemoryStore::new());
        let closed = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let closed = Rc::clone(&closed);
            ctx.overlay_closers
                .borrow_mut()
                .push(OverlayCloser::new(move || closed.set(closed.get() + 1)));
        }

        ctx.teardown();
        assert_eq!(closed.get(), 2);
        // Closers are dropped after teardown.
        ctx.teardown();
        assert_eq!(closed.get(), 2);
    }
}
