//! UI components and settings helpers for building extensions on an
//! outline-based note-taking host.
//!
//! The host exposes its document as a tree of text blocks behind a global
//! API; [`store::OutlineStore`] abstracts that API so extensions (and their
//! tests, via [`store::MemoryStore`]) inject it instead of reaching for the
//! global. On top of it sit the settings-tree accessors ([`settings`]) and a
//! small set of Leptos widgets ([`components`]): a dropdown select, a
//! fuzzy-filtered autocomplete input, an include/exclude filter popover and
//! a markdown confirmation dialog.
//!
//! Host writes are fire-and-forget: helpers return new node ids immediately
//! and never observe write completion or failure. Do not assume
//! read-your-writes against the real host; re-read the tree before a write
//! that depends on an earlier one having landed.

pub mod components;
pub mod extension;
pub mod filters;
pub mod markdown;
pub mod models;
pub mod selection;
pub mod settings;
pub mod storage;
pub mod store;

pub use components::{AutocompleteInput, FilterPopover, MenuItemSelect, SimpleAlert};
pub use extension::{ExtensionContext, OverlayCloser};
pub use filters::Filters;
pub use models::OutlineNode;
#[cfg(target_arch = "wasm32")]
pub use store::HostStore;
pub use store::{MemoryStore, OutlineStore};

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        storage::local_storage_remove("ext_ui_test_key");
        assert!(storage::local_storage_get("ext_ui_test_key").is_none());

        storage::local_storage_set("ext_ui_test_key", "t1");
        assert_eq!(
            storage::local_storage_get("ext_ui_test_key").as_deref(),
            Some("t1")
        );

        storage::local_storage_remove("ext_ui_test_key");
        assert!(storage::local_storage_get("ext_ui_test_key").is_none());
    }

    #[wasm_bindgen_test]
    fn test_json_storage_round_trip() {
        let mut filters = Filters::new();
        filters.include("status", "open");

        storage::save_json("ext_ui_test_filters", &filters);
        let loaded: Filters =
            storage::load_json("ext_ui_test_filters").expect("should load filters back");
        assert_eq!(loaded, filters);

        storage::local_storage_remove("ext_ui_test_filters");
    }
}
