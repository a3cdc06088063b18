//! Browser-local key/value helpers.
//!
//! localStorage only exists in the browser runtime; on other targets (native
//! test builds) every read comes back `None` and writes are dropped, so code
//! paths that treat the cache as optional behave the same everywhere.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
fn raw_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage_get(key: &str) -> Option<String> {
    raw_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage_set(key: &str, value: &str) {
    if let Some(storage) = raw_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage_remove(key: &str) {
    if let Some(storage) = raw_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage_get(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage_set(_key: &str, _value: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn local_storage_remove(_key: &str) {}

pub fn load_json<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
    let json = local_storage_get(key)?;
    serde_json::from_str(&json).ok()
}

pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        local_storage_set(key, &json);
    }
}
