//! Service-scoped settings conventions.
//!
//! Every extension service keeps its settings under a page titled
//! `ext/{service}`. Tokens are additionally cached in browser localStorage so
//! users can keep them out of the shared document.

use crate::settings::{find_key_node, setting_value};
use crate::storage::local_storage_get;
use crate::store::OutlineStore;

pub const DEFAULT_SERVICE: &str = "ext";

const TOKEN_KEY: &str = "token";
const OAUTH_KEY: &str = "oauth";

/// Title of the settings page for a service.
pub fn service_page_title(service: &str) -> String {
    format!("ext/{service}")
}

/// localStorage key caching a service token.
///
/// The default service keeps the bare key for compatibility with tokens
/// stored before services were namespaced.
pub fn token_storage_key(service: &str) -> String {
    if service == DEFAULT_SERVICE {
        "ext_token".to_string()
    } else {
        format!("ext_token-{service}")
    }
}

/// Token for a service: localStorage cache first, then the `token` setting
/// on the service's settings page.
pub fn token_for_service(store: &impl OutlineStore, service: &str) -> Option<String> {
    let cached = local_storage_get(&token_storage_key(service)).filter(|t| !t.trim().is_empty());
    if cached.is_some() {
        return cached;
    }

    let page = store.find_page_by_title(&service_page_title(service))?;
    setting_value(&store.tree(&page), TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn token(store: &impl OutlineStore) -> Option<String> {
    token_for_service(store, DEFAULT_SERVICE)
}

/// Labels of the linked accounts stored under a service's `oauth` setting.
///
/// Credential blobs (children wrapped in braces) live alongside the labels
/// and are filtered out.
pub fn oauth_account_labels(store: &impl OutlineStore, service: &str) -> Vec<String> {
    let Some(page) = store.find_page_by_title(&service_page_title(service)) else {
        return Vec::new();
    };

    find_key_node(&store.tree(&page), OAUTH_KEY)
        .map(|node| {
            node.children
                .iter()
                .map(|c| c.text.clone())
                .filter(|t| !t.starts_with('{') && !t.ends_with('}'))
                .collect()
        })
        .unwrap_or_default()
}
