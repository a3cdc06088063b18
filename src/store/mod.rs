use crate::models::OutlineNode;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
pub mod host;

#[cfg(target_arch = "wasm32")]
pub use host::HostStore;

/// Injected capability for reading and mutating the host's outline store.
///
/// Reads are synchronous snapshots. Writes are submissions: an implementation
/// dispatches them to the host and returns immediately, so a freshly returned
/// id is an in-memory identifier only. Read-your-writes is NOT guaranteed:
/// re-read the tree before a write that depends on an earlier one having
/// landed. Write failures are unobserved; the helpers in this crate treat
/// every mutation as best-effort.
pub trait OutlineStore {
    /// Page id for an exact title match, or `None` when the page is absent.
    fn find_page_by_title(&self, title: &str) -> Option<String>;

    /// Snapshot of the ordered children (and their subtrees) of a node.
    fn tree(&self, parent_id: &str) -> Vec<OutlineNode>;

    /// A fresh unique node id.
    fn generate_id(&self) -> String;

    /// Create a node under `parent_id` at `order` and return its id.
    fn create_node(&self, parent_id: &str, order: usize, text: &str) -> String;

    /// Replace a node's text in place.
    fn update_node(&self, id: &str, text: &str);

    /// Delete a node and its subtree.
    fn delete_node(&self, id: &str);
}

const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Host-style short id, random when entropy is available.
pub(crate) fn fresh_node_id() -> String {
    let mut buf = [0u8; ID_LEN];
    if getrandom::getrandom(&mut buf).is_err() {
        // Entropy failure is effectively unreachable in the browser runtime;
        // a counter keeps ids unique within the process if it ever happens.
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        for (i, b) in buf.iter_mut().enumerate() {
            *b = (n >> (i * 8)) as u8;
        }
    }
    buf.iter()
        .map(|b| ID_ALPHABET[(*b as usize) % ID_ALPHABET.len()] as char)
        .collect()
}

#[derive(Default)]
struct MemoryInner {
    /// title -> page node id
    pages: BTreeMap<String, String>,
    /// node id -> text
    texts: HashMap<String, String>,
    /// node id -> ordered child ids
    children: HashMap<String, Vec<String>>,
}

/// Shared in-memory outline store.
///
/// Stands in for the host during native tests (and extension test suites).
/// Unlike the real host it applies writes synchronously, which keeps the
/// settings helpers deterministic to assert against; the call-site contract
/// is the same.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page and return its node id.
    pub fn add_page(&self, title: &str) -> String {
        let id = fresh_node_id();
        if let Ok(mut inner) = self.inner.lock() {
            inner.pages.insert(title.to_string(), id.clone());
            inner.texts.insert(id.clone(), title.to_string());
        }
        id
    }

    fn build_subtree(inner: &MemoryInner, id: &str) -> Vec<OutlineNode> {
        inner
            .children
            .get(id)
            .map(|ids| {
                ids.iter()
                    .map(|cid| OutlineNode {
                        id: cid.clone(),
                        text: inner.texts.get(cid).cloned().unwrap_or_default(),
                        children: Self::build_subtree(inner, cid),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn remove_subtree(inner: &mut MemoryInner, id: &str) {
        if let Some(child_ids) = inner.children.remove(id) {
            for cid in child_ids {
                Self::remove_subtree(inner, &cid);
            }
        }
        inner.texts.remove(id);
    }
}

impl OutlineStore for MemoryStore {
    fn find_page_by_title(&self, title: &str) -> Option<String> {
        self.inner.lock().ok()?.pages.get(title).cloned()
    }

    fn tree(&self, parent_id: &str) -> Vec<OutlineNode> {
        self.inner
            .lock()
            .map(|inner| Self::build_subtree(&inner, parent_id))
            .unwrap_or_default()
    }

    fn generate_id(&self) -> String {
        fresh_node_id()
    }

    fn create_node(&self, parent_id: &str, order: usize, text: &str) -> String {
        let id = fresh_node_id();
        if let Ok(mut inner) = self.inner.lock() {
            inner.texts.insert(id.clone(), text.to_string());
            let siblings = inner.children.entry(parent_id.to_string()).or_default();
            let at = order.min(siblings.len());
            siblings.insert(at, id.clone());
        }
        id
    }

    fn update_node(&self, id: &str, text: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            if let Some(t) = inner.texts.get_mut(id) {
                *t = text.to_string();
            }
        }
    }

    fn delete_node(&self, id: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            Self::remove_subtree(&mut inner, id);
            for siblings in inner.children.values_mut() {
                siblings.retain(|cid| cid != id);
            }
        }
    }
}
