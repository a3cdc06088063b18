//! Read and write extension settings stored as a tree of text blocks.
//!
//! A setting is a key node whose children hold the value(s): the first child
//! for a single-valued setting, all direct children in order for a
//! multi-valued one. Reads work on plain [`OutlineNode`] snapshots; writes go
//! through an [`OutlineStore`] and are fire-and-forget; see the trait docs
//! for the visibility caveats.

use crate::models::OutlineNode;
use crate::store::OutlineStore;

pub mod service;

/// Whole-string, case-insensitive, whitespace-tolerant key comparison.
fn text_matches_key(text: &str, key: &str) -> bool {
    text.trim().to_lowercase() == key.trim().to_lowercase()
}

/// First node whose trimmed text equals `key` (case-insensitive), or `None`.
///
/// Never creates; callers supply a default or create via
/// [`get_or_create_key_node`].
pub fn find_key_node<'a>(tree: &'a [OutlineNode], key: &str) -> Option<&'a OutlineNode> {
    tree.iter().find(|n| text_matches_key(&n.text, key))
}

/// Trimmed text of the key node's first child, if both exist.
pub fn setting_value(tree: &[OutlineNode], key: &str) -> Option<String> {
    find_key_node(tree, key)
        .and_then(|n| n.children.first())
        .map(|c| c.text.trim().to_string())
}

pub fn setting_value_or(tree: &[OutlineNode], key: &str, default: &str) -> String {
    setting_value(tree, key).unwrap_or_else(|| default.to_string())
}

/// Base-10 integer setting; empty or malformed text yields `default`.
pub fn setting_int_or(tree: &[OutlineNode], key: &str, default: i64) -> i64 {
    match setting_value(tree, key) {
        Some(s) if !s.is_empty() => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Trimmed texts of all the key node's children, in order.
///
/// An absent key node (or one with no children) yields `default`.
pub fn setting_values_or(tree: &[OutlineNode], key: &str, default: &[String]) -> Vec<String> {
    match find_key_node(tree, key) {
        Some(node) if !node.children.is_empty() => node
            .children
            .iter()
            .map(|c| c.text.trim().to_string())
            .collect(),
        _ => default.to_vec(),
    }
}

/// Find the key node under `parent_id`, creating it at `order` when absent.
pub fn get_or_create_key_node(
    store: &impl OutlineStore,
    parent_id: &str,
    key: &str,
    order: usize,
) -> OutlineNode {
    let tree = store.tree(parent_id);
    if let Some(node) = find_key_node(&tree, key) {
        return node.clone();
    }
    let id = store.create_node(parent_id, order, key);
    OutlineNode::new(id, key)
}

/// Set the single value of `key` under `parent_id`.
///
/// Updates an existing value node in place; otherwise creates the value node
/// (and the key node itself when missing, at `order`).
pub fn set_setting_value(
    store: &impl OutlineStore,
    parent_id: &str,
    key: &str,
    value: &str,
    order: usize,
) {
    let tree = store.tree(parent_id);
    match find_key_node(&tree, key) {
        Some(key_node) => match key_node.children.first() {
            Some(value_node) => store.update_node(&value_node.id, value),
            None => {
                store.create_node(&key_node.id, 0, value);
            }
        },
        None => {
            let key_id = store.create_node(parent_id, order, key);
            store.create_node(&key_id, 0, value);
        }
    }
}

/// Reconcile the children of `key` against a target list of values.
///
/// Children whose text is absent from `values` are deleted; values absent
/// from the children are created at the end, in target order. Positions of
/// unchanged values are left alone. A value duplicated in `values` and
/// absent from the children is created once per occurrence.
pub fn set_setting_values(
    store: &impl OutlineStore,
    parent_id: &str,
    key: &str,
    values: &[String],
    order: usize,
) {
    let tree = store.tree(parent_id);
    match find_key_node(&tree, key) {
        Some(key_node) => {
            for child in &key_node.children {
                if !values.iter().any(|v| *v == child.text) {
                    store.delete_node(&child.id);
                }
            }
            let kept = key_node
                .children
                .iter()
                .filter(|c| values.iter().any(|v| *v == c.text))
                .count();
            let missing = values
                .iter()
                .filter(|v| !key_node.children.iter().any(|c| c.text == **v));
            for (i, value) in missing.enumerate() {
                store.create_node(&key_node.id, kept + i, value);
            }
        }
        None => {
            let key_id = store.create_node(parent_id, order, key);
            for (i, value) in values.iter().enumerate() {
                store.create_node(&key_id, i, value);
            }
        }
    }
}

/// Append `value` as the last child of `key`, creating the key node (at
/// `order`) when absent. Returns the new value node's id.
pub fn append_setting_value(
    store: &impl OutlineStore,
    parent_id: &str,
    key: &str,
    value: &str,
    order: usize,
) -> String {
    let tree = store.tree(parent_id);
    match find_key_node(&tree, key) {
        Some(key_node) => store.create_node(&key_node.id, key_node.children.len(), value),
        None => {
            let key_id = store.create_node(parent_id, order, key);
            store.create_node(&key_id, 0, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn node(text: &str) -> OutlineNode {
        OutlineNode::new("", text)
    }

    fn node_with_children(text: &str, children: Vec<OutlineNode>) -> OutlineNode {
        OutlineNode {
            id: String::new(),
            text: text.to_string(),
            children,
        }
    }

    #[test]
    fn lookup_matches_trimmed_case_insensitive_whole_string() {
        let tree = vec![node("tokenizer"), node(" Token "), node("token")];
        let found = find_key_node(&tree, "token").expect("should match");
        // First whole-string match wins; "tokenizer" is not a match.
        assert_eq!(found.text, " Token ");
        assert!(find_key_node(&tree, "missing").is_none());
    }

    #[test]
    fn lookup_scenario_token_value_read() {
        let tree = vec![node_with_children(" token ", vec![node("abc123")])];
        assert!(find_key_node(&tree, "Token").is_some());
        assert_eq!(setting_value(&tree, "Token").as_deref(), Some("abc123"));
    }

    #[test]
    fn value_read_defaults() {
        let tree = vec![node_with_children("empty", vec![])];
        assert_eq!(setting_value_or(&tree, "empty", "fallback"), "fallback");
        assert_eq!(setting_value_or(&tree, "missing", "fallback"), "fallback");
        assert_eq!(setting_value(&tree, "empty"), None);
    }

    #[test]
    fn int_read_falls_back_on_malformed_text() {
        let tree = vec![
            node_with_children("limit", vec![node(" 42 ")]),
            node_with_children("bad", vec![node("forty-two")]),
            node_with_children("blank", vec![node("  ")]),
        ];
        assert_eq!(setting_int_or(&tree, "limit", 10), 42);
        assert_eq!(setting_int_or(&tree, "bad", 10), 10);
        assert_eq!(setting_int_or(&tree, "blank", 10), 10);
        assert_eq!(setting_int_or(&tree, "missing", 10), 10);
    }

    #[test]
    fn values_read_returns_all_children_in_order() {
        let tree = vec![node_with_children(
            "tags",
            vec![node(" a "), node("b"), node("c")],
        )];
        assert_eq!(setting_values_or(&tree, "tags", &[]), vec!["a", "b", "c"]);
        let default = vec!["x".to_string()];
        assert_eq!(setting_values_or(&tree, "missing", &default), default);
    }

    #[test]
    fn set_value_creates_key_then_value_when_absent() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");

        set_setting_value(&store, &page, "Limit", "42", 0);

        let tree = store.tree(&page);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].text, "Limit");
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].text, "42");
    }

    #[test]
    fn set_value_updates_existing_value_in_place() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let key = store.create_node(&page, 0, "Limit");
        let value = store.create_node(&key, 0, "42");

        set_setting_value(&store, &page, "limit", "64", 0);

        let tree = store.tree(&page);
        assert_eq!(tree[0].children.len(), 1);
        // Same node, new text.
        assert_eq!(tree[0].children[0].id, value);
        assert_eq!(tree[0].children[0].text, "64");
    }

    #[test]
    fn set_value_fills_in_childless_key_node() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let key = store.create_node(&page, 0, "Limit");

        set_setting_value(&store, &page, "Limit", "42", 3);

        let tree = store.tree(&page);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, key);
        assert_eq!(tree[0].children[0].text, "42");
    }

    #[test]
    fn multi_write_reconciles_against_existing_children() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let key = store.create_node(&page, 0, "tags");
        let a = store.create_node(&key, 0, "a");
        store.create_node(&key, 1, "c");

        set_setting_values(
            &store,
            &page,
            "tags",
            &["a".to_string(), "b".to_string()],
            0,
        );

        let tree = store.tree(&page);
        let children = &tree[0].children;
        let mut texts: Vec<&str> = children.iter().map(|c| c.text.as_str()).collect();
        texts.sort_unstable();
        assert_eq!(texts, vec!["a", "b"]);
        // "a" was untouched, not recreated.
        assert!(children.iter().any(|c| c.id == a));
    }

    #[test]
    fn multi_write_creates_key_node_with_values_when_absent() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");

        let values = vec!["x".to_string(), "y".to_string()];
        set_setting_values(&store, &page, "tags", &values, 1);

        let tree = store.tree(&page);
        assert_eq!(tree[0].text, "tags");
        let texts: Vec<&str> = tree[0].children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "y"]);
    }

    #[test]
    fn multi_write_is_idempotent() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        set_setting_values(&store, &page, "tags", &values, 0);
        let first = store.tree(&page);
        set_setting_values(&store, &page, "tags", &values, 0);
        let second = store.tree(&page);

        assert_eq!(first, second);
    }

    #[test]
    fn multi_write_creates_one_child_per_duplicate_occurrence() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");

        let values = vec!["a".to_string(), "a".to_string()];
        set_setting_values(&store, &page, "tags", &values, 0);

        // Reconciling into an existing key node repeats absent duplicates.
        set_setting_values(&store, &page, "tags", &["b".to_string(), "b".to_string()], 0);
        let tree = store.tree(&page);
        let texts: Vec<&str> = tree[0].children.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "b"]);
    }

    #[test]
    fn append_adds_last_and_returns_new_id() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let key = store.create_node(&page, 0, "accounts");
        store.create_node(&key, 0, "first");

        let id = append_setting_value(&store, &page, "accounts", "second", 0);

        let tree = store.tree(&page);
        let children = &tree[0].children;
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].id, id);
        assert_eq!(children[1].text, "second");
    }

    #[test]
    fn append_creates_key_node_when_absent() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");

        let id = append_setting_value(&store, &page, "accounts", "only", 2);

        let tree = store.tree(&page);
        assert_eq!(tree[0].text, "accounts");
        assert_eq!(tree[0].children[0].id, id);
        assert_eq!(tree[0].children[0].text, "only");
    }

    #[test]
    fn get_or_create_returns_existing_node_untouched() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");
        let key = store.create_node(&page, 0, "oauth");

        let node = get_or_create_key_node(&store, &page, "OAuth", 0);
        assert_eq!(node.id, key);
        assert_eq!(store.tree(&page).len(), 1);
    }

    #[test]
    fn get_or_create_creates_missing_key_node() {
        let store = MemoryStore::new();
        let page = store.add_page("ext/test");

        let node = get_or_create_key_node(&store, &page, "oauth", 0);

        let tree = store.tree(&page);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].id, node.id);
        assert_eq!(tree[0].text, "oauth");
    }
}
