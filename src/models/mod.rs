use serde::{Deserialize, Serialize};

/// One node in the host application's hierarchical text-block document.
///
/// The host owns the storage; this crate only ever sees snapshots of it and
/// mutates it through [`crate::store::OutlineStore`]. Child order is
/// meaningful and preserved by the host.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct OutlineNode {
    /// Opaque stable identifier assigned by the host.
    pub id: String,

    pub text: String,

    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }
}
