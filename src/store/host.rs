use crate::models::OutlineNode;
use crate::store::{fresh_node_id, OutlineStore};
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Name of the API object the host exposes on `window`.
const HOST_API_GLOBAL: &str = "outlineAPI";

#[derive(Serialize, Clone, Debug)]
struct CreateNodeRequest<'a> {
    #[serde(rename = "parentId")]
    parent_id: &'a str,
    order: usize,
    text: &'a str,
    id: &'a str,
}

#[derive(Serialize, Clone, Debug)]
struct UpdateNodeRequest<'a> {
    id: &'a str,
    text: &'a str,
}

#[derive(Serialize, Clone, Debug)]
struct DeleteNodeRequest<'a> {
    id: &'a str,
}

/// Bridge to the host's global outline API.
///
/// Tree reads are synchronous snapshots of the host's current state. Writes
/// hand a payload to the host and consume the returned promise on the
/// microtask queue without surfacing its result. When the extension runs
/// outside the host (or the host drops a method), reads come back empty and
/// writes are no-ops.
#[derive(Clone)]
pub struct HostStore {
    api: JsValue,
}

impl HostStore {
    /// Attach to `window.outlineAPI`, if present.
    pub fn from_window() -> Option<Self> {
        let api = web_sys::window()?.get(HOST_API_GLOBAL)?;
        if api.is_object() {
            Some(Self { api: api.into() })
        } else {
            None
        }
    }

    fn method(&self, name: &str) -> Option<Function> {
        Reflect::get(&self.api, &JsValue::from_str(name))
            .ok()?
            .dyn_into()
            .ok()
    }

    fn call1(&self, name: &str, arg: &JsValue) -> Option<JsValue> {
        self.method(name)?.call1(&self.api, arg).ok()
    }

    /// Fire-and-forget submission of a mutating host call.
    fn dispatch(&self, name: &str, payload: &impl Serialize) {
        let Ok(arg) = serde_wasm_bindgen::to_value(payload) else {
            return;
        };
        let Some(result) = self.call1(name, &arg) else {
            return;
        };
        if let Ok(promise) = result.dyn_into::<Promise>() {
            spawn_local(async move {
                // Completion and failure are intentionally unobserved.
                let _ = JsFuture::from(promise).await;
            });
        }
    }
}

impl OutlineStore for HostStore {
    fn find_page_by_title(&self, title: &str) -> Option<String> {
        self.call1("findPageByTitle", &JsValue::from_str(title))?
            .as_string()
            .filter(|id| !id.is_empty())
    }

    fn tree(&self, parent_id: &str) -> Vec<OutlineNode> {
        self.call1("readTree", &JsValue::from_str(parent_id))
            .and_then(|v| serde_wasm_bindgen::from_value(v).ok())
            .unwrap_or_default()
    }

    fn generate_id(&self) -> String {
        self.method("generateId")
            .and_then(|f| f.call0(&self.api).ok())
            .and_then(|v| v.as_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(fresh_node_id)
    }

    fn create_node(&self, parent_id: &str, order: usize, text: &str) -> String {
        let id = self.generate_id();
        self.dispatch(
            "createNode",
            &CreateNodeRequest {
                parent_id,
                order,
                text,
                id: &id,
            },
        );
        id
    }

    fn update_node(&self, id: &str, text: &str) {
        self.dispatch("updateNode", &UpdateNodeRequest { id, text });
    }

    fn delete_node(&self, id: &str) {
        self.dispatch("deleteNode", &DeleteNodeRequest { id });
    }
}
