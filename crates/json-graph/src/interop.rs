//! Conversions between the value graph and `serde_json` trees.

use std::collections::HashSet;

use crate::value::{CompositeId, Value};

impl From<serde_json::Value> for Value {
    /// Tree to graph. Total: every tree is a valid (acyclic) graph. Each
    /// array and object in the tree becomes its own fresh handle.
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
            serde_json::Value::Object(entries) => {
                Value::object(entries.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl Value {
    /// Graph to tree. Returns `None` when the graph contains a cycle;
    /// shared acyclic substructure is expanded into independent subtrees.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        self.to_json_guarded(&mut HashSet::new())
    }

    fn to_json_guarded(&self, visiting: &mut HashSet<CompositeId>) -> Option<serde_json::Value> {
        match self {
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(v) => Some(serde_json::Value::Bool(*v)),
            Value::Number(v) => Some(serde_json::Value::Number(v.clone())),
            Value::String(v) => Some(serde_json::Value::String(v.clone())),
            Value::Array(handle) => {
                let id = CompositeId::of(handle);
                if !visiting.insert(id) {
                    return None;
                }
                let items = handle.borrow();
                let mut out = Vec::with_capacity(items.len());
                for item in items.iter() {
                    out.push(item.to_json_guarded(visiting)?);
                }
                visiting.remove(&id);
                Some(serde_json::Value::Array(out))
            }
            Value::Object(handle) => {
                let id = CompositeId::of(handle);
                if !visiting.insert(id) {
                    return None;
                }
                let mut out = serde_json::Map::new();
                for (key, value) in handle.borrow().iter() {
                    out.insert(key.clone(), value.to_json_guarded(visiting)?);
                }
                visiting.remove(&id);
                Some(serde_json::Value::Object(out))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tree_round_trips_through_the_graph() {
        let tree = json!({
            "a": 1,
            "b": [2, 3, null, true],
            "c": {"d": "four", "e": 5.5}
        });
        let graph = Value::from(tree.clone());
        assert_eq!(graph.to_json(), Some(tree));
    }

    #[test]
    fn cyclic_graph_has_no_tree() {
        let doc = Value::object([("a", Value::from(313i64))]);
        doc.insert("children", doc.clone());
        assert_eq!(doc.to_json(), None);
    }

    #[test]
    fn indirect_cycle_has_no_tree() {
        let inner = Value::array([]);
        let doc = Value::object([("items", inner.clone())]);
        inner.push(doc.clone());
        assert_eq!(doc.to_json(), None);
    }

    #[test]
    fn shared_substructure_expands() {
        let shared = Value::array([Value::from(1i64), Value::from(2i64)]);
        let doc = Value::object([("p", shared.clone()), ("q", shared)]);
        assert_eq!(doc.to_json(), Some(json!({"p": [1, 2], "q": [1, 2]})));
    }
}
