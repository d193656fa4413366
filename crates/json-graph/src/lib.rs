//! json-graph - JSON-like values as a graph rather than a tree.
//!
//! [`Value`] covers the usual JSON scalars plus arrays and string-keyed
//! objects, but composites are shared handles: the same array or object may
//! appear at several places in a document, and a document may reference
//! itself. Reference identity of composites is observable through
//! [`Value::composite_id`], which is what cycle-aware traversals key on.
//!
//! Conversion from [`serde_json::Value`] is total; conversion back via
//! [`Value::to_json`] fails on cyclic graphs.

mod interop;
mod value;

pub use serde_json::Number;
pub use value::{CompositeId, Value, ValueKind};
