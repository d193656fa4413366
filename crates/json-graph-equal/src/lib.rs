//! json-graph-equal - structural deep equality for JSON value graphs.
//!
//! Determines whether two [`Value`]s are recursively equivalent in shape
//! and content, surviving self-referential documents without infinite
//! recursion. The work is split between two concepts:
//!
//! - a [`Comparator`] recognizes one shape of value and computes equality
//!   for a pair of that shape, recursing through the engine for nested
//!   values;
//! - the [`Engine`] owns an ordered comparator list, dispatches each pair
//!   to the first comparator accepting the left operand, and keeps an
//!   identity-keyed cycle guard per top-level call.
//!
//! The built-in comparators cover scalars, arrays, and objects with strict
//! (coercion-free) semantics. [`Engine::register_comparator`] prepends a
//! custom strategy ahead of the built-ins, which is how callers extend or
//! override behavior without touching the core.
//!
//! ```
//! use json_graph::Value;
//! use json_graph_equal::deep_equal;
//!
//! let doc = Value::object([("a", Value::from(313i64))]);
//! doc.insert("children", doc.clone());
//!
//! // Self-referential, and still terminates.
//! assert!(deep_equal(&doc, &doc));
//! ```

mod comparator;
mod engine;
mod error;

pub use comparator::{ArrayComparator, Comparator, ObjectComparator, PrimitiveComparator};
pub use engine::{Comparison, Engine};
pub use error::EngineError;

pub use json_graph::{CompositeId, Value, ValueKind};

/// Deep equality with the default comparator set.
///
/// Convenience over [`Engine::compare_deep`] for callers who never register
/// custom comparators.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match Engine::new().compare_deep(a, b) {
        Ok(equal) => equal,
        // The built-in predicates partition every ValueKind.
        Err(_) => unreachable!("built-in comparators cover every value shape"),
    }
}

/// Deep equality of two `serde_json` trees, through the default engine.
///
/// The upstream-shaped entry point for callers who never build cyclic
/// documents.
pub fn deep_equal_json(a: &serde_json::Value, b: &serde_json::Value) -> bool {
    deep_equal(&Value::from(a.clone()), &Value::from(b.clone()))
}
