use json_graph::ValueKind;
use thiserror::Error;

/// Errors surfaced by the equality engine.
///
/// There is exactly one: dispatch found no comparator for the left-hand
/// value's shape. This is a configuration error (the comparator set is
/// incomplete after custom registration), never a data error. Mismatched
/// shapes, unequal lengths, missing keys, and cyclic self-reference are all
/// ordinary `false`/`true` results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("no comparator can handle value of kind {0}")]
    NoComparatorFound(ValueKind),
}
