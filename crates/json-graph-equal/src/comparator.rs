//! The comparator capability and the three built-in strategies.
//!
//! A comparator both recognizes a value shape (`can_handle`) and computes
//! equality for two values of that shape (`compare`). Dispatch is driven by
//! the left operand only; each `compare` validates the right operand itself
//! and answers `false` on shape disagreement, so cross-shape comparisons
//! never error.

use json_graph::Value;

use crate::engine::Comparison;
use crate::error::EngineError;

/// A deep-equality strategy for one shape of value.
///
/// Contract: whenever `can_handle(a)` is true, `compare(a, b, _)` must be
/// defined for any `b` and yield `Ok(false)` rather than an error when `b`'s
/// shape disagrees. Comparators are stateless; recursion into nested values
/// goes through the [`Comparison`] handle so the engine's cycle guard stays
/// in the loop.
pub trait Comparator {
    /// Shape predicate: does this comparator apply to `value`?
    fn can_handle(&self, value: &Value) -> bool;

    /// Equality for a pair whose left side matched `can_handle`.
    fn compare(
        &self,
        a: &Value,
        b: &Value,
        cmp: &mut Comparison<'_>,
    ) -> Result<bool, EngineError>;
}

/// Strict scalar equality: same kind, same value, no coercion.
///
/// Handles everything that is not an array or object, `null` included.
/// Numbers compare with [`json_graph::Number`] semantics, so `0` and `0.0`
/// are different values.
pub struct PrimitiveComparator;

impl Comparator for PrimitiveComparator {
    fn can_handle(&self, value: &Value) -> bool {
        value.is_primitive()
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        _cmp: &mut Comparison<'_>,
    ) -> Result<bool, EngineError> {
        Ok(match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => x == y,
            (Value::String(x), Value::String(y)) => x == y,
            _ => false,
        })
    }
}

/// Index-aligned sequence equality.
pub struct ArrayComparator;

impl Comparator for ArrayComparator {
    fn can_handle(&self, value: &Value) -> bool {
        value.is_array()
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        cmp: &mut Comparison<'_>,
    ) -> Result<bool, EngineError> {
        let (xs, ys) = match (a, b) {
            (Value::Array(xs), Value::Array(ys)) => (xs.borrow(), ys.borrow()),
            _ => return Ok(false),
        };
        if xs.len() != ys.len() {
            return Ok(false);
        }
        for (x, y) in xs.iter().zip(ys.iter()) {
            if !cmp.compare(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Key-set and per-key value equality, insensitive to key order.
pub struct ObjectComparator;

impl Comparator for ObjectComparator {
    fn can_handle(&self, value: &Value) -> bool {
        value.is_object()
    }

    fn compare(
        &self,
        a: &Value,
        b: &Value,
        cmp: &mut Comparison<'_>,
    ) -> Result<bool, EngineError> {
        let (xs, ys) = match (a, b) {
            (Value::Object(xs), Value::Object(ys)) => (xs.borrow(), ys.borrow()),
            _ => return Ok(false),
        };
        // Size first, then membership: equal sizes plus every key of `a`
        // present in `b` means the key sets coincide.
        if xs.len() != ys.len() {
            return Ok(false);
        }
        for (key, x) in xs.iter() {
            let y = match ys.get(key) {
                Some(y) => y,
                None => return Ok(false),
            };
            if !cmp.compare(x, y)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
