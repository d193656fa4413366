//! Dispatch engine and per-call cycle guard.

use std::collections::HashSet;

use json_graph::{CompositeId, Value};
use tracing::{debug, trace, warn};

use crate::comparator::{ArrayComparator, Comparator, ObjectComparator, PrimitiveComparator};
use crate::error::EngineError;

/// The deep-equality engine: an ordered list of comparators, first match
/// wins on the left operand's shape.
///
/// The engine itself is stateless between calls. Each top-level
/// [`Engine::compare_deep`] gets a fresh [`Comparison`] context carrying the
/// cycle guard, so independent calls never observe each other's guard
/// entries and a shared `&Engine` stays safe across sequential calls.
pub struct Engine {
    comparators: Vec<Box<dyn Comparator>>,
}

impl Engine {
    /// An engine with the three built-in comparators installed. Their
    /// predicates partition every value shape, so dispatch cannot fail
    /// until custom registrations enter the picture.
    pub fn new() -> Engine {
        Engine {
            comparators: vec![
                Box::new(PrimitiveComparator),
                Box::new(ArrayComparator),
                Box::new(ObjectComparator),
            ],
        }
    }

    /// An engine with no comparators at all, for fully custom stacks.
    /// Every comparison fails with [`EngineError::NoComparatorFound`] until
    /// something is registered.
    pub fn empty() -> Engine {
        Engine {
            comparators: Vec::new(),
        }
    }

    /// Prepends `comparator`, so it is consulted before everything
    /// registered earlier, built-ins included. Registration order is the
    /// override order: last registered wins. No deduplication.
    pub fn register_comparator(&mut self, comparator: Box<dyn Comparator>) {
        self.comparators.insert(0, comparator);
        debug!(
            total = self.comparators.len(),
            "registered comparator at highest priority"
        );
    }

    /// Top-level deep equality of `a` and `b`.
    ///
    /// Starts a fresh cycle guard for this call tree and dispatches. The
    /// only error is [`EngineError::NoComparatorFound`] when no registered
    /// comparator accepts a left-hand value encountered during the walk.
    pub fn compare_deep(&self, a: &Value, b: &Value) -> Result<bool, EngineError> {
        Comparison::new(self).compare(a, b)
    }
}

impl Default for Engine {
    fn default() -> Engine {
        Engine::new()
    }
}

/// One top-level comparison call tree.
///
/// Holds the engine reference and the guard set of composite identities
/// visited so far. Comparators receive this handle and recurse through
/// [`Comparison::compare`], which keeps the guard in every nested step.
pub struct Comparison<'e> {
    engine: &'e Engine,
    visiting: HashSet<CompositeId>,
}

impl<'e> Comparison<'e> {
    fn new(engine: &'e Engine) -> Comparison<'e> {
        Comparison {
            engine,
            visiting: HashSet::new(),
        }
    }

    /// Compares one pair, recursing through the registered comparators.
    ///
    /// A composite left operand is recorded in the guard on first visit and
    /// stays recorded for the rest of the call tree. Seeing it again means
    /// the walk has come back around (a cycle, or shared substructure), and
    /// the comparison collapses to reference identity instead of recursing.
    pub fn compare(&mut self, a: &Value, b: &Value) -> Result<bool, EngineError> {
        if let Some(id) = a.composite_id() {
            if !self.visiting.insert(id) {
                trace!(kind = %a.kind(), "revisited composite, comparing by identity");
                return Ok(a.same_composite(b));
            }
        }
        let engine = self.engine;
        let comparator = match engine.comparators.iter().find(|c| c.can_handle(a)) {
            Some(comparator) => comparator,
            None => {
                warn!(kind = %a.kind(), "no comparator matched value shape");
                return Err(EngineError::NoComparatorFound(a.kind()));
            }
        };
        comparator.compare(a, b, self)
    }
}
