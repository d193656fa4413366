//! The value graph type and its identity machinery.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::rc::Rc;

use serde_json::Number;

/// Shape category of a [`Value`]: the scalar kinds, ordered sequences, and
/// keyed mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Whether this kind is a composite (array or object) as opposed to a
    /// scalar.
    pub fn is_composite(self) -> bool {
        matches!(self, ValueKind::Array | ValueKind::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

/// Reference identity of a composite value.
///
/// Two `CompositeId`s are equal exactly when they were taken from the same
/// live array or object handle. Structurally equal but distinct composites
/// have distinct ids. The id is only meaningful while the handle it was
/// taken from is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeId(usize);

impl CompositeId {
    pub(crate) fn of<T>(handle: &Rc<T>) -> CompositeId {
        CompositeId(Rc::as_ptr(handle) as *const () as usize)
    }
}

/// A JSON-like value. Scalars are plain; arrays and objects are shared
/// handles, so cloning a composite aliases it rather than copying it.
///
/// There is deliberately no `PartialEq` impl: a derived one would recurse
/// forever on cyclic graphs. Deep equality lives in the companion engine
/// crate; reference identity is [`Value::same_composite`].
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Rc<RefCell<Vec<Value>>>),
    Object(Rc<RefCell<BTreeMap<String, Value>>>),
}

impl Value {
    /// Creates a fresh array handle from `items`.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates a fresh object handle from `entries`.
    pub fn object<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(Rc::new(RefCell::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        )))
    }

    /// The shape category of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Whether this value is an array or an object.
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Whether this value is a scalar (`null` included).
    pub fn is_primitive(&self) -> bool {
        !self.is_composite()
    }

    /// Reference identity of this value's handle, or `None` for scalars.
    pub fn composite_id(&self) -> Option<CompositeId> {
        match self {
            Value::Array(handle) => Some(CompositeId::of(handle)),
            Value::Object(handle) => Some(CompositeId::of(handle)),
            _ => None,
        }
    }

    /// True iff both sides are composites sharing one handle.
    ///
    /// This is reference identity, not structural equality: two separately
    /// built `[1, 2]` arrays are not the same composite.
    pub fn same_composite(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Appends `item` if this value is an array. Returns whether the push
    /// happened.
    pub fn push(&self, item: Value) -> bool {
        match self {
            Value::Array(handle) => {
                handle.borrow_mut().push(item);
                true
            }
            _ => false,
        }
    }

    /// Inserts `key -> value` if this value is an object, replacing any
    /// previous entry for `key`. Returns whether the insert happened.
    ///
    /// Inserting a value that (transitively) contains the object itself is
    /// how self-referential documents are tied together.
    pub fn insert(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Object(handle) => {
                handle.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Number(Number::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        // Same policy as serde_json: non-finite floats have no JSON number
        // representation and collapse to null.
        Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_guarded(f, &mut HashSet::new())
    }
}

impl Value {
    /// JSON-shaped rendering that prints `<cycle>` at back-references
    /// instead of recursing forever.
    fn fmt_guarded(
        &self,
        f: &mut fmt::Formatter<'_>,
        visiting: &mut HashSet<CompositeId>,
    ) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Number(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::Array(handle) => {
                let id = CompositeId::of(handle);
                if !visiting.insert(id) {
                    return f.write_str("<cycle>");
                }
                f.write_str("[")?;
                for (i, item) in handle.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_guarded(f, visiting)?;
                }
                visiting.remove(&id);
                f.write_str("]")
            }
            Value::Object(handle) => {
                let id = CompositeId::of(handle);
                if !visiting.insert(id) {
                    return f.write_str("<cycle>");
                }
                f.write_str("{")?;
                for (i, (key, value)) in handle.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: ")?;
                    value.fmt_guarded(f, visiting)?;
                }
                visiting.remove(&id);
                f.write_str("}")
            }
        }
    }
}
