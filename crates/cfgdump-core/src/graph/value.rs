//! Value Graph Representation
//!
//! Defines the heterogeneous values a dump is taken from. Containers are
//! shared, interior-mutable handles so a graph may reuse a node in several
//! places or point back at one of its own ancestors.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use super::pattern::Pattern;

/// Identity of a container handle. Two handles share a `NodeId` exactly when
/// they point at the same allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Graph value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or empty value
    Nullish,

    Bool(bool),

    /// Numeric value (IEEE 754)
    Number(f64),

    String(String),

    /// Compiled pattern, never recursed into
    Pattern(Pattern),

    /// Invocable value, never recursed into
    Callable(Callable),

    Sequence(Sequence),

    Mapping(Mapping),
}

impl Value {
    /// True for the canonical empty/zero/false value of each scalar type.
    /// Containers, patterns and callables are never falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Nullish => true,
            Value::Bool(b) => !b,
            Value::Number(n) => *n == 0.0 || n.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::Pattern(_) | Value::Callable(_) | Value::Sequence(_) | Value::Mapping(_) => {
                false
            }
        }
    }

    /// Identity of the container behind this value, if it is one.
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            Value::Sequence(seq) => Some(seq.id()),
            Value::Mapping(map) => Some(map.id()),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Pattern> for Value {
    fn from(p: Pattern) -> Self {
        Value::Pattern(p)
    }
}

impl From<Callable> for Value {
    fn from(c: Callable) -> Self {
        Value::Callable(c)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items.into_iter().collect())
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

/// Named or anonymous invocable value. Only its name is observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Callable {
    name: Option<String>,
}

impl Callable {
    /// An empty name is treated as anonymous.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Callable {
            name: (!name.is_empty()).then_some(name),
        }
    }

    pub fn anonymous() -> Self {
        Callable { name: None }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Shared ordered list of values.
///
/// Cloning the handle shares the underlying list. Equality is structural
/// with an identity shortcut; comparing two distinct cyclic graphs does not
/// terminate.
#[derive(Clone, Default)]
pub struct Sequence(Rc<RefCell<Vec<Value>>>);

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Borrow the items. Panics if the list is being mutated.
    pub fn items(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence(Rc::new(RefCell::new(iter.into_iter().collect())))
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(items) => f.debug_list().entries(items.iter()).finish(),
            Err(_) => write!(f, "Sequence(<borrowed>)"),
        }
    }
}

/// Shared string-keyed entries, kept in insertion order.
///
/// Inserting an existing key replaces its value in place.
#[derive(Clone, Default)]
pub struct Mapping(Rc<RefCell<Vec<(String, Value)>>>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.0) as *const () as usize)
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Borrow the entries. Panics if the mapping is being mutated.
    pub fn entries(&self) -> Ref<'_, Vec<(String, Value)>> {
        self.0.borrow()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let map = Mapping::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            Err(_) => write!(f, "Mapping(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_scalars() {
        assert!(Value::Nullish.is_falsy());
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Number(0.0).is_falsy());
        assert!(Value::Number(-0.0).is_falsy());
        assert!(Value::Number(f64::NAN).is_falsy());
        assert!(Value::from("").is_falsy());

        assert!(!Value::Bool(true).is_falsy());
        assert!(!Value::Number(-1.0).is_falsy());
        assert!(!Value::from("0").is_falsy());
        assert!(!Value::Mapping(Mapping::new()).is_falsy());
        assert!(!Value::Sequence(Sequence::new()).is_falsy());
        assert!(!Value::Callable(Callable::anonymous()).is_falsy());
    }

    #[test]
    fn clones_share_identity() {
        let map = Mapping::new();
        let alias = map.clone();
        alias.insert("a", 1);
        assert_eq!(map.id(), alias.id());
        assert_eq!(map.get("a"), Some(Value::Number(1.0)));
        assert_ne!(map.id(), Mapping::new().id());
    }

    #[test]
    fn insert_replaces_in_place() {
        let map = Mapping::new();
        map.insert("a", 1);
        map.insert("b", 2);
        map.insert("a", 3);
        let keys: Vec<String> = map.entries().iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(Value::Number(3.0)));
    }

    #[test]
    fn self_reference_compares_equal_to_itself() {
        let map = Mapping::new();
        map.insert("key", map.clone());
        assert_eq!(Value::Mapping(map.clone()), Value::Mapping(map));
    }

    #[test]
    fn empty_callable_name_is_anonymous() {
        assert_eq!(Callable::named(""), Callable::anonymous());
        assert_eq!(Callable::named("build").name(), Some("build"));
    }
}
