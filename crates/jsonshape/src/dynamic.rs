//! Host-side values of unknown shape.
//!
//! `Dynamic` models what an embedding runtime can hand over for validation: besides the JSON
//! scalars it has `undefined`, functions, symbols and non-finite numbers. Containers are shared
//! and mutable, so a container may end up holding itself.
use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

/// A value of unknown shape.
#[derive(Debug, Clone)]
pub enum Dynamic {
    Undefined,
    Null,
    Bool(bool),
    /// Any double, including NaN and the infinities.
    Number(f64),
    String(Box<str>),
    Array(Array),
    Object(Object),
    Function(Function),
    Symbol(Symbol),
}

/// The kind of a [`Dynamic`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
    Symbol,
}

impl fmt::Display for DynamicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DynamicType::Undefined => "undefined",
            DynamicType::Null => "null",
            DynamicType::Boolean => "boolean",
            DynamicType::Number => "number",
            DynamicType::String => "string",
            DynamicType::Array => "array",
            DynamicType::Object => "object",
            DynamicType::Function => "function",
            DynamicType::Symbol => "symbol",
        })
    }
}

impl Dynamic {
    #[must_use]
    pub fn ty(&self) -> DynamicType {
        match self {
            Dynamic::Undefined => DynamicType::Undefined,
            Dynamic::Null => DynamicType::Null,
            Dynamic::Bool(_) => DynamicType::Boolean,
            Dynamic::Number(_) => DynamicType::Number,
            Dynamic::String(_) => DynamicType::String,
            Dynamic::Array(_) => DynamicType::Array,
            Dynamic::Object(_) => DynamicType::Object,
            Dynamic::Function(_) => DynamicType::Function,
            Dynamic::Symbol(_) => DynamicType::Symbol,
        }
    }

    /// Shorthand for a named function value.
    #[must_use]
    pub fn function(name: &str) -> Dynamic {
        Dynamic::Function(Function::new(name))
    }

    /// Shorthand for a symbol value.
    #[must_use]
    pub fn symbol(description: &str) -> Dynamic {
        Dynamic::Symbol(Symbol::new(description))
    }
}

impl From<bool> for Dynamic {
    fn from(value: bool) -> Self {
        Dynamic::Bool(value)
    }
}

impl From<f64> for Dynamic {
    fn from(value: f64) -> Self {
        Dynamic::Number(value)
    }
}

impl From<i32> for Dynamic {
    fn from(value: i32) -> Self {
        Dynamic::Number(f64::from(value))
    }
}

impl From<&str> for Dynamic {
    fn from(value: &str) -> Self {
        Dynamic::String(value.into())
    }
}

impl From<String> for Dynamic {
    fn from(value: String) -> Self {
        Dynamic::String(value.into_boxed_str())
    }
}

impl From<Array> for Dynamic {
    fn from(value: Array) -> Self {
        Dynamic::Array(value)
    }
}

impl From<Object> for Dynamic {
    fn from(value: Object) -> Self {
        Dynamic::Object(value)
    }
}

impl From<Vec<Dynamic>> for Dynamic {
    fn from(value: Vec<Dynamic>) -> Self {
        Dynamic::Array(Array::from(value))
    }
}

impl<K: Into<Box<str>>> FromIterator<(K, Dynamic)> for Dynamic {
    fn from_iter<T: IntoIterator<Item = (K, Dynamic)>>(iter: T) -> Self {
        Dynamic::Object(iter.into_iter().collect())
    }
}

/// Pointer identity of a shared container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ContainerId(usize);

/// A shared, growable sequence of values. Clones refer to the same storage.
#[derive(Clone, Default)]
pub struct Array(Rc<RefCell<Vec<Dynamic>>>);

impl Array {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, value: impl Into<Dynamic>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Remove every element. Breaks reference cycles that go through this array.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Borrow the elements. Panics if the array is currently borrowed mutably.
    #[must_use]
    pub fn items(&self) -> Ref<'_, [Dynamic]> {
        Ref::map(self.0.borrow(), Vec::as_slice)
    }

    /// Whether both handles point to the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> ContainerId {
        ContainerId(Rc::as_ptr(&self.0).cast::<()>() as usize)
    }
}

// Containers may be cyclic, so only the top level is printed.
impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("id", &self.id().0)
            .field("len", &self.0.try_borrow().map(|items| items.len()).ok())
            .finish()
    }
}

impl From<Vec<Dynamic>> for Array {
    fn from(value: Vec<Dynamic>) -> Self {
        Array(Rc::new(RefCell::new(value)))
    }
}

impl FromIterator<Dynamic> for Array {
    fn from_iter<T: IntoIterator<Item = Dynamic>>(iter: T) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

/// A shared, string-keyed mapping. Keys are unique and keep their insertion order.
/// Clones refer to the same storage.
#[derive(Clone, Default)]
pub struct Object(Rc<RefCell<Vec<(Box<str>, Dynamic)>>>);

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property. An existing property with the same key is replaced in place and
    /// its previous value is returned.
    pub fn insert(&self, key: impl Into<Box<str>>, value: impl Into<Dynamic>) -> Option<Dynamic> {
        let key = key.into();
        let value = value.into();
        let mut entries = self.0.borrow_mut();
        if let Some((_, existing)) = entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        entries.push((key, value));
        None
    }

    /// Remove every property. Breaks reference cycles that go through this object.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Dynamic> {
        self.0
            .borrow()
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, v)| v.clone())
    }

    /// Borrow the properties in insertion order. Panics if the object is currently borrowed
    /// mutably.
    #[must_use]
    pub fn entries(&self) -> Ref<'_, [(Box<str>, Dynamic)]> {
        Ref::map(self.0.borrow(), Vec::as_slice)
    }

    /// Whether both handles point to the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn id(&self) -> ContainerId {
        ContainerId(Rc::as_ptr(&self.0).cast::<()>() as usize)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys = self
            .0
            .try_borrow()
            .map(|entries| entries.iter().map(|(k, _)| k.clone()).collect::<Vec<_>>())
            .ok();
        f.debug_struct("Object")
            .field("id", &self.id().0)
            .field("keys", &keys)
            .finish()
    }
}

impl<K: Into<Box<str>>> FromIterator<(K, Dynamic)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, Dynamic)>>(iter: T) -> Self {
        let object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

/// An opaque callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: Box<str>,
}

impl Function {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A unique, opaque token with an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    description: Box<str>,
}

impl Symbol {
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            description: description.into(),
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::{Array, Dynamic, DynamicType, Object};
    use test_case::test_case;

    #[test]
    fn object_insert_replaces_in_place() {
        let object = Object::new();
        assert!(object.insert("a", 1).is_none());
        object.insert("b", 2);
        let previous = object.insert("a", 3);
        assert!(matches!(previous, Some(Dynamic::Number(n)) if n == 1.0));
        let keys: Vec<_> = object.entries().iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert!(matches!(object.get("a"), Some(Dynamic::Number(n)) if n == 3.0));
        assert!(object.get("c").is_none());
    }

    #[test]
    fn clones_share_storage() {
        let array = Array::new();
        let alias = array.clone();
        alias.push(true);
        assert_eq!(array.len(), 1);
        assert!(array.ptr_eq(&alias));
        assert_eq!(array.id(), alias.id());
        assert!(!array.ptr_eq(&Array::new()));
    }

    #[test]
    fn self_reference_can_be_broken() {
        let array = Array::new();
        array.push(array.clone());
        assert_eq!(array.len(), 1);
        array.clear();
        assert!(array.is_empty());
    }

    #[test_case(Dynamic::Undefined, DynamicType::Undefined, "undefined")]
    #[test_case(Dynamic::Null, DynamicType::Null, "null")]
    #[test_case(Dynamic::from(true), DynamicType::Boolean, "boolean")]
    #[test_case(Dynamic::from(f64::NAN), DynamicType::Number, "number")]
    #[test_case(Dynamic::from("x"), DynamicType::String, "string")]
    #[test_case(Dynamic::from(vec![]), DynamicType::Array, "array")]
    #[test_case(Dynamic::from(Object::new()), DynamicType::Object, "object")]
    #[test_case(Dynamic::function("f"), DynamicType::Function, "function")]
    #[test_case(Dynamic::symbol("s"), DynamicType::Symbol, "symbol")]
    fn types(value: Dynamic, expected: DynamicType, name: &str) {
        assert_eq!(value.ty(), expected);
        assert_eq!(expected.to_string(), name);
    }
}
