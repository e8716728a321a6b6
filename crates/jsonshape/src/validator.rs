use ahash::{AHashMap, AHashSet};

use crate::{
    dynamic::{Array, ContainerId, Dynamic, Object},
    error::ValidationError,
    options::ValidationOptions,
    paths::LazyLocation,
    tracing::{TracingCallback, TracingContext},
    value::{JsonValue, Number},
};

/// Decides whether dynamic values belong to the JSON grammar.
///
/// ```rust
/// use jsonshape::{Dynamic, JsonValue};
///
/// let validator = jsonshape::options().with_max_depth(8).build();
/// let input: Dynamic = [("name", Dynamic::from("Ada"))].into_iter().collect();
/// let value = validator.validate(&input).expect("Valid input");
/// assert_eq!(value.get("name"), Some(&JsonValue::from("Ada")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    options: ValidationOptions,
}

impl Default for Validator {
    fn default() -> Self {
        ValidationOptions::default().build()
    }
}

impl Validator {
    pub(crate) fn new(options: ValidationOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.options.max_depth()
    }

    /// Convert `input` into a [`JsonValue`], or report the first node that does not conform.
    ///
    /// Children are visited depth-first, left to right, so the reported error is deterministic.
    ///
    /// # Errors
    ///
    /// Returns the first failure found in `input`.
    pub fn validate(&self, input: &Dynamic) -> Result<JsonValue, ValidationError> {
        Walker::new(self.max_depth(), None).run(input)
    }

    /// Like [`Validator::validate`], additionally reporting every visited node to `callback`.
    ///
    /// # Errors
    ///
    /// Returns the first failure found in `input`.
    pub fn trace(
        &self,
        input: &Dynamic,
        callback: TracingCallback<'_>,
    ) -> Result<JsonValue, ValidationError> {
        Walker::new(self.max_depth(), Some(callback)).run(input)
    }

    /// Check `input` without building a value.
    #[must_use]
    pub fn is_valid(&self, input: &Dynamic) -> bool {
        Walker::new(self.max_depth(), None).check(input, 0)
    }
}

struct Walker<'t> {
    max_depth: u32,
    /// Containers on the current recursion stack.
    visiting: AHashSet<ContainerId>,
    callback: Option<TracingCallback<'t>>,
}

impl<'t> Walker<'t> {
    fn new(max_depth: u32, callback: Option<TracingCallback<'t>>) -> Self {
        Self {
            max_depth,
            visiting: AHashSet::new(),
            callback,
        }
    }

    fn run(mut self, input: &Dynamic) -> Result<JsonValue, ValidationError> {
        let result = self.walk(input, &LazyLocation::new(), 0);
        if let Err(error) = &result {
            ::tracing::debug!(
                kind = ?error.kind(),
                path = %error.path(),
                "Input is not a JSON value"
            );
        }
        result
    }

    fn walk(
        &mut self,
        input: &Dynamic,
        location: &LazyLocation<'_>,
        depth: u32,
    ) -> Result<JsonValue, ValidationError> {
        let result = match input {
            Dynamic::Null => Ok(JsonValue::Null),
            Dynamic::Bool(value) => Ok(JsonValue::Bool(*value)),
            Dynamic::Number(value) => Number::new(*value)
                .map(JsonValue::Number)
                .ok_or_else(|| ValidationError::non_finite_number(location.into(), *value)),
            Dynamic::String(value) => Ok(JsonValue::String(value.clone())),
            Dynamic::Array(array) => self.walk_array(array, location, depth),
            Dynamic::Object(object) => self.walk_object(object, location, depth),
            Dynamic::Undefined | Dynamic::Function(_) | Dynamic::Symbol(_) => Err(
                ValidationError::unsupported_type(location.into(), input.ty()),
            ),
        };
        if let Some(callback) = self.callback.as_mut() {
            TracingContext::new(location, input.ty(), result.is_ok()).call(&mut **callback);
        }
        result
    }

    fn walk_array(
        &mut self,
        array: &Array,
        location: &LazyLocation<'_>,
        depth: u32,
    ) -> Result<JsonValue, ValidationError> {
        let id = array.id();
        let depth = self.enter(id, location, depth)?;
        ::tracing::trace!(depth, len = array.len(), "Entering array");
        let result = {
            let items = array.items();
            let mut output = Vec::with_capacity(items.len());
            let mut failure = None;
            for (idx, item) in items.iter().enumerate() {
                match self.walk(item, &location.push_index(idx), depth) {
                    Ok(value) => output.push(value),
                    Err(error) => {
                        failure = Some(error);
                        break;
                    }
                }
            }
            match failure {
                Some(error) => Err(error),
                None => Ok(JsonValue::Array(output.into_boxed_slice())),
            }
        };
        self.visiting.remove(&id);
        result
    }

    fn walk_object(
        &mut self,
        object: &Object,
        location: &LazyLocation<'_>,
        depth: u32,
    ) -> Result<JsonValue, ValidationError> {
        let id = object.id();
        let depth = self.enter(id, location, depth)?;
        ::tracing::trace!(depth, len = object.len(), "Entering object");
        let result = {
            let entries = object.entries();
            let mut output = AHashMap::with_capacity(entries.len());
            let mut failure = None;
            for (key, value) in entries.iter() {
                match self.walk(value, &location.push_key(key), depth) {
                    Ok(value) => {
                        output.insert(key.clone(), value);
                    }
                    Err(error) => {
                        failure = Some(error);
                        break;
                    }
                }
            }
            match failure {
                Some(error) => Err(error),
                None => Ok(JsonValue::Object(Box::new(output))),
            }
        };
        self.visiting.remove(&id);
        result
    }

    /// Register a container on the recursion stack and return the depth of its children.
    fn enter(
        &mut self,
        id: ContainerId,
        location: &LazyLocation<'_>,
        depth: u32,
    ) -> Result<u32, ValidationError> {
        if self.visiting.contains(&id) {
            return Err(ValidationError::cyclic_reference(location.into()));
        }
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(ValidationError::depth_exceeded(
                location.into(),
                self.max_depth,
            ));
        }
        self.visiting.insert(id);
        Ok(depth)
    }

    fn check(&mut self, input: &Dynamic, depth: u32) -> bool {
        match input {
            Dynamic::Null | Dynamic::Bool(_) | Dynamic::String(_) => true,
            Dynamic::Number(value) => value.is_finite(),
            Dynamic::Array(array) => {
                let id = array.id();
                if self.visiting.contains(&id) || depth >= self.max_depth {
                    return false;
                }
                self.visiting.insert(id);
                let valid = array
                    .items()
                    .iter()
                    .all(|item| self.check(item, depth + 1));
                self.visiting.remove(&id);
                valid
            }
            Dynamic::Object(object) => {
                let id = object.id();
                if self.visiting.contains(&id) || depth >= self.max_depth {
                    return false;
                }
                self.visiting.insert(id);
                let valid = object
                    .entries()
                    .iter()
                    .all(|(_, value)| self.check(value, depth + 1));
                self.visiting.remove(&id);
                valid
            }
            Dynamic::Undefined | Dynamic::Function(_) | Dynamic::Symbol(_) => false,
        }
    }
}
