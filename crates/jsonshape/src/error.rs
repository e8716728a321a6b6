use std::{error, fmt};

use crate::{dynamic::DynamicType, paths::Location};

/// The first reason why an input is not a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    repr: Box<ErrorRepr>,
}

#[derive(Debug, Clone, PartialEq)]
struct ErrorRepr {
    kind: ValidationErrorKind,
    /// Path from the root of the input to the offending node.
    path: Location,
}

/// Kinds of validation failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationErrorKind {
    /// The node is neither a JSON scalar nor a JSON container.
    UnsupportedType { ty: DynamicType },
    /// The container is already being visited higher up in the input.
    CyclicReference,
    /// Containers are nested deeper than the configured limit.
    DepthExceeded { limit: u32 },
    /// The number is NaN or infinite.
    NonFiniteNumber { value: f64 },
}

impl ValidationError {
    pub(crate) fn unsupported_type(path: Location, ty: DynamicType) -> Self {
        Self::new(ValidationErrorKind::UnsupportedType { ty }, path)
    }
    pub(crate) fn cyclic_reference(path: Location) -> Self {
        Self::new(ValidationErrorKind::CyclicReference, path)
    }
    pub(crate) fn depth_exceeded(path: Location, limit: u32) -> Self {
        Self::new(ValidationErrorKind::DepthExceeded { limit }, path)
    }
    pub(crate) fn non_finite_number(path: Location, value: f64) -> Self {
        Self::new(ValidationErrorKind::NonFiniteNumber { value }, path)
    }

    fn new(kind: ValidationErrorKind, path: Location) -> Self {
        Self {
            repr: Box::new(ErrorRepr { kind, path }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.repr.kind
    }

    /// Where the offending node was found.
    #[must_use]
    pub fn path(&self) -> &Location {
        &self.repr.path
    }

    /// Split the error into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ValidationErrorKind, Location) {
        let repr = *self.repr;
        (repr.kind, repr.path)
    }
}

impl error::Error for ValidationError {}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr.kind {
            ValidationErrorKind::UnsupportedType { ty } => {
                write!(f, "{ty} is not a JSON value")?;
            }
            ValidationErrorKind::CyclicReference => {
                f.write_str("container references itself")?;
            }
            ValidationErrorKind::DepthExceeded { limit } => {
                write!(f, "nesting depth exceeds the limit of {limit}")?;
            }
            ValidationErrorKind::NonFiniteNumber { value } => {
                write!(f, "{value} is not a finite number")?;
            }
        }
        if !self.repr.path.is_root() {
            write!(f, " at {}", self.repr.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::{dynamic::DynamicType, paths::Location};
    use test_case::test_case;

    #[test_case(
        ValidationError::non_finite_number(Location::new().join("a"), f64::NAN),
        "NaN is not a finite number at .a";
        "nan"
    )]
    #[test_case(
        ValidationError::non_finite_number(Location::new(), f64::NEG_INFINITY),
        "-inf is not a finite number";
        "negative infinity at root"
    )]
    #[test_case(
        ValidationError::unsupported_type(Location::new().join(2_usize).join(0_usize), DynamicType::Function),
        "function is not a JSON value at [2][0]";
        "function"
    )]
    #[test_case(
        ValidationError::cyclic_reference(Location::new().join("self")),
        "container references itself at .self";
        "cycle"
    )]
    #[test_case(
        ValidationError::depth_exceeded(Location::new().join(0_usize), 1),
        "nesting depth exceeds the limit of 1 at [0]";
        "depth"
    )]
    fn display(error: ValidationError, expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn into_parts() {
        let error = ValidationError::cyclic_reference(Location::new().join("x"));
        let (kind, path) = error.clone().into_parts();
        assert_eq!(&kind, error.kind());
        assert_eq!(&path, error.path());
    }
}
