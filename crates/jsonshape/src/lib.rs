//! # jsonshape
//!
//! Decide whether a dynamically-shaped value belongs to the recursive JSON grammar:
//!
//! ```text
//! Json = null | boolean | string | number | Json[] | { [key: string]: Json }
//! ```
//!
//! Inputs are [`Dynamic`] values, which may also hold `undefined`, functions, symbols,
//! non-finite numbers, and containers that reference themselves. A successful validation
//! produces an owned, immutable [`JsonValue`]; a failed one reports the first offending node
//! together with its path.
//!
//! ```rust
//! use jsonshape::{Dynamic, ValidationErrorKind};
//!
//! let input: Dynamic = [("a", Dynamic::from(f64::NAN))].into_iter().collect();
//! let error = jsonshape::validate(&input).expect_err("NaN is not JSON");
//! assert!(matches!(error.kind(), ValidationErrorKind::NonFiniteNumber { .. }));
//! assert_eq!(error.path().to_string(), ".a");
//! ```
//!
//! Values parsed by `serde_json` convert into [`Dynamic`] directly:
//!
//! ```rust
//! let input = serde_json::json!({"a": [1, 2, {"b": null}]});
//! let value = jsonshape::validate(&input.clone().into()).expect("Valid JSON");
//! assert_eq!(value, input);
//! ```
mod dynamic;
mod error;
mod impls;
mod options;
mod paths;
pub mod tracing;
mod validator;
mod value;

pub use dynamic::{Array, Dynamic, DynamicType, Function, Object, Symbol};
pub use error::{ValidationError, ValidationErrorKind};
pub use options::{ValidationOptions, DEFAULT_MAX_DEPTH};
pub use paths::{LazyLocation, Location, Segment};
pub use validator::Validator;
pub use value::{JsonType, JsonValue, Number};

/// Create options for building a [`Validator`].
#[must_use]
pub fn options() -> ValidationOptions {
    ValidationOptions::default()
}

/// Validate `input` with the default options.
///
/// # Errors
///
/// Returns the first node of `input` that is not JSON.
pub fn validate(input: &Dynamic) -> Result<JsonValue, ValidationError> {
    Validator::default().validate(input)
}

/// Check `input` with the default options without building a value.
#[must_use]
pub fn is_valid(input: &Dynamic) -> bool {
    Validator::default().is_valid(input)
}
