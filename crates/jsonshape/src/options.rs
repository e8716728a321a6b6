use crate::validator::Validator;

/// Containers nested deeper than this are rejected unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: u32 = 1000;

/// Configuration for building a [`Validator`].
///
/// ```rust
/// let validator = jsonshape::options().with_max_depth(16).build();
/// assert_eq!(validator.max_depth(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    max_depth: u32,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ValidationOptions {
    /// Limit how deeply arrays and objects may be nested.
    ///
    /// A top-level container has depth 1. Scalars do not add to the depth, so with a limit of
    /// `0` only scalars are accepted. Validation recurses once per level, so very large limits
    /// can exhaust the stack.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Build a validator with these options.
    #[must_use]
    pub fn build(self) -> Validator {
        Validator::new(self)
    }
}
