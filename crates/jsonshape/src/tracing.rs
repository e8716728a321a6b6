use crate::{dynamic::DynamicType, paths::LazyLocation};

/// Context information passed to tracing callbacks during validation.
///
/// One context is produced per visited node, after the node and all of its children have been
/// evaluated.
#[derive(Debug, Clone)]
pub struct TracingContext<'a, 'c> {
    /// The location of the node in the input
    pub location: &'c LazyLocation<'a>,
    /// The type of the node as found in the input
    pub ty: DynamicType,
    /// The result of evaluating this node
    pub result: NodeEvaluationResult,
}

impl<'a, 'c> TracingContext<'a, 'c> {
    /// Create a new tracing context
    pub fn new(
        location: &'c LazyLocation<'a>,
        ty: DynamicType,
        result: impl Into<NodeEvaluationResult>,
    ) -> Self {
        Self {
            location,
            ty,
            result: result.into(),
        }
    }

    /// Call the tracing callback with this context
    pub fn call(self, callback: TracingCallback<'_>) {
        callback(self);
    }
}

/// Result of evaluating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeEvaluationResult {
    /// The node and all of its children are JSON
    Valid,
    /// The node, or one of its children, is not JSON
    Invalid,
}

impl From<bool> for NodeEvaluationResult {
    fn from(value: bool) -> Self {
        if value {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Type alias for tracing callbacks.
///
/// A tracing callback is called for each node in the input,
/// providing visibility into the validation process.
pub type TracingCallback<'a> = &'a mut dyn FnMut(TracingContext);
