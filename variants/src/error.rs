use thiserror::Error;

/// A matcher was invoked on an alternative whose handler was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("Variant{arity} matcher has no handler for alternative V{index}")]
pub struct MissingHandler {
    pub arity: usize,
    /// 1-based, like the `V1..VN` constructors.
    pub index: usize,
}
