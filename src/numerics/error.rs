// src/numerics/error.rs

/// Errors from the non-arithmetic parts of the numerics module.
///
/// Arithmetic never reports errors: degenerate input produces NaN or
/// infinite components instead.
#[derive(Debug, thiserror::Error)]
pub enum NumericsError {
    #[error("Slice length mismatch: expected {expected} components, got {actual}")]
    SliceLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, NumericsError>;
