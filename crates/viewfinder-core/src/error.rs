//! Error types shared by the geometry operations.

use thiserror::Error;

/// Errors raised by frame and rectangle geometry operations.
///
/// Every failure is local to the call that produced it; nothing here
/// leaves shared state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The buffer length does not equal `width * height`.
    #[error("Buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// A width or height is zero, or their product does not fit in memory.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
