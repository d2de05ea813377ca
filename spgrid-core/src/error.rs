//! Error types for sparse grid operations

/// Errors that can occur during grid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Row or column index outside the grid bounds
    OutOfBounds,
    /// Supplied values do not match the crossing dimension
    SizeMismatch,
    /// Line fill requested with zero stride on both axes
    ZeroStride,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            GridError::OutOfBounds => "Index out of bounds",
            GridError::SizeMismatch => "Values length does not match dimension",
            GridError::ZeroStride => "Line fill stride is zero on both axes",
        };
        write!(f, "{msg}")
    }
}

/// Result type for grid operations
pub type Result<T> = core::result::Result<T, GridError>;

/// Failures a keyed store may report on write
///
/// Bounds checking in the grid guarantees key validity before any store
/// write, so these only arise from a misbehaving backend. The grid treats
/// them as non-fatal and leaves the affected cell unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StoreError {
    /// The key is structurally disallowed by the backend
    InvalidKey,
    /// The backend refused the write
    Rejected,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            StoreError::InvalidKey => "Key rejected by store",
            StoreError::Rejected => "Write rejected by store",
        };
        write!(f, "{msg}")
    }
}
