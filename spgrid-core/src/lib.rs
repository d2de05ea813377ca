#![no_std]

//! spgrid-core - Sparse Grid Definitions
//!
//! This crate provides the core traits and types for resizable sparse
//! grid storage

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod key;
pub mod store;

pub use error::*;
pub use key::*;
pub use store::*;

/// Read-only access to sparse grid contents
///
/// This trait provides the minimal interface for inspecting a grid,
/// regardless of storage backend. `cell` exposes only explicitly stored
/// entries; mapping absent cells to a default value is the concern of the
/// implementation's richer API.
pub trait SparseAccess {
    /// The element type stored in this grid
    type Element;

    /// Get the stored entry at the specified position
    ///
    /// Returns `None` if the cell has no stored entry or the position is
    /// out of bounds.
    fn cell(&self, row: usize, col: usize) -> Option<&Self::Element>;

    /// Get grid dimensions as (height, width)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of explicitly stored entries
    fn nnz(&self) -> usize;
}
