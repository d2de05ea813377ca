//! spgrid - Resizable Sparse Matrix
//!
//! This library provides a generic two-dimensional matrix whose storage is a
//! sparse map: only cells that have ever been written occupy memory, and
//! every other in-bounds cell reads as a configurable default value.
//!
//! ## Architecture
//!
//! spgrid follows a specification/implementation separation:
//!
//! - **spgrid-core**: pure traits, cell keys, and the error taxonomy (no I/O)
//! - **spgrid**: the matrix engine and concrete store backends
//!
//! ## Quick Start
//!
//! ```rust
//! use spgrid::SparseMatrix;
//!
//! fn example() -> spgrid::Result<()> {
//!     let mut grid = SparseMatrix::with_default(3, 3, 0i32);
//!     grid.set(1, 1, 7)?;
//!     assert_eq!(*grid.get(1, 1)?, 7);
//!     assert_eq!(*grid.get(0, 2)?, 0);
//!
//!     // Structural resize shifts stored cells, never drops them
//!     grid.insert_row(0)?;
//!     assert_eq!(*grid.get(2, 1)?, 7);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Storage backends
//!
//! The matrix is generic over any [`KeyedStore`] implementation. Two
//! backends ship with the crate: [`HashStore`] (hash map, the default) and
//! [`VecStore`] (linear-scan association list). The matrix never depends on
//! a backend's enumeration order.

// Re-export core abstractions
pub use spgrid_core::{
    // Core traits
    KeyedStore, SparseAccess,
    // Cell identity
    CellKey,
    // Error handling
    GridError, Result, StoreError,
};

// Implementation modules
pub mod matrix;
pub mod store;

// Public exports
pub use matrix::SparseMatrix;
pub use store::{HashStore, VecStore};
