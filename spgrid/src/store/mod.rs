//! Concrete keyed store backends
//!
//! Two implementations of the [`KeyedStore`](spgrid_core::KeyedStore)
//! capability: a hash map backend for general use and a linear-scan
//! association list for small grids.

pub mod hash_store;
pub mod vec_store;

pub use hash_store::HashStore;
pub use vec_store::VecStore;
