//! Time-slot indexing

pub mod slot;

pub use slot::*;
