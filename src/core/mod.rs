//! Core data types and models

pub mod interval;
pub mod record;

pub use interval::*;
pub use record::*;
