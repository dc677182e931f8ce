//! Reading raw contact records

pub mod parser;
pub mod reader;

pub use parser::*;
pub use reader::*;
