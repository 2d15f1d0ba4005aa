//! Path decomposition and taxonomy accumulation.
//!
//! - `decompose`: one dotted path -> ordered observations
//! - `accumulator`: observations -> key/successor-set map

pub mod accumulator;
pub mod decompose;

pub use accumulator::*;
pub use decompose::*;
