//! Reporting: the printed taxonomy literal, run summary and completion lists.

pub mod format;

pub use format::*;
