//! Core configuration tree diffing.

pub mod engine;
pub mod result;

pub use engine::{diff, diff_with_filter};
pub use result::{DiffRecord, Side};
