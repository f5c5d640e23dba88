//! Formatting helpers for decoded values.

mod address;

pub use address::format_dotted_quad;
