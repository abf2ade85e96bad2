// jsqueeze/src/ui/mod.rs
//! Terminal output helpers. Everything here writes to a caller-supplied
//! writer so it can be tested against a buffer.

pub mod output_format;
pub mod size_summary;
pub mod theme;
