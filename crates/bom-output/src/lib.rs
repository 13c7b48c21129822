//! Output generation for sorted BOMs.
//!
//! The sorted BOM is written as one record per line, every field wrapped in
//! double quotes and separated by tabs, with a `\n` line terminator. The whole
//! file is rendered in memory first and then persisted atomically, so a
//! failure never leaves a partially written output behind.

mod error;
mod tsv;
mod write;

pub use error::{OutputError, Result};
pub use tsv::render_sorted_bom;
pub use write::{ensure_parent_dir, write_atomic, write_sorted_bom};
