//! Library components for the `bom-sort` CLI.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod types;
