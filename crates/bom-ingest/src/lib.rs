//! BOM ingestion utilities.
//!
//! This crate loads the comma-separated BOM export of a PCB design tool into
//! an in-memory [`BomTable`]: one header row naming the columns followed by
//! the data rows, all held as strings.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use bom_ingest::read_bom_table;
//!
//! let table = read_bom_table(Path::new("board.csv"))?;
//! let name = table.require_column("Name")?;
//! let value = table.require_column("Value")?;
//! ```

mod error;
mod export;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Export Reading ===
pub use export::{
    BomHeaders, MAX_BOM_FILE_SIZE, check_file_size, check_file_size_with_limit, read_bom_table,
    read_bom_table_from_reader, validate_encoding,
};

// === Table ===
pub use table::BomTable;
