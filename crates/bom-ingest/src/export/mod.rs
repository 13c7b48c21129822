//! Reading of the BOM CSV export.

mod header;
mod reader;

pub use header::BomHeaders;
pub use reader::{
    MAX_BOM_FILE_SIZE, check_file_size, check_file_size_with_limit, read_bom_table,
    read_bom_table_from_reader, validate_encoding,
};
