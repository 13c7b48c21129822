//! CSV export reading.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::BomTable;

use super::header::BomHeaders;

/// Maximum file size for BOM loading (64 MB).
pub const MAX_BOM_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_BOM_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        match buffer {
            [0xFF, 0xFE] => {
                return Err(IngestError::UnsupportedEncoding {
                    path: path.to_path_buf(),
                    encoding: "UTF-16 LE",
                });
            }
            [0xFE, 0xFF] => {
                return Err(IngestError::UnsupportedEncoding {
                    path: path.to_path_buf(),
                    encoding: "UTF-16 BE",
                });
            }
            _ => {}
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header)
    Ok(())
}

/// Reads a BOM export into memory.
///
/// The first line is the header; every following line is a data row.
/// Quoted fields, CRLF line endings and a leading UTF-8 BOM are handled.
pub fn read_bom_table(path: &Path) -> Result<BomTable> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    read_bom_table_from_reader(BufReader::new(file), path)
}

/// Reads a BOM export from any reader; `path` is only used for error messages.
pub fn read_bom_table_from_reader<R: Read>(reader: R, path: &Path) -> Result<BomTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_record = reader
        .headers()
        .map_err(|e| parse_error(path, &e))?
        .clone();
    if header_record.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let headers = BomHeaders::from_fields(header_record.iter());
    if headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    let mut padded = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| parse_error(path, &e))?;
        let mut row: Vec<String> = record.iter().map(String::from).collect();
        if row.len() < headers.len() {
            row.resize(headers.len(), String::new());
            padded += 1;
        }
        rows.push(row);
    }

    if padded > 0 {
        warn!(
            path = %path.display(),
            rows = padded,
            "Rows shorter than the header were padded with empty fields"
        );
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "Loaded BOM export"
    );

    Ok(BomTable::new(path, headers, rows))
}

fn open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

fn parse_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        line: error.position().map_or(0, csv::Position::line),
        message: error.to_string(),
    }
}
