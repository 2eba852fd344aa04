use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::constants::BLANK_ROW_SEPARATOR_COUNT;
use crate::error::CheckError;

/// A split input line before it is interpreted as a router.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Rows read from a source, plus the error that stopped reading early, if any.
#[derive(Debug, Default)]
pub struct LoadedRows {
    pub rows: Vec<RawRow>,
    pub error: Option<CheckError>,
}

/// Splits a line on `delimiter`, dropping trailing empty fields.
///
/// A line of nothing but delimiters yields no fields; an empty line yields
/// one empty field.
pub fn split_row(line: &str, delimiter: char) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let mut fields: Vec<String> = line.split(delimiter).map(str::to_string).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// True only for the all-empty five-field row shape, e.g. `,,,,`.
///
/// Genuinely empty lines are not blank rows.
pub fn is_blank_row(line: &str, delimiter: char) -> bool {
    line.chars().count() == BLANK_ROW_SEPARATOR_COUNT && line.chars().all(|c| c == delimiter)
}

pub fn read_rows<R: BufRead>(reader: R, delimiter: char) -> Result<Vec<RawRow>, (Vec<RawRow>, std::io::Error)> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Err((rows, e)),
        };

        if is_blank_row(&line, delimiter) {
            debug!("Skipping blank row at line {}", index + 1);
            continue;
        }

        rows.push(RawRow {
            line: index + 1,
            fields: split_row(&line, delimiter),
        });
    }

    Ok(rows)
}

/// Loads every row of the file at `path`.
///
/// Never fails outright: an unopenable file gives no rows, and a read error
/// keeps the rows read before it. The error is handed back alongside the
/// rows.
pub fn load_rows(path: &Path, delimiter: char) -> LoadedRows {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return LoadedRows {
                rows: Vec::new(),
                error: Some(CheckError::IoUnavailable {
                    path: path.to_path_buf(),
                    source: e,
                }),
            };
        }
    };

    match read_rows(BufReader::new(file), delimiter) {
        Ok(rows) => {
            info!("Loaded {} rows from {}", rows.len(), path.display());
            LoadedRows { rows, error: None }
        }
        Err((rows, e)) => {
            debug!("Read {} rows from {} before failing", rows.len(), path.display());
            LoadedRows {
                rows,
                error: Some(CheckError::IoUnavailable {
                    path: path.to_path_buf(),
                    source: e,
                }),
            }
        }
    }
}
