//! # Input Sources
//!
//! Employee rows come from a data file. The [`RosterSource`] trait keeps the
//! file formats apart from the tree logic, which only ever sees `Vec<Employee>`.
//!
//! ## Implementations
//!
//! - [`csv::CsvSource`]: delimited text, header row skipped
//!   - columns: id, name, manager id, title (extra trailing columns ignored)
//! - [`spreadsheet::SpreadsheetSource`]: first worksheet of an xlsx/xls/ods workbook
//!
//! ## Dispatch
//!
//! [`open`] picks the source from the file extension and checks the file exists
//! before any parsing is attempted:
//! ```text
//! .csv                      -> CsvSource
//! .xlsx .xlsm .xls .ods     -> SpreadsheetSource
//! anything else             -> OrgError::UnsupportedFileType
//! ```

use crate::config::OrgChartConfig;
use crate::error::{OrgError, Result};
use crate::model::Employee;
use std::path::Path;

pub mod csv;
pub mod spreadsheet;

/// Minimum number of columns a row needs: id, name, manager id, title.
pub const REQUIRED_COLUMNS: usize = 4;

/// Reads the employee rows out of one input file.
pub trait RosterSource {
    fn read(&self, path: &Path) -> Result<Vec<Employee>>;
}

/// Picks a source for `path` by extension.
pub fn for_path(path: &Path, config: &OrgChartConfig) -> Result<Box<dyn RosterSource>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" => Ok(Box::new(csv::CsvSource::new(config.delimiter_byte()))),
        "xlsx" | "xlsm" | "xls" | "ods" => Ok(Box::new(spreadsheet::SpreadsheetSource)),
        _ => Err(OrgError::UnsupportedFileType(path.to_path_buf())),
    }
}

/// Reads every employee row from `path`.
///
/// Fails if the file is missing, has an unsupported extension, or yields no usable rows.
pub fn open(path: &Path, config: &OrgChartConfig) -> Result<Vec<Employee>> {
    if !path.is_file() {
        return Err(OrgError::InputNotFound(path.to_path_buf()));
    }

    let source = for_path(path, config)?;
    let employees = source.read(path)?;
    if employees.is_empty() {
        return Err(OrgError::EmptyInput(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), rows = employees.len(), "read employees");
    Ok(employees)
}
