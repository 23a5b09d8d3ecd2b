use super::{RosterSource, REQUIRED_COLUMNS};
use crate::error::Result;
use crate::model::Employee;
use std::io::Read;
use std::path::Path;

/// Delimited text input. The first line is a header and is skipped.
#[derive(Debug, Clone, Copy)]
pub struct CsvSource {
    delimiter: u8,
}

impl CsvSource {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Parses rows from any reader; `read` is this over an open file.
    pub fn parse<R: Read>(&self, reader: R) -> Result<Vec<Employee>> {
        let mut reader = ::csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(::csv::Trim::All)
            .from_reader(reader);

        let mut employees = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;
            // Header is line 1.
            let line = idx + 2;

            if record.len() < REQUIRED_COLUMNS {
                tracing::warn!(
                    line,
                    columns = record.len(),
                    "skipping row with fewer than {} columns",
                    REQUIRED_COLUMNS
                );
                continue;
            }

            let id = &record[0];
            if id.is_empty() {
                tracing::warn!(line, "skipping row with empty id");
                continue;
            }

            employees.push(Employee::new(id, &record[1], &record[2], &record[3]));
        }

        Ok(employees)
    }
}

impl Default for CsvSource {
    fn default() -> Self {
        Self::new(b';')
    }
}

impl RosterSource for CsvSource {
    fn read(&self, path: &Path) -> Result<Vec<Employee>> {
        let file = std::fs::File::open(path)?;
        self.parse(file)
    }
}
