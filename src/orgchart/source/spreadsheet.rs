use super::{RosterSource, REQUIRED_COLUMNS};
use crate::error::{OrgError, Result};
use crate::model::Employee;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Workbook input: first worksheet, header in row 1, columns A-D.
///
/// Cells are addressed by absolute sheet position. calamine trims leading
/// empty rows and columns off a worksheet range, so row 1 and column A are
/// not necessarily where the range starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetSource;

impl SpreadsheetSource {
    /// Turns a worksheet range into employees, skipping sheet row 1.
    pub fn parse_range(&self, range: &Range<Data>) -> Vec<Employee> {
        let (Some((first_row, _)), Some((last_row, _))) = (range.start(), range.end()) else {
            return Vec::new();
        };

        let mut employees = Vec::new();
        for row in first_row.max(1)..=last_row {
            let line = row as usize + 1;
            let cells: Vec<Option<&Data>> = (0..REQUIRED_COLUMNS as u32)
                .map(|col| range.get_value((row, col)))
                .collect();

            if let Some(err) = cells.iter().find_map(|cell| match cell {
                Some(Data::Error(e)) => Some(e),
                _ => None,
            }) {
                tracing::warn!(line, error = %err, "skipping row with unreadable cell");
                continue;
            }

            let text = |col: usize| cells[col].map(cell_text).unwrap_or_default();
            let id = text(0);
            if id.is_empty() {
                tracing::warn!(line, "skipping row with empty id");
                continue;
            }

            employees.push(Employee::new(id, text(1), text(2), text(3)));
        }
        employees
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

impl RosterSource for SpreadsheetSource {
    fn read(&self, path: &Path) -> Result<Vec<Employee>> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| OrgError::EmptyInput(path.to_path_buf()))??;

        Ok(self.parse_range(&range))
    }
}
