use super::{Output, Renderer};
use crate::commands::orgsize;
use crate::error::{OrgError, Result};
use crate::model::OrgTree;

pub const HEADER: [&str; 4] = ["manager", "title", "total org size", "number of directs"];

/// Semicolon-separated org-size report. Fields holding `;` or `"` are quoted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgSizeRenderer;

impl OrgSizeRenderer {
    pub fn to_text(&self, tree: &OrgTree) -> Result<String> {
        let mut writer = ::csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(Vec::new());

        writer.write_record(HEADER)?;
        for row in orgsize::run(tree) {
            writer.write_record([
                row.name.as_str(),
                row.title.as_str(),
                &row.total.to_string(),
                &row.directs.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| OrgError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| OrgError::Render(e.to_string()))
    }
}

impl Renderer for OrgSizeRenderer {
    fn render(&self, tree: &OrgTree) -> Result<Output> {
        Ok(Output::Stdout(self.to_text(tree)?))
    }
}
