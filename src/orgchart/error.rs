use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrgError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Unsupported file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    #[error("No employee rows found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("{0} appears more than once")]
    DuplicateId(String),

    #[error("Cycle detected in reporting lines: {}", .0.join(" -> "))]
    CycleDetected(Vec<String>),

    #[error("Expected exactly one occurrence of {target}, but found {found}")]
    RootLookup { target: String, found: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Renderer unavailable: {0}")]
    RendererUnavailable(String),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, OrgError>;
