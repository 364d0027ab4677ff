use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Failures of the DOCX export path.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Please enter a file name before saving!")]
    MissingName,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("DOCX error: {0}")]
    Docx(String),
}

/// Failures of editing actions that need a selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("no text selected")]
    NoSelection,

    #[error("selection {start}..{end} splits a character")]
    SplitCharacter { start: usize, end: usize },
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
