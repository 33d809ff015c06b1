use std::path::PathBuf;

// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read trajectory: {0}")]
    Io(#[from] std::io::Error),

    #[error("trajectory is empty, expected a header line")]
    MissingHeader,

    #[error("line {line}: expected `<name>=<count>`, found {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("line {line}: {value:?} is not a valid count")]
    InvalidCount { line: usize, value: String },

    #[error("line {line}: expected 3 values separated by `;`, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {value:?} is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: block declares {expected} points but the file ends after {found}")]
    Truncated {
        line: usize,
        expected: usize,
        found: usize,
    },
}
