use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("missing required column '{0}' (expected Task, Deadline, Difficulty, Importance)")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid {column} '{value}': {reason}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("line {line}: task name is blank")]
    BlankName { line: u64 },

    #[error("failed to read task table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
