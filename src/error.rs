use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Cannot open input file '{}': {source}", .path.display())]
    MissingInputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input has no header line")]
    MissingHeader,

    #[error("Malformed row {row}: invalid {field} value '{value}'")]
    MalformedRow {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Projection failed: {0}")]
    ProjectionFailure(String),

    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<ProcessingError>,
    },
}

impl ProcessingError {
    /// Attach a data row index to an error raised while transforming that row
    pub fn at_row(self, row: usize) -> Self {
        match self {
            // Already carries its own row context
            err @ (Self::MalformedRow { .. } | Self::Row { .. }) => err,
            err => Self::Row {
                row,
                source: Box::new(err),
            },
        }
    }

    /// The row index this error refers to, if any
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { row, .. } | Self::Row { row, .. } => Some(*row),
            _ => None,
        }
    }
}
