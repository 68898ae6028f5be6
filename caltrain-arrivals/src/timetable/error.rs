//! Timetable extraction error types.
//!
//! Row and column indices are positions in the filtered grid. Columns count
//! trains, so column 0 is the first train column (the third cell).

use crate::domain::{InvalidServiceCode, TimeError};

/// A cell whose text could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Header cell is not a train number
    #[error("invalid train number {text:?} in column {column}")]
    TrainNumber { column: usize, text: String },

    /// Zone cell is not an integer
    #[error("invalid zone {text:?} in row {row}")]
    Zone { row: usize, text: String },

    /// Service-type cell is not a known code
    #[error("column {column}: {source}")]
    ServiceCode {
        column: usize,
        #[source]
        source: InvalidServiceCode,
    },

    /// Arrival cell is neither a time nor the no-stop placeholder
    #[error("row {row}, column {column}: {source}")]
    Time {
        row: usize,
        column: usize,
        #[source]
        source: TimeError,
    },
}

/// The table does not have the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    /// Fewer than two direction tables on the page
    #[error("expected 2 direction tables, found {found}")]
    MissingTables { found: usize },

    /// A direction table lacks the number and service-type rows
    #[error("expected train number and service rows, found {found} rows")]
    MissingHeaderRows { found: usize },

    /// A row's cell count does not match the header
    #[error("row {row} has {found} cells, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The same train number appears twice in one direction
    #[error("train {number} appears more than once")]
    DuplicateTrain { number: u32 },

    /// The table selector could not be compiled
    #[error("invalid selector {0:?}")]
    InvalidSelector(&'static str),
}

/// Errors that abort extraction of the whole timetable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("malformed timetable: {0}")]
    Structure(#[from] StructuralError),
}
