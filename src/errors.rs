//! Error types with rich diagnostics using miette
//!
//! Every failure is fatal to a build: there is no recoverable path and no
//! fallback content.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised when a frame is constructed from bad numbers
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid shape size {width} x {height}: {source}")]
    #[diagnostic(
        code(slidecraft::geometry::invalid_size),
        help("shape width and height must be finite and greater than zero")
    )]
    InvalidSize {
        width: f64,
        height: f64,
        source: NumericError,
    },

    #[error("shape coordinate `{what}` is not finite: {source}")]
    #[diagnostic(code(slidecraft::geometry::non_finite))]
    NonFinite {
        what: &'static str,
        source: NumericError,
    },
}

// ============================================================================
// Table Errors
// ============================================================================

/// Errors raised when a table grid is ill-defined
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("table has no columns")]
    #[diagnostic(
        code(slidecraft::table::no_columns),
        help("pass at least one header")
    )]
    NoColumns,

    #[error("table has no rows")]
    #[diagnostic(code(slidecraft::table::no_rows))]
    NoRows,

    #[error("row {row} has {cells} cells but the table has {columns} columns")]
    #[diagnostic(code(slidecraft::table::row_too_wide))]
    RowTooWide {
        row: usize,
        cells: usize,
        columns: usize,
    },

    #[error("row {row} has {cells} cells but the table has {columns} columns")]
    #[diagnostic(
        code(slidecraft::table::row_too_short),
        help("grids must be rectangular; pad short rows with blank cells")
    )]
    RowTooShort {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

// ============================================================================
// Write Errors
// ============================================================================

/// Errors that occur while serializing or saving a presentation
#[derive(Error, Diagnostic, Debug)]
pub enum WriteError {
    #[error("cannot write presentation to {}", path.display())]
    #[diagnostic(code(slidecraft::write::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot replace {} with the finished presentation", path.display())]
    #[diagnostic(code(slidecraft::write::persist))]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("zip packaging failed")]
    #[diagnostic(code(slidecraft::write::zip))]
    Zip(#[from] zip::result::ZipError),

    #[error("xml generation failed")]
    #[diagnostic(code(slidecraft::write::xml))]
    Xml(#[from] std::fmt::Error),

    #[error("i/o error while packaging")]
    #[diagnostic(code(slidecraft::write::stream))]
    Stream(#[from] std::io::Error),
}

// ============================================================================
// Umbrella
// ============================================================================

/// Any error a deck build can produce
#[derive(Error, Diagnostic, Debug)]
pub enum DeckError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Write(#[from] WriteError),
}
