//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: Malformed markdown tables, cells or scope tokens
//! - StructureError: Unterminated blocks in the POM or the release notes
//! - MergeError: Conflicting updates within a single PR
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Markdown or scope parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Structural errors in the POM or the release notes
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// Errors while merging old and new updates
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while parsing markdown tables and their cells
#[derive(Error, Debug)]
pub enum ParseError {
    /// A table row did not split into exactly three columns
    #[error("table row has unexpected format: expected 3 columns (5 '|'-separated segments) but found {found} segments in '{row}'")]
    MalformedRow { row: String, found: usize },

    /// A release notes dependency cell deviates from the rendered format
    #[error("release notes cell '{cell}' is malformed: {reason}")]
    MalformedDependencyCell { cell: String, reason: String },

    /// A `<scope>` value that is not a Maven scope
    #[error("unknown dependency scope: '{value}'")]
    UnknownScope { value: String },
}

/// Errors raised when a document is structurally broken
#[derive(Error, Debug)]
pub enum StructureError {
    /// A block was opened but its closing marker never appeared
    #[error("unable to find '{marker}' in {document}")]
    Unterminated { marker: String, document: String },

    /// A matching dependency declaration has no artifact id
    #[error("dependency declaration for group '{group_id}' has no <artifactId>")]
    MissingArtifactId { group_id: String },
}

/// Errors raised while merging dependency updates
#[derive(Error, Debug)]
pub enum MergeError {
    /// The same coordinate was bumped more than once in a single PR
    #[error("dependency received multiple updates within the same PR: '{coordinate}'")]
    DuplicateUpdate { coordinate: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Required input file is missing
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read a file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    /// Creates a new MalformedRow error
    pub fn malformed_row(row: impl Into<String>, found: usize) -> Self {
        ParseError::MalformedRow {
            row: row.into(),
            found,
        }
    }

    /// Creates a new MalformedDependencyCell error
    pub fn malformed_cell(cell: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::MalformedDependencyCell {
            cell: cell.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new UnknownScope error
    pub fn unknown_scope(value: impl Into<String>) -> Self {
        ParseError::UnknownScope {
            value: value.into(),
        }
    }
}

impl StructureError {
    /// Creates a new Unterminated error
    pub fn unterminated(marker: impl Into<String>, document: impl Into<String>) -> Self {
        StructureError::Unterminated {
            marker: marker.into(),
            document: document.into(),
        }
    }
}

impl IoError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        IoError::NotFound { path: path.into() }
    }

    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            source,
        }
    }
}
