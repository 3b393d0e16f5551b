//! Whole-file document access
//!
//! Every input is read completely into memory and the release notes are
//! written back in a single call, so a failed run never leaves a
//! half-written file behind.

use crate::error::IoError;
use std::fs;
use std::path::Path;

/// Read a required input document
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::not_found(path));
    }

    fs::read_to_string(path).map_err(|e| IoError::read(path, e))
}

/// Replace the content of a document
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(|e| IoError::write(path, e))
}
