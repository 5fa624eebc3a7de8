// Centralized error handling module
// Provides error types with context for the digest and compare operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the checker
/// Provides context-rich error messages with file paths and operations
#[derive(Debug)]
pub enum CheckHashError {
    /// The files and hash-values sequences differ in length
    LengthMismatch { files_count: usize, hashes_count: usize },

    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Algorithm selector outside the supported set
    UnsupportedAlgorithm { algorithm: String },
}

impl fmt::Display for CheckHashError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckHashError::LengthMismatch { files_count, hashes_count } => {
                write!(
                    f,
                    "Number of files ({}) does not match number of hash values ({})\n",
                    files_count, hashes_count
                )?;
                write!(f, "Suggestion: Supply exactly one hash value per file, in the same order")
            }
            CheckHashError::FileNotFound { path } => {
                write!(f, "File not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            CheckHashError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} file: {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            CheckHashError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} file {}: {}", operation, p.display(), source)
                } else {
                    write!(f, "I/O error while {}: {}", operation, source)
                }
            }
            CheckHashError::UnsupportedAlgorithm { algorithm } => {
                write!(f, "Unsupported hash algorithm: {}\n", algorithm)?;
                write!(f, "Suggestion: Use one of md5, sha1, sha224, sha256, sha384, sha512")
            }
        }
    }
}

impl std::error::Error for CheckHashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckHashError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CheckHashError {
    /// Create an error from an io::Error with context about the operation
    /// and the path involved, mapping common kinds to specific variants
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(p)) => CheckHashError::FileNotFound { path: p },
            (io::ErrorKind::PermissionDenied, Some(p)) => CheckHashError::PermissionDenied {
                path: p,
                operation: operation.to_string(),
            },
            (_, path) => CheckHashError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}
