//! Error types for the worldcal-store crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the worldcal-store crate.
///
/// This enum covers I/O failures on document files and malformed
/// document bodies. Transient save failures are not errors at this
/// level: they are retried and then absorbed by the cache fallback, and
/// only surface here when the fallback itself fails.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Returned when reading a document file fails for a reason other
    /// than the file being absent.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path of the document that could not be read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a document file cannot be written.
    #[error("failed to write {}: {reason}", path.display())]
    Write {
        /// Path of the document that could not be written.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when a document file exists but does not hold a valid
    /// calendar document.
    #[error("malformed document {}: {reason}", path.display())]
    Malformed {
        /// Path of the offending document.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },
}
