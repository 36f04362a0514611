//! JSON document store with a local cache fallback.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use worldcal_events::EventMap;

use crate::error::StoreError;
use crate::retry::RetryPolicy;

/// The persisted calendar document.
///
/// Mirrors the hosted collection layout of one document per logical
/// collection; this core owns only `events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDocument {
    /// Per-date event buckets, keyed by `"year-month-day"` strings on disk.
    #[serde(default)]
    pub events: EventMap,
}

/// Where a save ultimately landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The primary document was written (and the cache refreshed).
    Persisted,
    /// Every attempt on the primary document failed; only the local
    /// cache holds the data.
    LocalOnly,
}

/// Document store over a primary path and a local cache path.
///
/// Loads prefer the primary document, fall back to the cache, and
/// finally to an empty document, so a fresh installation needs no
/// setup. Saves are best-effort: the primary write is retried per the
/// [`RetryPolicy`], and on exhaustion the document is written to the
/// cache only. The caller's in-memory map stays authoritative for the
/// session regardless of the save outcome.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    path: PathBuf,
    cache_path: PathBuf,
    retry: RetryPolicy,
}

impl DocumentStore {
    /// Creates a store with the default retry policy.
    pub fn new(path: impl Into<PathBuf>, cache_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache_path: cache_path.into(),
            retry: RetryPolicy::default(),
        }
    }

    /// Sets the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Returns the primary document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the local cache path.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Loads the calendar document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Malformed`] when a document file exists but
    /// does not parse, and [`StoreError::Read`] for I/O failures other
    /// than absence.
    pub fn load(&self) -> Result<CalendarDocument, StoreError> {
        if let Some(doc) = read_document(&self.path)? {
            return Ok(doc);
        }
        if let Some(doc) = read_document(&self.cache_path)? {
            info!(
                cache = %self.cache_path.display(),
                "primary document missing, loaded local cache"
            );
            return Ok(doc);
        }
        debug!("no document found, starting empty");
        Ok(CalendarDocument::default())
    }

    /// Saves the calendar document, best-effort.
    ///
    /// The primary write is retried per the retry policy with backoff
    /// between attempts. When every attempt fails, the document is
    /// written to the local cache instead and the save reports
    /// [`SaveOutcome::LocalOnly`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] only when the cache fallback fails
    /// as well.
    pub fn save(&self, doc: &CalendarDocument) -> Result<SaveOutcome, StoreError> {
        let body = serde_json::to_string_pretty(doc).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let mut attempt = 0;
        loop {
            match write_file(&self.path, &body) {
                Ok(()) => {
                    // Keep the cache current so a later primary outage
                    // still reads the newest data. Failure here only
                    // costs the fallback copy.
                    if let Err(e) = write_file(&self.cache_path, &body) {
                        debug!(error = %e, "cache refresh failed");
                    }
                    return Ok(SaveOutcome::Persisted);
                }
                Err(e) if attempt < self.retry.max_retries() => {
                    let delay = self.retry.delay_for(attempt);
                    attempt += 1;
                    warn!(
                        attempt,
                        max = self.retry.max_retries(),
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "save failed, retrying"
                    );
                    thread::sleep(delay);
                }
                Err(e) => {
                    warn!(error = %e, "save failed after all retries, keeping changes in local cache");
                    write_file(&self.cache_path, &body)?;
                    return Ok(SaveOutcome::LocalOnly);
                }
            }
        }
    }
}

fn read_document(path: &Path) -> Result<Option<CalendarDocument>, StoreError> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        // A path under a non-directory is as absent as a missing file.
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            return Ok(None);
        }
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };
    let doc = serde_json::from_str(&body).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(Some(doc))
}

fn write_file(path: &Path, body: &str) -> Result<(), StoreError> {
    let write_err = |e: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, body).map_err(write_err)
}
