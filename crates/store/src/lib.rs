//! # worldcal-store
//!
//! Best-effort JSON persistence for the world calendar.
//!
//! The store mirrors the hosted document database the product runs
//! against: one JSON document holding the per-date event buckets, loaded
//! in full and saved in full. Saves retry with exponential backoff and
//! fall back to a local cache file, so a flaky primary never loses user
//! edits; the in-memory [`worldcal_events::EventMap`] remains the
//! authoritative copy for the session either way.
//!
//! ## Quick Start
//!
//! ```ignore
//! use worldcal_store::{CalendarDocument, DocumentStore, SaveOutcome};
//!
//! let store = DocumentStore::new("worldcal-data.json", "worldcal-cache.json");
//! let mut doc = store.load()?;
//! // ... mutate doc.events ...
//! match store.save(&doc)? {
//!     SaveOutcome::Persisted => {}
//!     SaveOutcome::LocalOnly => eprintln!("saved to local cache only"),
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `store` | Document load/save orchestration |
//! | `retry` | Backoff schedule for saves |
//! | `error` | Error types |

mod error;
mod retry;
mod store;

pub use error::StoreError;
pub use retry::RetryPolicy;
pub use store::{CalendarDocument, DocumentStore, SaveOutcome};
