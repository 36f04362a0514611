//! # worldcal-events
//!
//! Typed per-date event buckets for the world calendar.
//!
//! Each calendar date owns an ordered bucket of events; each event
//! carries a title, an author, a description, and an ordered comment
//! thread. The [`EventMap`] is the single source of truth for calendar
//! content in a session; persistence mirrors it through the string form
//! of [`DateKey`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use worldcal_events::{DateKey, Event, EventMap};
//!
//! let mut map = EventMap::new();
//! let key = DateKey::new(0, 1, 1);
//! map.add_event(key, Event::new("Trade hall opening", "alex", "Bring emeralds"));
//!
//! let previews = map.preview_titles(key, 2, 20);
//! assert_eq!(previews, ["Trade hall opening"]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `key` | Typed date keys and their string form |
//! | `event` | Event and comment records |
//! | `map` | The bucket map and preview derivation |
//! | `error` | Error types |

mod error;
mod event;
mod key;
mod map;

pub use error::EventError;
pub use event::{Comment, Event};
pub use key::DateKey;
pub use map::{EventMap, DEFAULT_PREVIEW_CHARS, DEFAULT_PREVIEW_COUNT};
