//! The per-date event bucket map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::{Comment, Event};
use crate::key::DateKey;

/// Default number of events previewed per rendered day.
pub const DEFAULT_PREVIEW_COUNT: usize = 2;

/// Default title length (in characters) before preview truncation.
pub const DEFAULT_PREVIEW_CHARS: usize = 20;

/// Mapping from calendar dates to their ordered event buckets.
///
/// The map is the single authoritative copy of calendar content for a
/// session; persistence only mirrors it. Buckets are created lazily on
/// first insertion and removed when their last event is removed, so an
/// empty bucket is never observable. Within a bucket, insertion order is
/// display order.
///
/// Mutations addressed at an index that no longer exists are tolerated
/// as no-ops: callers fetch the bucket just before mutating, but a stale
/// index can still race with a concurrent removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventMap {
    buckets: BTreeMap<DateKey, Vec<Event>>,
}

impl EventMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event` to the bucket for `key`, creating the bucket if
    /// it does not exist yet.
    pub fn add_event(&mut self, key: DateKey, event: Event) {
        self.buckets.entry(key).or_default().push(event);
    }

    /// Removes the event at `index` in the bucket for `key`.
    ///
    /// A bucket emptied by the removal is dropped from the map. Absent
    /// buckets and out-of-range indices are no-ops.
    pub fn remove_event(&mut self, key: DateKey, index: usize) {
        if let Some(bucket) = self.buckets.get_mut(&key) {
            if index < bucket.len() {
                bucket.remove(index);
                if bucket.is_empty() {
                    self.buckets.remove(&key);
                }
            }
        }
    }

    /// Replaces the event at `index` in the bucket for `key`.
    ///
    /// The existing event's comment sequence is preserved when the
    /// replacement carries none; a replacement with comments overwrites
    /// them. Absent buckets and out-of-range indices are no-ops.
    pub fn edit_event(&mut self, key: DateKey, index: usize, event: Event) {
        if let Some(existing) = self.buckets.get_mut(&key).and_then(|b| b.get_mut(index)) {
            *existing = if event.comments().is_empty() {
                event.with_comments(existing.comments().to_vec())
            } else {
                event
            };
        }
    }

    /// Appends a comment to the event at `index` in the bucket for
    /// `key`. A no-op when the event no longer exists.
    pub fn add_comment(&mut self, key: DateKey, index: usize, comment: Comment) {
        if let Some(event) = self.buckets.get_mut(&key).and_then(|b| b.get_mut(index)) {
            event.push_comment(comment);
        }
    }

    /// Returns the events for `key` in display order (empty when none).
    pub fn events_for(&self, key: DateKey) -> &[Event] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns up to `max_count` titles for `key`, each truncated to
    /// `max_chars` characters with `...` appended only when truncated.
    pub fn preview_titles(&self, key: DateKey, max_count: usize, max_chars: usize) -> Vec<String> {
        self.events_for(key)
            .iter()
            .take(max_count)
            .map(|event| truncate_title(event.title(), max_chars))
            .collect()
    }

    /// Number of dates that currently have at least one event.
    pub fn n_dates(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of events across all buckets.
    pub fn n_events(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the map holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates buckets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, &[Event])> + '_ {
        self.buckets.iter().map(|(key, bucket)| (*key, bucket.as_slice()))
    }
}

fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let mut truncated: String = title.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        title.to_string()
    }
}
