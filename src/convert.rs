//! Pure conversion functions: TOML config structs -> crate API types.

use std::time::Duration;

use worldcal_store::{DocumentStore, RetryPolicy};

use crate::config::StoreToml;

/// Builds a [`DocumentStore`] from the TOML store configuration.
pub fn build_store(store: &StoreToml) -> DocumentStore {
    let retry = RetryPolicy::new(store.max_retries)
        .with_base_delay(Duration::from_millis(store.base_delay_ms));
    DocumentStore::new(&store.path, &store.cache_path).with_retry(retry)
}
