use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use lexicon::{Gateway, Quote, Word};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::Storage;

pub const WORD_OF_THE_DAY_KEY: &str = "wordOfTheDay";
pub const QUOTE_KEY: &str = "vocabularyQuote";

/// Word and quote of the day, each kept for `ttl` after it was captured.
pub struct DailyContent {
    storage: Storage,
    ttl: Duration,
}

impl DailyContent {
    pub fn new(storage: Storage, ttl: Duration) -> Self {
        Self { storage, ttl }
    }

    pub async fn word_of_the_day(&self, gateway: &Gateway, now: DateTime<Utc>) -> Word {
        self.cached_or_fetch(WORD_OF_THE_DAY_KEY, now, || gateway.word_of_the_day())
            .await
    }

    pub async fn quote_of_the_day(&self, gateway: &Gateway, now: DateTime<Utc>) -> Quote {
        self.cached_or_fetch(QUOTE_KEY, now, || gateway.quote_of_the_day())
            .await
    }

    /// Drops both entries so the next read goes to the gateway.
    pub async fn invalidate(&self) {
        for key in [WORD_OF_THE_DAY_KEY, QUOTE_KEY] {
            match self.storage.remove_entry(key).await {
                Ok(removed) => tracing::debug!(key, removed, "daily cache entry invalidated"),
                Err(error) => {
                    tracing::error!(key, "failed to invalidate daily cache entry: {error}")
                }
            }
        }
    }

    async fn cached_or_fetch<T, F, Fut>(&self, key: &str, now: DateTime<Utc>, fetch: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some(value) = self.fresh_entry(key, now).await {
            tracing::debug!(key, "daily cache hit");
            return value;
        }
        tracing::debug!(key, "daily cache miss");
        let value = fetch().await;
        match serde_json::to_string(&value) {
            Ok(payload) => {
                if let Err(error) = self.storage.store_entry(key, &payload, now).await {
                    tracing::error!(key, "failed to store daily cache entry: {error}");
                }
            }
            Err(error) => tracing::error!(key, "failed to encode daily cache entry: {error}"),
        }
        value
    }

    async fn fresh_entry<T: DeserializeOwned>(&self, key: &str, now: DateTime<Utc>) -> Option<T> {
        let entry = match self.storage.load_entry(key).await {
            Ok(entry) => entry?,
            Err(error) => {
                tracing::error!(key, "failed to read daily cache entry: {error}");
                return None;
            }
        };
        if now - entry.captured_at >= self.ttl {
            return None;
        }
        serde_json::from_str(&entry.payload)
            .map_err(|error| tracing::warn!(key, "discarding unreadable cache entry: {error}"))
            .ok()
    }
}
