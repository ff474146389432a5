// ABOUTME: Single-slot cache for the catalog statistics snapshot
// ABOUTME: Shared across requests; cleared by invalidate() or an optional TTL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use crate::constants::cache::STATISTICS_CACHE_NAME;
use crate::models::StatisticsSnapshot;

#[derive(Debug, Clone)]
struct CacheEntry {
    snapshot: StatisticsSnapshot,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn new(snapshot: StatisticsSnapshot, ttl: Option<Duration>) -> Self {
        Self {
            snapshot,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at
            .is_some_and(|expires_at| Instant::now() >= expires_at)
    }
}

/// Holds at most one statistics snapshot
///
/// Clones share the same slot. Concurrent misses may both compute and store;
/// the last store wins.
#[derive(Debug, Clone, Default)]
pub struct StatisticsCache {
    slot: Arc<RwLock<Option<CacheEntry>>>,
    ttl: Option<Duration>,
}

impl StatisticsCache {
    /// Cache whose entry lives until invalidated
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose entry also expires after `ttl`; `None` or zero never expires
    #[must_use]
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            slot: Arc::default(),
            ttl: ttl.filter(|ttl| !ttl.is_zero()),
        }
    }

    /// Configured lifetime of an entry
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Cached snapshot, if present and not expired
    pub async fn get(&self) -> Option<StatisticsSnapshot> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if !entry.is_expired() => {
                debug!(cache = STATISTICS_CACHE_NAME, "Cache hit");
                Some(entry.snapshot.clone())
            }
            Some(_) => {
                debug!(cache = STATISTICS_CACHE_NAME, "Cache entry expired");
                None
            }
            None => {
                debug!(cache = STATISTICS_CACHE_NAME, "Cache miss");
                None
            }
        }
    }

    /// Replace the cached snapshot
    pub async fn store(&self, snapshot: StatisticsSnapshot) {
        *self.slot.write().await = Some(CacheEntry::new(snapshot, self.ttl));
    }

    /// Drop the cached snapshot so the next read recomputes it
    pub async fn invalidate(&self) {
        let previous = self.slot.write().await.take();
        debug!(
            cache = STATISTICS_CACHE_NAME,
            had_entry = previous.is_some(),
            "Cache invalidated"
        );
    }
}
