//! Time-bounded document cache.
//!
//! A single JSON blob `{data, timestamp}` on disk. Stale or unreadable
//! entries are treated as misses and evicted on read; cache failures are
//! never fatal, only logged.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::model::Document;

/// Default freshness window in minutes.
pub const DEFAULT_FRESHNESS_MINUTES: i64 = 30;

#[derive(Serialize, Deserialize)]
struct CacheEntry {
    data: Document,
    timestamp: DateTime<Utc>,
}

/// File-backed cache for the parsed document.
#[derive(Debug, Clone)]
pub struct DocumentCache {
    path: PathBuf,
    freshness: Duration,
}

impl DocumentCache {
    /// Create a cache at the given path with the default freshness window.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            freshness: Duration::minutes(DEFAULT_FRESHNESS_MINUTES),
        }
    }

    /// Create a cache in the OS temp directory.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("promptshelf-cache.json"))
    }

    /// Set the freshness window.
    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }

    /// Read the cached document, if present and fresh.
    pub fn get(&self) -> Option<Document> {
        self.get_at(Utc::now())
    }

    /// Store the document with the current timestamp. Failures are
    /// swallowed: the next load simply refetches.
    pub fn set(&self, document: &Document) {
        self.set_at(document, Utc::now());
    }

    fn get_at(&self, now: DateTime<Utc>) -> Option<Document> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("cache read failed at {}: {}", self.path.display(), err);
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(err) => {
                warn!("corrupt cache entry at {}: {}", self.path.display(), err);
                self.evict();
                return None;
            }
        };

        // Inclusive expiry: an entry exactly at the window boundary is stale.
        if now - entry.timestamp >= self.freshness {
            self.evict();
            return None;
        }

        Some(entry.data)
    }

    fn set_at(&self, document: &Document, now: DateTime<Utc>) {
        let entry = CacheEntry {
            data: document.clone(),
            timestamp: now,
        };
        let encoded = match serde_json::to_string(&entry) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("cache encode failed: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, encoded) {
            warn!("cache write failed at {}: {}", self.path.display(), err);
        }
    }

    fn evict(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("cache evict failed at {}: {}", self.path.display(), err);
            }
        }
    }
}
