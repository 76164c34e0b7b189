//! Explicit memoization for pure pipeline results.
//!
//! The transformations are pure, so callers may cache results keyed by a
//! digest of (input snapshot, parameters). The cache is an owned value with
//! caller-controlled invalidation; there is no process-wide implicit cache.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

use log::debug;
use serde::Serialize;

/// Memoized results keyed by snapshot digest.
#[derive(Debug, Default)]
pub struct SnapshotCache<T> {
    entries: HashMap<String, T>,
}

/// Hex SHA-256 digest of a serializable snapshot plus free-form parameters.
///
/// Serialization order is stable for the types we cache on (structs and
/// ordered maps), so equal snapshots always digest equally.
pub fn snapshot_key<I: Serialize>(inputs: &I, params: &str) -> Result<String> {
    let serialized = serde_json::to_vec(inputs).context("Failed to serialize snapshot for cache key")?;

    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    hasher.update(params.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

impl<T> SnapshotCache<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: String, value: T) {
        self.entries.insert(key, value);
    }

    /// Cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, key: &str, compute: F) -> &T {
        self.entries.entry(key.to_string()).or_insert_with(|| {
            debug!("snapshot cache miss for {key}");
            compute()
        })
    }

    /// Drop one cached result.
    pub fn invalidate(&mut self, key: &str) -> Option<T> {
        self.entries.remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Snapshot {
        records: Vec<String>,
    }

    fn snapshot(records: &[&str]) -> Snapshot {
        Snapshot {
            records: records.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn equal_snapshots_share_a_key() {
        let a = snapshot_key(&snapshot(&["x", "y"]), "2022-01..2022-06").unwrap();
        let b = snapshot_key(&snapshot(&["x", "y"]), "2022-01..2022-06").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_inputs_or_params_change_the_key() {
        let base = snapshot_key(&snapshot(&["x"]), "p1").unwrap();
        assert_ne!(base, snapshot_key(&snapshot(&["y"]), "p1").unwrap());
        assert_ne!(base, snapshot_key(&snapshot(&["x"]), "p2").unwrap());
    }

    #[test]
    fn get_or_insert_computes_once() {
        let mut cache: SnapshotCache<u32> = SnapshotCache::new();
        let mut calls = 0;

        let key = snapshot_key(&snapshot(&["x"]), "").unwrap();
        for _ in 0..3 {
            cache.get_or_insert_with(&key, || {
                calls += 1;
                42
            });
        }

        assert_eq!(calls, 1);
        assert_eq!(cache.get(&key), Some(&42));
    }

    #[test]
    fn invalidation_forces_recompute() {
        let mut cache: SnapshotCache<u32> = SnapshotCache::new();
        let key = snapshot_key(&snapshot(&["x"]), "").unwrap();

        cache.insert(key.clone(), 1);
        assert_eq!(cache.invalidate(&key), Some(1));
        assert!(cache.get(&key).is_none());

        let value = *cache.get_or_insert_with(&key, || 2);
        assert_eq!(value, 2);
    }
}
