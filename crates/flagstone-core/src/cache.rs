//! TTL cache for resolved flag values
//!
//! The cache is the only shared mutable state of the engine. It is
//! injectable so tests get isolated instances and production can swap the
//! unbounded reference store for a bounded one without touching resolution
//! logic.

use lru::LruCache;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt::Debug;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use crate::prelude::*;

/// Default capacity for the bounded cache variant
const DEFAULT_LRU_CAPACITY: usize = 1024;

/// Entry in the flag cache
#[derive(Clone, Debug)]
pub struct CacheEntry {
	pub value: FlagValue,
	pub expires_at: Instant,
}

impl CacheEntry {
	fn new(value: FlagValue, ttl: Duration) -> Self {
		Self { value, expires_at: Instant::now() + ttl }
	}

	/// Check if this entry has expired
	pub fn is_expired(&self) -> bool {
		Instant::now() >= self.expires_at
	}
}

/// Builds the composite cache key for a lookup.
///
/// The key uniquely encodes `(lookup_key, tenant_id, client_id)`, so
/// entries for different tenants or clients can never cross-read.
pub fn flag_cache_key(lookup_key: &str, ctx: &ResolutionContext) -> String {
	format!(
		"{}:{}:{}",
		lookup_key,
		ctx.tenant_id.as_deref().unwrap_or("global"),
		ctx.client_id.as_deref().unwrap_or("global"),
	)
}

/// Injectable cache store.
///
/// Expired entries count as absent everywhere and are purged on access;
/// `set` is an unconditional last-write-wins overwrite, no versioning.
pub trait FlagCache: Debug + Send + Sync {
	fn get(&self, key: &str) -> Option<FlagValue>;
	fn set(&self, key: String, value: FlagValue, ttl: Duration);
	fn clear(&self);

	/// Live contents at call time; expired entries are purged first
	fn stats(&self) -> CacheStats;
}

/// Unbounded TTL cache over a `HashMap` - the reference store
#[derive(Debug, Default)]
pub struct MemoryFlagCache {
	entries: RwLock<HashMap<Box<str>, CacheEntry>>,
}

impl FlagCache for MemoryFlagCache {
	fn get(&self, key: &str) -> Option<FlagValue> {
		let mut entries = self.entries.write();

		if let Some(entry) = entries.get(key) {
			if entry.is_expired() {
				entries.remove(key);
				None
			} else {
				Some(entry.value.clone())
			}
		} else {
			None
		}
	}

	fn set(&self, key: String, value: FlagValue, ttl: Duration) {
		let mut entries = self.entries.write();
		entries.insert(key.into_boxed_str(), CacheEntry::new(value, ttl));
	}

	fn clear(&self) {
		self.entries.write().clear();
	}

	fn stats(&self) -> CacheStats {
		let mut entries = self.entries.write();
		entries.retain(|_, entry| !entry.is_expired());

		let mut keys: Vec<Box<str>> = entries.keys().cloned().collect();
		keys.sort();
		CacheStats { size: keys.len(), keys }
	}
}

/// Bounded LRU variant for deployments that must cap cache memory.
///
/// Same TTL discipline as [`MemoryFlagCache`], with least-recently-used
/// eviction once `capacity` entries are held.
pub struct LruFlagCache {
	entries: RwLock<LruCache<Box<str>, CacheEntry>>,
}

impl LruFlagCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
		Self { entries: RwLock::new(LruCache::new(capacity)) }
	}
}

impl Default for LruFlagCache {
	fn default() -> Self {
		Self::new(DEFAULT_LRU_CAPACITY)
	}
}

impl Debug for LruFlagCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LruFlagCache").field("len", &self.entries.read().len()).finish()
	}
}

impl FlagCache for LruFlagCache {
	fn get(&self, key: &str) -> Option<FlagValue> {
		let mut entries = self.entries.write();

		if let Some(entry) = entries.get(key) {
			if entry.is_expired() {
				entries.pop(key);
				None
			} else {
				Some(entry.value.clone())
			}
		} else {
			None
		}
	}

	fn set(&self, key: String, value: FlagValue, ttl: Duration) {
		let mut entries = self.entries.write();
		entries.put(key.into_boxed_str(), CacheEntry::new(value, ttl));
	}

	fn clear(&self) {
		self.entries.write().clear();
	}

	fn stats(&self) -> CacheStats {
		let mut entries = self.entries.write();

		let expired: Vec<Box<str>> = entries
			.iter()
			.filter(|(_, entry)| entry.is_expired())
			.map(|(key, _)| key.clone())
			.collect();
		for key in &expired {
			entries.pop(key);
		}

		let mut keys: Vec<Box<str>> = entries.iter().map(|(key, _)| key.clone()).collect();
		keys.sort();
		CacheStats { size: keys.len(), keys }
	}
}


// vim: ts=4
