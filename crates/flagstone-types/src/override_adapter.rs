//! Adapter for the tenant override key-value store.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::FlResult;

#[async_trait]
pub trait OverrideAdapter: Debug + Send + Sync {
	/// Reads an override value by exact key.
	///
	/// The resolver queries at most two keys per lookup: the tenant-scoped
	/// `"{flag}:tenant:{tenant_id}"` key, then the global `"{flag}"` key.
	async fn get(&self, key: &str) -> FlResult<Option<Box<str>>>;
}

// vim: ts=4
