//! Adapter for the centrally distributed remote configuration profile.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::FlResult;

#[async_trait]
pub trait RemoteAdapter: Debug + Send + Sync {
	/// Fetches the distributed value for `key`.
	///
	/// `Ok(None)` means the profile carries no entry for the key. A failed
	/// or timed-out fetch is not retried within a resolution.
	async fn fetch(&self, key: &str) -> FlResult<Option<Box<str>>>;
}

// vim: ts=4
