//! Shared mock sources and helpers for the resolution tests
//!
//! Each mock records its call count so tests can assert that the cache and
//! the short-circuiting chain really skip the backends.
#![allow(dead_code)]
#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use flagstone_types::env_adapter::EnvAdapter;
use flagstone_types::error::{Error, FlResult};
use flagstone_types::override_adapter::OverrideAdapter;
use flagstone_types::remote_adapter::RemoteAdapter;

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

/// Remote configuration profile mock
#[derive(Debug, Default)]
pub struct MockRemote {
	values: HashMap<Box<str>, Box<str>>,
	fail: bool,
	delay: Option<Duration>,
	calls: AtomicUsize,
}

impl MockRemote {
	pub fn empty() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn with_values(pairs: &[(&str, &str)]) -> Arc<Self> {
		let values = pairs.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect();
		Arc::new(Self { values, ..Self::default() })
	}

	pub fn failing() -> Arc<Self> {
		Arc::new(Self { fail: true, ..Self::default() })
	}

	/// Mock that answers only after `delay`, for timeout tests
	pub fn slow(delay: Duration, pairs: &[(&str, &str)]) -> Arc<Self> {
		let values = pairs.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect();
		Arc::new(Self { values, delay: Some(delay), ..Self::default() })
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RemoteAdapter for MockRemote {
	async fn fetch(&self, key: &str) -> FlResult<Option<Box<str>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}
		if self.fail {
			return Err(Error::Transport("mock remote unreachable".into()));
		}
		Ok(self.values.get(key).cloned())
	}
}

/// Tenant override store mock
#[derive(Debug, Default)]
pub struct MockOverrides {
	values: HashMap<Box<str>, Box<str>>,
	fail: bool,
	calls: AtomicUsize,
}

impl MockOverrides {
	pub fn empty() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn with_values(pairs: &[(&str, &str)]) -> Arc<Self> {
		let values = pairs.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect();
		Arc::new(Self { values, ..Self::default() })
	}

	pub fn failing() -> Arc<Self> {
		Arc::new(Self { fail: true, ..Self::default() })
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl OverrideAdapter for MockOverrides {
	async fn get(&self, key: &str) -> FlResult<Option<Box<str>>> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if self.fail {
			return Err(Error::Transport("mock override store unreachable".into()));
		}
		Ok(self.values.get(key).cloned())
	}
}

/// Environment default source mock
#[derive(Debug, Default)]
pub struct MockEnv {
	values: HashMap<Box<str>, Box<str>>,
}

impl MockEnv {
	pub fn empty() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn with_values(pairs: &[(&str, &str)]) -> Arc<Self> {
		let values = pairs.iter().map(|(k, v)| ((*k).into(), (*v).into())).collect();
		Arc::new(Self { values })
	}
}

impl EnvAdapter for MockEnv {
	fn get(&self, key: &str) -> Option<Box<str>> {
		self.values.get(key).cloned()
	}
}

// vim: ts=4
