//! Environment default source backed by the process environment.
//!
//! The environment tier is a static lookup: the adapter snapshots the
//! process environment once at construction and answers from the snapshot
//! for the life of the process. `from_vars` builds an adapter from explicit
//! pairs for tests and embedded default tables.

use std::collections::HashMap;

use flagstone_types::env_adapter::EnvAdapter;

#[derive(Debug)]
pub struct ProcessEnvAdapter {
	vars: HashMap<Box<str>, Box<str>>,
}

impl ProcessEnvAdapter {
	/// Snapshot of the current process environment
	pub fn new() -> Self {
		Self::from_vars(std::env::vars())
	}

	/// Adapter over explicit key-value pairs
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<Box<str>>,
		V: Into<Box<str>>,
	{
		Self { vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}
}

impl Default for ProcessEnvAdapter {
	fn default() -> Self {
		Self::new()
	}
}

impl EnvAdapter for ProcessEnvAdapter {
	fn get(&self, key: &str) -> Option<Box<str>> {
		self.vars.get(key).cloned()
	}
}


// vim: ts=4
