//! Adapter for process-local environment defaults.

use std::fmt::Debug;

/// The last resolvable tier before the hard default.
///
/// Synchronous and infallible: implementations answer from process-local
/// static data and never touch the network.
pub trait EnvAdapter: Debug + Send + Sync {
	fn get(&self, key: &str) -> Option<Box<str>>;
}

// vim: ts=4
