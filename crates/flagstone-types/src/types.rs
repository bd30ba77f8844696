//! Common types used throughout the Flagstone engine.

use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as, skip_serializing_none};
use std::time::Duration;

// ResolutionContext //
//*******************//

/// Scoping passed through every flag lookup.
///
/// An absent `tenant_id` means a global-only lookup: the tenant-scoped
/// override tier is skipped. The context is created per request and never
/// persisted.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionContext {
	pub tenant_id: Option<Box<str>>,
	pub client_id: Option<Box<str>>,
}

impl ResolutionContext {
	/// Context without tenant or client scoping
	pub fn global() -> Self {
		Self::default()
	}

	/// Context scoped to a tenant
	pub fn tenant(tenant_id: impl Into<Box<str>>) -> Self {
		Self { tenant_id: Some(tenant_id.into()), client_id: None }
	}

	/// Adds client scoping to the context
	pub fn with_client(mut self, client_id: impl Into<Box<str>>) -> Self {
		self.client_id = Some(client_id.into());
		self
	}
}

// FlagConfig //
//************//

/// Static connection/behavior parameters for a resolver instance.
///
/// Immutable once a service has been built from it; tests construct one
/// service per configuration.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlagConfig {
	/// Identifier of the distributed remote configuration profile
	pub remote_profile: Box<str>,

	/// Identifier of the tenant override key-value store
	pub override_store: Box<str>,

	/// How long resolved values stay valid in the cache
	#[serde_as(as = "DurationMilliSeconds<u64>")]
	pub cache_ttl: Duration,

	/// Per-source query timeout; a slower source counts as "not found"
	#[serde_as(as = "DurationMilliSeconds<u64>")]
	pub source_timeout: Duration,
}

impl Default for FlagConfig {
	fn default() -> Self {
		Self {
			remote_profile: "default".into(),
			override_store: "flag-overrides".into(),
			cache_ttl: Duration::from_millis(60_000),
			source_timeout: Duration::from_millis(2_000),
		}
	}
}

// FlagValue //
//***********//

/// A resolved flag value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)] // Bool must come before Variant to avoid bool -> string coercion
pub enum FlagValue {
	Bool(bool),
	Variant(Box<str>),
}

impl FlagValue {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			FlagValue::Bool(b) => Some(*b),
			FlagValue::Variant(_) => None,
		}
	}

	pub fn as_variant(&self) -> Option<&str> {
		match self {
			FlagValue::Bool(_) => None,
			FlagValue::Variant(v) => Some(v),
		}
	}

	/// Get the type name for log messages
	pub fn type_name(&self) -> &'static str {
		match self {
			FlagValue::Bool(_) => "bool",
			FlagValue::Variant(_) => "variant",
		}
	}
}

// CacheStats //
//************//

/// Live cache contents at call time
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
	pub size: usize,
	pub keys: Vec<Box<str>>,
}


// vim: ts=4
