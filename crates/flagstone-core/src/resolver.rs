//! Multi-tier source chain resolution
//!
//! Tier order is fixed per call: remote config profile, tenant override
//! store, process environment defaults. The chain is strictly sequential
//! and short-circuits on the first definitive answer. Each remote tier runs
//! under its own bounded timeout; a slow or failing backend degrades to
//! "not found" instead of blocking the chain.

use std::sync::Arc;
use std::time::Duration;

use flagstone_types::env_adapter::EnvAdapter;
use flagstone_types::override_adapter::OverrideAdapter;
use flagstone_types::remote_adapter::RemoteAdapter;

use crate::prelude::*;

/// A raw source string counts as enabled iff it is "true" or "1"
pub fn parse_enabled(raw: &str) -> bool {
	matches!(raw.trim(), "true" | "1")
}

/// Result of querying a single tier.
///
/// `Errored` is collapsed to "not found" at the chain boundary; keeping the
/// distinction until then keeps backend failures visible to logging.
pub(crate) enum TierOutcome {
	Found(Box<str>),
	NotFound,
	Errored(Error),
}

impl TierOutcome {
	fn into_found(self, tier: &'static str, key: &str) -> Option<Box<str>> {
		match self {
			TierOutcome::Found(value) => Some(value),
			TierOutcome::NotFound => None,
			TierOutcome::Errored(err) => {
				warn!("{} source failed for '{}', treating as not found: {}", tier, key, err);
				None
			}
		}
	}
}

/// The ordered lookup chain behind the cache tier
#[derive(Debug)]
pub struct SourceChain {
	remote: Arc<dyn RemoteAdapter>,
	overrides: Arc<dyn OverrideAdapter>,
	env: Arc<dyn EnvAdapter>,
}

impl SourceChain {
	pub fn new(
		remote: Arc<dyn RemoteAdapter>,
		overrides: Arc<dyn OverrideAdapter>,
		env: Arc<dyn EnvAdapter>,
	) -> Self {
		Self { remote, overrides, env }
	}

	/// Resolves `lookup_key` through the tiers in order, first match wins.
	///
	/// `env_key` is the environment tier's derived key; it differs from
	/// `lookup_key` only on the variant path. `None` means no tier had an
	/// answer and the caller applies its hard default.
	pub async fn resolve(
		&self,
		lookup_key: &str,
		env_key: &str,
		ctx: &ResolutionContext,
		config: &FlagConfig,
	) -> Option<Box<str>> {
		if let Some(value) = self
			.query_remote(lookup_key, config.source_timeout)
			.await
			.into_found("remote config", lookup_key)
		{
			debug!("'{}' resolved by remote profile '{}'", lookup_key, config.remote_profile);
			return Some(value);
		}

		if let Some(value) = self.query_overrides(lookup_key, ctx, config).await {
			return Some(value);
		}

		if let Some(value) = self.env.get(env_key) {
			debug!("'{}' resolved by environment default '{}'", lookup_key, env_key);
			return Some(value);
		}

		None
	}

	async fn query_remote(&self, key: &str, limit: Duration) -> TierOutcome {
		match tokio::time::timeout(limit, self.remote.fetch(key)).await {
			Ok(Ok(Some(value))) => TierOutcome::Found(value),
			Ok(Ok(None)) => TierOutcome::NotFound,
			Ok(Err(err)) => TierOutcome::Errored(err),
			Err(elapsed) => TierOutcome::Errored(elapsed.into()),
		}
	}

	/// Tenant-scoped key first when the context carries a tenant, then the
	/// global key; at most two queries per resolution.
	async fn query_overrides(
		&self,
		key: &str,
		ctx: &ResolutionContext,
		config: &FlagConfig,
	) -> Option<Box<str>> {
		if let Some(tenant_id) = ctx.tenant_id.as_deref() {
			let scoped = format!("{}:tenant:{}", key, tenant_id);
			if let Some(value) = self
				.query_override_key(&scoped, config.source_timeout)
				.await
				.into_found("override", &scoped)
			{
				debug!("'{}' resolved by tenant override '{}'", key, scoped);
				return Some(value);
			}
		}

		let value =
			self.query_override_key(key, config.source_timeout).await.into_found("override", key)?;
		debug!("'{}' resolved by global override in '{}'", key, config.override_store);
		Some(value)
	}

	async fn query_override_key(&self, key: &str, limit: Duration) -> TierOutcome {
		match tokio::time::timeout(limit, self.overrides.get(key)).await {
			Ok(Ok(Some(value))) => TierOutcome::Found(value),
			Ok(Ok(None)) => TierOutcome::NotFound,
			Ok(Err(err)) => TierOutcome::Errored(err),
			Err(elapsed) => TierOutcome::Errored(elapsed.into()),
		}
	}
}


// vim: ts=4
