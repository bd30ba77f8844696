//! Public flag resolution surface

use std::sync::Arc;

use flagstone_types::env_adapter::EnvAdapter;
use flagstone_types::override_adapter::OverrideAdapter;
use flagstone_types::remote_adapter::RemoteAdapter;

use crate::cache::{FlagCache, MemoryFlagCache, flag_cache_key};
use crate::prelude::*;
use crate::resolver::{SourceChain, parse_enabled};

/// Hard default for unresolvable variant lookups
const VARIANT_DEFAULT: &str = "default";

/// Flag resolution service - the surface consumed by the rest of the
/// platform.
///
/// All methods are safe for concurrent invocation; the cache store is the
/// only shared mutable state. No method ever fails: unresolvable boolean
/// flags are `false`, unresolvable variants are `"default"`. Callers supply
/// an already-authenticated [`ResolutionContext`].
#[derive(Debug)]
pub struct FlagService {
	chain: SourceChain,
	cache: Arc<dyn FlagCache>,
	config: FlagConfig,
}

impl FlagService {
	/// Service over the reference unbounded in-memory cache
	pub fn new(
		config: FlagConfig,
		remote: Arc<dyn RemoteAdapter>,
		overrides: Arc<dyn OverrideAdapter>,
		env: Arc<dyn EnvAdapter>,
	) -> Self {
		Self::with_cache(config, remote, overrides, env, Arc::new(MemoryFlagCache::default()))
	}

	/// Service with an injected cache store: isolated instances in tests,
	/// bounded implementations in production
	pub fn with_cache(
		config: FlagConfig,
		remote: Arc<dyn RemoteAdapter>,
		overrides: Arc<dyn OverrideAdapter>,
		env: Arc<dyn EnvAdapter>,
		cache: Arc<dyn FlagCache>,
	) -> Self {
		debug!(
			"flag service created (profile '{}', overrides '{}', ttl {:?})",
			config.remote_profile, config.override_store, config.cache_ttl
		);
		Self { chain: SourceChain::new(remote, overrides, env), cache, config }
	}

	/// Resolves a boolean flag. Unresolvable keys are `false`.
	pub async fn is_enabled(&self, flag: &str, ctx: &ResolutionContext) -> bool {
		let cache_key = flag_cache_key(flag, ctx);
		if let Some(value) = self.cache.get(&cache_key) {
			debug!("flag cache hit: {}", cache_key);
			if let Some(enabled) = value.as_bool() {
				return enabled;
			}
		}

		let raw = self.chain.resolve(flag, flag, ctx, &self.config).await;
		let enabled = raw.as_deref().map(parse_enabled).unwrap_or(false);

		// The hard default is cached too: repeat lookups inside the TTL
		// window never re-traverse the chain.
		self.cache.set(cache_key, FlagValue::Bool(enabled), self.config.cache_ttl);
		enabled
	}

	/// Resolves a variant (A/B) flag. Unresolvable keys are `"default"`.
	pub async fn get_variant(&self, flag: &str, ctx: &ResolutionContext) -> Box<str> {
		// The `_variant` suffix keeps the lookup, and with it the cache
		// namespace, textually distinct from the boolean entry for the same
		// flag. The environment tier derives an upper-cased suffix instead.
		let lookup_key = format!("{}_variant", flag);
		let env_key = format!("{}_VARIANT", flag);

		let cache_key = flag_cache_key(&lookup_key, ctx);
		if let Some(value) = self.cache.get(&cache_key) {
			debug!("variant cache hit: {}", cache_key);
			if let Some(variant) = value.as_variant() {
				return variant.into();
			}
		}

		let variant: Box<str> = self
			.chain
			.resolve(&lookup_key, &env_key, ctx, &self.config)
			.await
			.unwrap_or_else(|| VARIANT_DEFAULT.into());

		self.cache.set(cache_key, FlagValue::Variant(variant.clone()), self.config.cache_ttl);
		variant
	}

	/// Empties the cache store, synchronous and immediate
	pub fn clear_cache(&self) {
		self.cache.clear();
	}

	/// Live cache contents at call time
	pub fn cache_stats(&self) -> CacheStats {
		self.cache.stats()
	}

	pub fn config(&self) -> &FlagConfig {
		&self.config
	}
}

// vim: ts=4
