//! Read-through aggregation over the flag resolution surface
//!
//! Stateless: the only state crossing calls is the resolver's shared
//! cache. One flag's backend failure never fails a batch; the flag's
//! static default is substituted and the batch proceeds.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use flagstone_core::FlagService;

use crate::features::{AiCategory, AiFeature};
use crate::prelude::*;
use crate::readiness::{AiSummary, ReadinessLevel};

/// Boolean flag reads as consumed by the aggregation layer.
///
/// [`FlagService`] is infallible by construction; the fallible signature
/// keeps the per-flag failure boundary real for other implementations, and
/// testable.
#[async_trait]
pub trait FlagReader: Send + Sync {
	async fn read_flag(&self, flag: &str, ctx: &ResolutionContext) -> FlResult<bool>;
}

#[async_trait]
impl FlagReader for FlagService {
	async fn read_flag(&self, flag: &str, ctx: &ResolutionContext) -> FlResult<bool> {
		Ok(self.is_enabled(flag, ctx).await)
	}
}

/// Aggregation service over the declared AI capability set
pub struct AiFlagService {
	reader: Arc<dyn FlagReader>,
}

impl AiFlagService {
	pub fn new(reader: Arc<dyn FlagReader>) -> Self {
		Self { reader }
	}

	/// Resolves every declared flag exactly once.
	///
	/// The result covers each declared key and nothing else, whatever the
	/// backends do.
	pub async fn all_flags(&self, ctx: &ResolutionContext) -> BTreeMap<&'static str, bool> {
		let mut flags = BTreeMap::new();
		for feature in AiFeature::ALL {
			flags.insert(feature.key(), self.read_feature(feature, ctx).await);
		}
		flags
	}

	/// True iff at least one declared flag resolves enabled
	pub async fn has_any_enabled(&self, ctx: &ResolutionContext) -> bool {
		self.all_flags(ctx).await.values().any(|enabled| *enabled)
	}

	pub async fn readiness_level(&self, ctx: &ResolutionContext) -> ReadinessLevel {
		let flags = self.all_flags(ctx).await;
		let enabled = flags.values().filter(|enabled| **enabled).count();
		ReadinessLevel::from_counts(enabled, flags.len())
	}

	/// Flag map, enabled count, readiness level, and any-enabled in one call
	pub async fn summary(&self, ctx: &ResolutionContext) -> AiSummary {
		let flags = self.all_flags(ctx).await;
		let enabled_count = flags.values().filter(|enabled| **enabled).count();

		AiSummary {
			readiness_level: ReadinessLevel::from_counts(enabled_count, flags.len()),
			has_any_enabled: enabled_count > 0,
			enabled_count,
			flags,
		}
	}

	/// True iff at least one flag of the category is enabled
	pub async fn category_enabled(&self, category: AiCategory, ctx: &ResolutionContext) -> bool {
		for feature in category.features() {
			if self.read_feature(*feature, ctx).await {
				return true;
			}
		}
		false
	}

	async fn read_feature(&self, feature: AiFeature, ctx: &ResolutionContext) -> bool {
		match self.reader.read_flag(feature.key(), ctx).await {
			Ok(enabled) => enabled,
			Err(err) => {
				warn!("AI flag '{}' failed to resolve, using default: {}", feature.key(), err);
				feature.default_enabled()
			}
		}
	}
}

// vim: ts=4
