//! Aggregation and readiness tests
//!
//! The aggregation layer must cover the declared flag set exactly, isolate
//! per-flag failures, and classify readiness with the documented bounds.
#![allow(clippy::panic, clippy::expect_used, clippy::unwrap_used)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use flagstone_ai::{AiCategory, AiFeature, AiFlagService, FlagReader, ReadinessLevel};
use flagstone_core::FlagService;
use flagstone_env_adapter_process::ProcessEnvAdapter;
use flagstone_types::env_adapter::EnvAdapter;
use flagstone_types::error::{Error, FlResult};
use flagstone_types::override_adapter::OverrideAdapter;
use flagstone_types::remote_adapter::RemoteAdapter;
use flagstone_types::types::{FlagConfig, ResolutionContext};

/// Reader mock: enabled keys answer true, failing keys error, the rest
/// answer false
#[derive(Debug, Default)]
struct MockReader {
	enabled: HashSet<&'static str>,
	failing: HashSet<&'static str>,
}

impl MockReader {
	fn enabling(keys: &[&'static str]) -> Arc<Self> {
		Arc::new(Self { enabled: keys.iter().copied().collect(), ..Self::default() })
	}

	fn enabling_first(count: usize) -> Arc<Self> {
		let keys: Vec<&'static str> =
			AiFeature::ALL.iter().take(count).map(|f| f.key()).collect();
		Self::enabling(&keys)
	}

	fn failing_for(enabled: &[&'static str], failing: &[&'static str]) -> Arc<Self> {
		Arc::new(Self {
			enabled: enabled.iter().copied().collect(),
			failing: failing.iter().copied().collect(),
		})
	}

	fn unreachable_backends() -> Arc<Self> {
		let failing = AiFeature::ALL.iter().map(|f| f.key()).collect();
		Arc::new(Self { enabled: HashSet::new(), failing })
	}
}

#[async_trait]
impl FlagReader for MockReader {
	async fn read_flag(&self, flag: &str, _ctx: &ResolutionContext) -> FlResult<bool> {
		if self.failing.contains(flag) {
			return Err(Error::Transport("mock backend unreachable".into()));
		}
		Ok(self.enabled.contains(flag))
	}
}

#[tokio::test]
async fn test_all_flags_covers_exactly_the_declared_set() {
	let service = AiFlagService::new(MockReader::enabling(&["AI_EMAIL_TRIAGE"]));
	let flags = service.all_flags(&ResolutionContext::global()).await;

	assert_eq!(flags.len(), 21);
	let declared: HashSet<&str> = AiFeature::ALL.iter().map(|f| f.key()).collect();
	for key in flags.keys() {
		assert!(declared.contains(key), "undeclared key {}", key);
	}
	assert_eq!(flags.get("AI_EMAIL_TRIAGE"), Some(&true));
}

#[tokio::test]
async fn test_unreachable_backends_yield_full_default_map() {
	let service = AiFlagService::new(MockReader::unreachable_backends());
	let flags = service.all_flags(&ResolutionContext::tenant("acme")).await;

	// Every declared flag is present with its static default
	assert_eq!(flags.len(), 21);
	assert!(flags.values().all(|enabled| !enabled));
	assert!(!service.has_any_enabled(&ResolutionContext::tenant("acme")).await);
}

#[tokio::test]
async fn test_one_failing_flag_does_not_poison_the_batch() {
	let reader = MockReader::failing_for(
		&["AI_EMAIL_TRIAGE", "AI_EMAIL_DRAFTING"],
		&["AI_CONTACT_SCORING"],
	);
	let service = AiFlagService::new(reader);
	let flags = service.all_flags(&ResolutionContext::global()).await;

	assert_eq!(flags.len(), 21);
	assert_eq!(flags.get("AI_EMAIL_TRIAGE"), Some(&true));
	assert_eq!(flags.get("AI_EMAIL_DRAFTING"), Some(&true));
	// The failing flag fell back to its static default
	assert_eq!(flags.get("AI_CONTACT_SCORING"), Some(&false));
}

#[tokio::test]
async fn test_has_any_enabled() {
	let ctx = ResolutionContext::global();

	let none = AiFlagService::new(MockReader::enabling(&[]));
	assert!(!none.has_any_enabled(&ctx).await);

	let one = AiFlagService::new(MockReader::enabling(&["AI_WORKFLOW_BUILDER"]));
	assert!(one.has_any_enabled(&ctx).await);
}

#[tokio::test]
async fn test_readiness_levels_over_the_bundle() {
	let ctx = ResolutionContext::global();

	let cases = [
		(0, ReadinessLevel::None),
		(1, ReadinessLevel::Basic),
		(6, ReadinessLevel::Advanced),
		(16, ReadinessLevel::Enterprise),
		(21, ReadinessLevel::Enterprise),
	];
	for (count, expected) in cases {
		let service = AiFlagService::new(MockReader::enabling_first(count));
		assert_eq!(service.readiness_level(&ctx).await, expected, "{} enabled", count);
	}
}

#[tokio::test]
async fn test_summary_is_internally_consistent() {
	let service = AiFlagService::new(MockReader::enabling_first(6));
	let summary = service.summary(&ResolutionContext::global()).await;

	assert_eq!(summary.flags.len(), 21);
	assert_eq!(summary.enabled_count, 6);
	assert_eq!(summary.enabled_count, summary.flags.values().filter(|e| **e).count());
	assert_eq!(summary.readiness_level, ReadinessLevel::Advanced);
	assert!(summary.has_any_enabled);
}

#[tokio::test]
async fn test_summary_serializes_camel_case() {
	let service = AiFlagService::new(MockReader::enabling(&[]));
	let summary = service.summary(&ResolutionContext::global()).await;

	let json = serde_json::to_value(&summary).expect("summary serializes");
	assert_eq!(json["enabledCount"], 0);
	assert_eq!(json["readinessLevel"], "none");
	assert_eq!(json["hasAnyEnabled"], false);
	assert_eq!(json["flags"]["AI_EMAIL_TRIAGE"], false);
}

#[tokio::test]
async fn test_category_predicate_is_an_or() {
	let ctx = ResolutionContext::global();

	// One enabled flag flips its whole category
	let service = AiFlagService::new(MockReader::enabling(&["AI_MESSAGE_SENTIMENT"]));
	assert!(service.category_enabled(AiCategory::Messaging, &ctx).await);
	assert!(!service.category_enabled(AiCategory::Email, &ctx).await);

	// A category whose flags all fail stays at its defaults
	let failing = AiFlagService::new(MockReader::unreachable_backends());
	for category in AiCategory::ALL {
		assert!(!failing.category_enabled(category, &ctx).await);
	}
}

/// End-to-end wiring: the aggregation layer over a real resolver, with the
/// environment tier supplying two enabled flags.
#[tokio::test]
async fn test_aggregation_over_real_resolver() {
	#[derive(Debug)]
	struct NullRemote;

	#[async_trait]
	impl RemoteAdapter for NullRemote {
		async fn fetch(&self, _key: &str) -> FlResult<Option<Box<str>>> {
			Ok(None)
		}
	}

	#[derive(Debug)]
	struct NullOverrides;

	#[async_trait]
	impl OverrideAdapter for NullOverrides {
		async fn get(&self, _key: &str) -> FlResult<Option<Box<str>>> {
			Ok(None)
		}
	}

	let env: Arc<dyn EnvAdapter> = Arc::new(ProcessEnvAdapter::from_vars(HashMap::from([
		("AI_EMAIL_TRIAGE", "true"),
		("AI_SITE_COPYWRITER", "1"),
	])));
	let resolver = Arc::new(FlagService::new(
		FlagConfig::default(),
		Arc::new(NullRemote),
		Arc::new(NullOverrides),
		env,
	));
	let service = AiFlagService::new(resolver.clone());

	let ctx = ResolutionContext::tenant("acme");
	let summary = service.summary(&ctx).await;

	assert_eq!(summary.enabled_count, 2);
	assert_eq!(summary.readiness_level, ReadinessLevel::Basic); // 2/21 ≈ 9.5%
	assert!(summary.has_any_enabled);
	assert!(service.category_enabled(AiCategory::Email, &ctx).await);
	assert!(!service.category_enabled(AiCategory::Contacts, &ctx).await);

	// The whole bundle is now cached under the tenant's composite keys
	assert_eq!(resolver.cache_stats().size, 21);
}

// vim: ts=4
