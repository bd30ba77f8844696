//! Readiness classification for the AI capability bundle

use serde::Serialize;
use std::collections::BTreeMap;

/// Share of enabled flags mapped to a progressive exposure tier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
	None,
	Basic,
	Advanced,
	Enterprise,
}

impl ReadinessLevel {
	/// Classifies `enabled` out of `total` flags.
	///
	/// Zero enabled is `None`; below a quarter is `Basic`; below three
	/// quarters is `Advanced`; the rest is `Enterprise`. The comparisons
	/// are strict, so exactly 25% classifies as `Advanced` and exactly 75%
	/// as `Enterprise`.
	pub fn from_counts(enabled: usize, total: usize) -> Self {
		if enabled == 0 || total == 0 {
			return ReadinessLevel::None;
		}

		let ratio = enabled as f64 / total as f64;
		if ratio < 0.25 {
			ReadinessLevel::Basic
		} else if ratio < 0.75 {
			ReadinessLevel::Advanced
		} else {
			ReadinessLevel::Enterprise
		}
	}
}

/// Bundled snapshot of the AI capability set for one context
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiSummary {
	pub flags: BTreeMap<&'static str, bool>,
	pub enabled_count: usize,
	pub readiness_level: ReadinessLevel,
	pub has_any_enabled: bool,
}


// vim: ts=4
