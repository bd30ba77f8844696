//! The closed AI capability flag set
//!
//! Every AI-assisted surface of the platform is gated by one of these
//! flags. The set is a type-level contract: adding or removing a flag is a
//! compile-time-checked change for every consumer, and nothing here is ever
//! persisted.

use serde::Serialize;

/// Category grouping for the AI capability flags
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AiCategory {
	Onboarding,
	Contacts,
	Website,
	Messaging,
	Email,
	Insights,
	Automation,
}

impl AiCategory {
	pub const ALL: [AiCategory; 7] = [
		AiCategory::Onboarding,
		AiCategory::Contacts,
		AiCategory::Website,
		AiCategory::Messaging,
		AiCategory::Email,
		AiCategory::Insights,
		AiCategory::Automation,
	];

	/// Flags gated under this category
	pub fn features(self) -> &'static [AiFeature] {
		match self {
			AiCategory::Onboarding => &[
				AiFeature::OnboardingAssistant,
				AiFeature::OnboardingAutofill,
				AiFeature::OnboardingChecklist,
			],
			AiCategory::Contacts => &[
				AiFeature::ContactEnrichment,
				AiFeature::ContactDedupe,
				AiFeature::ContactScoring,
			],
			AiCategory::Website => &[
				AiFeature::SiteCopywriter,
				AiFeature::SiteSeoHints,
				AiFeature::SiteImageAlt,
			],
			AiCategory::Messaging => &[
				AiFeature::MessageSuggestions,
				AiFeature::MessageAutoReply,
				AiFeature::MessageSentiment,
			],
			AiCategory::Email => &[
				AiFeature::EmailSummaries,
				AiFeature::EmailDrafting,
				AiFeature::EmailTriage,
			],
			AiCategory::Insights => &[
				AiFeature::InsightDigest,
				AiFeature::InsightForecast,
				AiFeature::InsightAnomaly,
			],
			AiCategory::Automation => &[
				AiFeature::WorkflowBuilder,
				AiFeature::WorkflowSuggestions,
				AiFeature::WorkflowAutotune,
			],
		}
	}
}

/// One AI capability flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AiFeature {
	OnboardingAssistant,
	OnboardingAutofill,
	OnboardingChecklist,
	ContactEnrichment,
	ContactDedupe,
	ContactScoring,
	SiteCopywriter,
	SiteSeoHints,
	SiteImageAlt,
	MessageSuggestions,
	MessageAutoReply,
	MessageSentiment,
	EmailSummaries,
	EmailDrafting,
	EmailTriage,
	InsightDigest,
	InsightForecast,
	InsightAnomaly,
	WorkflowBuilder,
	WorkflowSuggestions,
	WorkflowAutotune,
}

impl AiFeature {
	pub const ALL: [AiFeature; 21] = [
		AiFeature::OnboardingAssistant,
		AiFeature::OnboardingAutofill,
		AiFeature::OnboardingChecklist,
		AiFeature::ContactEnrichment,
		AiFeature::ContactDedupe,
		AiFeature::ContactScoring,
		AiFeature::SiteCopywriter,
		AiFeature::SiteSeoHints,
		AiFeature::SiteImageAlt,
		AiFeature::MessageSuggestions,
		AiFeature::MessageAutoReply,
		AiFeature::MessageSentiment,
		AiFeature::EmailSummaries,
		AiFeature::EmailDrafting,
		AiFeature::EmailTriage,
		AiFeature::InsightDigest,
		AiFeature::InsightForecast,
		AiFeature::InsightAnomaly,
		AiFeature::WorkflowBuilder,
		AiFeature::WorkflowSuggestions,
		AiFeature::WorkflowAutotune,
	];

	/// Wire key used by every resolution tier
	pub fn key(self) -> &'static str {
		match self {
			AiFeature::OnboardingAssistant => "AI_ONBOARDING_ASSISTANT",
			AiFeature::OnboardingAutofill => "AI_ONBOARDING_AUTOFILL",
			AiFeature::OnboardingChecklist => "AI_ONBOARDING_CHECKLIST",
			AiFeature::ContactEnrichment => "AI_CONTACT_ENRICHMENT",
			AiFeature::ContactDedupe => "AI_CONTACT_DEDUPE",
			AiFeature::ContactScoring => "AI_CONTACT_SCORING",
			AiFeature::SiteCopywriter => "AI_SITE_COPYWRITER",
			AiFeature::SiteSeoHints => "AI_SITE_SEO_HINTS",
			AiFeature::SiteImageAlt => "AI_SITE_IMAGE_ALT",
			AiFeature::MessageSuggestions => "AI_MESSAGE_SUGGESTIONS",
			AiFeature::MessageAutoReply => "AI_MESSAGE_AUTO_REPLY",
			AiFeature::MessageSentiment => "AI_MESSAGE_SENTIMENT",
			AiFeature::EmailSummaries => "AI_EMAIL_SUMMARIES",
			AiFeature::EmailDrafting => "AI_EMAIL_DRAFTING",
			AiFeature::EmailTriage => "AI_EMAIL_TRIAGE",
			AiFeature::InsightDigest => "AI_INSIGHT_DIGEST",
			AiFeature::InsightForecast => "AI_INSIGHT_FORECAST",
			AiFeature::InsightAnomaly => "AI_INSIGHT_ANOMALY",
			AiFeature::WorkflowBuilder => "AI_WORKFLOW_BUILDER",
			AiFeature::WorkflowSuggestions => "AI_WORKFLOW_SUGGESTIONS",
			AiFeature::WorkflowAutotune => "AI_WORKFLOW_AUTOTUNE",
		}
	}

	pub fn category(self) -> AiCategory {
		match self {
			AiFeature::OnboardingAssistant
			| AiFeature::OnboardingAutofill
			| AiFeature::OnboardingChecklist => AiCategory::Onboarding,
			AiFeature::ContactEnrichment
			| AiFeature::ContactDedupe
			| AiFeature::ContactScoring => AiCategory::Contacts,
			AiFeature::SiteCopywriter | AiFeature::SiteSeoHints | AiFeature::SiteImageAlt => {
				AiCategory::Website
			}
			AiFeature::MessageSuggestions
			| AiFeature::MessageAutoReply
			| AiFeature::MessageSentiment => AiCategory::Messaging,
			AiFeature::EmailSummaries | AiFeature::EmailDrafting | AiFeature::EmailTriage => {
				AiCategory::Email
			}
			AiFeature::InsightDigest | AiFeature::InsightForecast | AiFeature::InsightAnomaly => {
				AiCategory::Insights
			}
			AiFeature::WorkflowBuilder
			| AiFeature::WorkflowSuggestions
			| AiFeature::WorkflowAutotune => AiCategory::Automation,
		}
	}

	/// Static default substituted when a flag's backend fails.
	///
	/// Every AI capability ships dark until a source turns it on.
	pub fn default_enabled(self) -> bool {
		false
	}
}


// vim: ts=4
