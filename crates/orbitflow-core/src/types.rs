//! Common closed enumerations used across Orbitflow.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An automation objective selected by the creator.
///
/// The declaration order is the canonical order: steps and timelines are
/// always emitted goal-by-goal in this order, regardless of how the caller
/// ordered the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    /// Trend scouting, title and thumbnail iteration, metadata sync.
    AudienceGrowth,
    /// AI scriptwriting, b-roll prep, editor asset handoff.
    ContentVelocity,
    /// Sponsor matching, CTA placement, deliverable tracking.
    Monetization,
    /// Comment intelligence, channel posts, engagement prompts.
    Community,
}

impl Goal {
    /// All goals in canonical emission order.
    pub const CANONICAL: [Goal; 4] = [
        Goal::AudienceGrowth,
        Goal::ContentVelocity,
        Goal::Monetization,
        Goal::Community,
    ];
}

/// Content tone profile for generated copy and prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Educational,
    StoryDriven,
    HighEnergy,
    Documentary,
    Tutorial,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tone::Educational => "educational",
            Tone::StoryDriven => "story-driven",
            Tone::HighEnergy => "high-energy",
            Tone::Documentary => "documentary",
            Tone::Tutorial => "tutorial",
        };
        f.write_str(label)
    }
}

/// Degree of human oversight requested for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutomationLevel {
    /// Human-led with AI research support.
    Assist,
    /// AI-led with human review before publish (default).
    #[default]
    Hybrid,
    /// Full orchestration with guardrails.
    Autopilot,
}

impl AutomationLevel {
    /// Returns true if a human review checkpoint is part of the rollout.
    pub fn requires_review(&self) -> bool {
        !matches!(self, AutomationLevel::Autopilot)
    }
}

/// Publish-frequency bucket derived from the weekly cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CadenceLabel {
    #[serde(rename = "Daily")]
    Daily,
    #[serde(rename = "3-4x Weekly")]
    ThreeToFourWeekly,
    #[serde(rename = "Weekly")]
    Weekly,
}

impl CadenceLabel {
    /// Classify a weekly upload cadence. Ties resolve to the
    /// higher-frequency bucket.
    pub fn classify(cadence_per_week: u8) -> Self {
        if cadence_per_week >= 5 {
            CadenceLabel::Daily
        } else if cadence_per_week >= 3 {
            CadenceLabel::ThreeToFourWeekly
        } else {
            CadenceLabel::Weekly
        }
    }
}

impl fmt::Display for CadenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CadenceLabel::Daily => "Daily",
            CadenceLabel::ThreeToFourWeekly => "3-4x Weekly",
            CadenceLabel::Weekly => "Weekly",
        };
        f.write_str(label)
    }
}
