//! Channel configuration types and builder.
//!
//! A `ChannelConfig` is the validated input record the compiler consumes.
//! It is immutable once built; the HTTP handler (external to this crate)
//! is expected to reject malformed requests before construction, but the
//! builder and `validate` re-check the invariants so the compiler can be
//! driven directly from tests.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, Result};
use crate::types::{AutomationLevel, Goal, Tone};

/// A creator's channel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelConfig {
    /// Channel name, used only for interpolation into generated text.
    pub channel_name: String,

    /// Channel topic, used only for interpolation into generated text.
    pub channel_topic: String,

    /// Content tone profile.
    pub tone: Tone,

    /// Requested uploads per week, expected range 1-14.
    pub cadence_per_week: u8,

    /// Selected automation goals. Order is insignificant; duplicates are
    /// ignored. Must be non-empty.
    pub goals: Vec<Goal>,

    /// Degree of human oversight for the generated pipeline.
    pub automation_level: AutomationLevel,

    /// Optional callback URL for the external automation platform.
    /// Opaque to the compiler: carried into the output verbatim and
    /// never dereferenced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Preferred publish time of day, used only for timeline labeling.
    pub preferred_publish_time: NaiveTime,

    /// Monetization target, interpolated into content only when the
    /// monetization goal is selected.
    pub monetization_target: String,

    /// When true, a short-form repurposing step and hook suggestions are
    /// added to the blueprint.
    pub include_shorts: bool,

    /// Free-text notes; may trigger advisory operator notes via keyword
    /// matching.
    pub notes: String,
}

impl ChannelConfig {
    /// Create a new builder.
    pub fn builder() -> ChannelConfigBuilder {
        ChannelConfigBuilder::new()
    }

    /// Selected goals deduplicated and sorted into canonical order.
    ///
    /// This is the single source of goal-order invariance: every stage
    /// that walks goals walks this sequence, so permuting the caller's
    /// selection never changes the output.
    pub fn normalized_goals(&self) -> Vec<Goal> {
        let mut goals = self.goals.clone();
        goals.sort();
        goals.dedup();
        goals
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.channel_name.trim().is_empty() {
            return Err(BlueprintError::validation(
                "channelName",
                "channel name cannot be empty",
            ));
        }

        if self.channel_topic.trim().is_empty() {
            return Err(BlueprintError::validation(
                "channelTopic",
                "channel topic cannot be empty",
            ));
        }

        if self.goals.is_empty() {
            return Err(BlueprintError::validation(
                "goals",
                "select at least one automation goal",
            ));
        }

        if self.cadence_per_week == 0 || self.cadence_per_week > 14 {
            return Err(BlueprintError::validation(
                "cadencePerWeek",
                format!(
                    "cadence must be between 1 and 14 uploads per week, got {}",
                    self.cadence_per_week
                ),
            ));
        }

        Ok(())
    }
}

/// Builder for creating `ChannelConfig` records with a fluent API.
#[derive(Debug, Clone)]
pub struct ChannelConfigBuilder {
    channel_name: Option<String>,
    channel_topic: Option<String>,
    tone: Tone,
    cadence_per_week: u8,
    goals: Vec<Goal>,
    automation_level: AutomationLevel,
    webhook_url: Option<String>,
    preferred_publish_time: NaiveTime,
    monetization_target: String,
    include_shorts: bool,
    notes: String,
}

impl Default for ChannelConfigBuilder {
    fn default() -> Self {
        Self {
            channel_name: None,
            channel_topic: None,
            tone: Tone::Educational,
            cadence_per_week: 3,
            goals: Vec::new(),
            automation_level: AutomationLevel::Hybrid,
            webhook_url: None,
            // Matches the platform's default evening publish slot.
            preferred_publish_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            monetization_target: String::new(),
            include_shorts: false,
            notes: String::new(),
        }
    }
}

impl ChannelConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel name.
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    /// Set the channel topic.
    pub fn channel_topic(mut self, topic: impl Into<String>) -> Self {
        self.channel_topic = Some(topic.into());
        self
    }

    /// Set the tone profile.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the weekly upload cadence.
    pub fn cadence_per_week(mut self, cadence: u8) -> Self {
        self.cadence_per_week = cadence;
        self
    }

    /// Add an automation goal.
    pub fn goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    /// Replace the goal selection.
    pub fn goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.goals = goals.into_iter().collect();
        self
    }

    /// Set the automation level.
    pub fn automation_level(mut self, level: AutomationLevel) -> Self {
        self.automation_level = level;
        self
    }

    /// Set the optional platform webhook URL.
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Set the preferred publish time.
    pub fn preferred_publish_time(mut self, time: NaiveTime) -> Self {
        self.preferred_publish_time = time;
        self
    }

    /// Set the monetization target.
    pub fn monetization_target(mut self, target: impl Into<String>) -> Self {
        self.monetization_target = target.into();
        self
    }

    /// Toggle short-form repurposing.
    pub fn include_shorts(mut self, include: bool) -> Self {
        self.include_shorts = include;
        self
    }

    /// Set free-text notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ChannelConfig> {
        let channel_name = self
            .channel_name
            .ok_or_else(|| BlueprintError::validation("channelName", "channel name is required"))?;
        let channel_topic = self.channel_topic.ok_or_else(|| {
            BlueprintError::validation("channelTopic", "channel topic is required")
        })?;

        let config = ChannelConfig {
            channel_name,
            channel_topic,
            tone: self.tone,
            cadence_per_week: self.cadence_per_week,
            goals: self.goals,
            automation_level: self.automation_level,
            webhook_url: self.webhook_url,
            preferred_publish_time: self.preferred_publish_time,
            monetization_target: self.monetization_target,
            include_shorts: self.include_shorts,
            notes: self.notes,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools for creators")
            .tone(Tone::HighEnergy)
            .cadence_per_week(4)
            .goal(Goal::AudienceGrowth)
            .goal(Goal::Monetization)
            .automation_level(AutomationLevel::Autopilot)
            .monetization_target("$5k monthly")
            .include_shorts(true)
            .build()
            .unwrap();

        assert_eq!(config.channel_name, "Orbit Labs");
        assert_eq!(config.goals.len(), 2);
        assert!(config.include_shorts);
    }

    #[test]
    fn test_builder_requires_name_and_topic() {
        let result = ChannelConfig::builder()
            .channel_topic("woodworking")
            .goal(Goal::Community)
            .build();
        assert_eq!(result.unwrap_err().field(), Some("channelName"));

        let result = ChannelConfig::builder()
            .channel_name("Sawdust Weekly")
            .goal(Goal::Community)
            .build();
        assert_eq!(result.unwrap_err().field(), Some("channelTopic"));
    }

    #[test]
    fn test_empty_goals_rejected() {
        let result = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools")
            .build();
        assert_eq!(result.unwrap_err().field(), Some("goals"));
    }

    #[test]
    fn test_cadence_range() {
        let result = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools")
            .goal(Goal::AudienceGrowth)
            .cadence_per_week(0)
            .build();
        assert_eq!(result.unwrap_err().field(), Some("cadencePerWeek"));

        let result = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools")
            .goal(Goal::AudienceGrowth)
            .cadence_per_week(15)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_normalized_goals_dedup_and_order() {
        let config = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools")
            .goals([
                Goal::Community,
                Goal::AudienceGrowth,
                Goal::Community,
                Goal::ContentVelocity,
            ])
            .build()
            .unwrap();

        assert_eq!(
            config.normalized_goals(),
            vec![Goal::AudienceGrowth, Goal::ContentVelocity, Goal::Community]
        );
    }

    #[test]
    fn test_config_round_trips_camel_case() {
        let config = ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools")
            .goal(Goal::AudienceGrowth)
            .webhook_url("https://n8n.example/run")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"cadencePerWeek\""));
        assert!(json.contains("\"webhookUrl\""));

        let parsed: ChannelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
