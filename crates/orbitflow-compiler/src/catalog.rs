//! Fixed goal-to-step template catalog.
//!
//! Every pipeline node the compiler can emit is declared here as a
//! variant of [`StepTemplate`], so adding a goal or a node is an
//! exhaustive-match change rather than a runtime table edit. Declared
//! dependencies reference other templates; whether an edge survives
//! instantiation is decided later, against the set of templates actually
//! selected.

use orbitflow_core::Goal;

/// A canonical pipeline step template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepTemplate {
    TrendScouting,
    MetadataSync,
    AiScripting,
    AssetHandoff,
    SponsorMatching,
    DeliverableTracking,
    CommentIntelligence,
    EngagementPrompts,
    ShortsRepurposing,
}

impl StepTemplate {
    /// Templates owned by a goal, in emission order.
    pub fn for_goal(goal: Goal) -> &'static [StepTemplate] {
        match goal {
            Goal::AudienceGrowth => &[StepTemplate::TrendScouting, StepTemplate::MetadataSync],
            Goal::ContentVelocity => &[StepTemplate::AiScripting, StepTemplate::AssetHandoff],
            Goal::Monetization => &[
                StepTemplate::SponsorMatching,
                StepTemplate::DeliverableTracking,
            ],
            Goal::Community => &[
                StepTemplate::CommentIntelligence,
                StepTemplate::EngagementPrompts,
            ],
        }
    }

    /// Resolve a template from its stable slug.
    pub fn from_id(id: &str) -> Option<StepTemplate> {
        let all = [
            StepTemplate::TrendScouting,
            StepTemplate::MetadataSync,
            StepTemplate::AiScripting,
            StepTemplate::AssetHandoff,
            StepTemplate::SponsorMatching,
            StepTemplate::DeliverableTracking,
            StepTemplate::CommentIntelligence,
            StepTemplate::EngagementPrompts,
            StepTemplate::ShortsRepurposing,
        ];
        all.into_iter().find(|template| template.id() == id)
    }

    /// Stable slug identifier, used as the step id in every blueprint.
    pub fn id(&self) -> &'static str {
        match self {
            StepTemplate::TrendScouting => "trend-scouting",
            StepTemplate::MetadataSync => "metadata-sync",
            StepTemplate::AiScripting => "ai-scripting",
            StepTemplate::AssetHandoff => "asset-handoff",
            StepTemplate::SponsorMatching => "sponsor-matching",
            StepTemplate::DeliverableTracking => "deliverable-tracking",
            StepTemplate::CommentIntelligence => "comment-intelligence",
            StepTemplate::EngagementPrompts => "engagement-prompts",
            StepTemplate::ShortsRepurposing => "shorts-repurposing",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            StepTemplate::TrendScouting => "Trend Scouting",
            StepTemplate::MetadataSync => "Metadata Sync",
            StepTemplate::AiScripting => "AI Scriptwriting",
            StepTemplate::AssetHandoff => "Editor Asset Handoff",
            StepTemplate::SponsorMatching => "Sponsor Matching",
            StepTemplate::DeliverableTracking => "Deliverable Tracking",
            StepTemplate::CommentIntelligence => "Comment Intelligence",
            StepTemplate::EngagementPrompts => "Engagement Prompts",
            StepTemplate::ShortsRepurposing => "Shorts Repurposing",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepTemplate::TrendScouting => {
                "Scan niche trends and rank topic candidates for the next batch of uploads."
            }
            StepTemplate::MetadataSync => {
                "Push refreshed titles, tags, and thumbnail briefs to the channel backend."
            }
            StepTemplate::AiScripting => {
                "Draft a full script with hook, chapters, and b-roll callouts from the topic brief."
            }
            StepTemplate::AssetHandoff => {
                "Bundle the script, b-roll list, and brand kit into the editor's working folder."
            }
            StepTemplate::SponsorMatching => {
                "Shortlist sponsors aligned with the channel and draft CTA placements."
            }
            StepTemplate::DeliverableTracking => {
                "Track sponsor deliverables and deadlines in the campaign sheet."
            }
            StepTemplate::CommentIntelligence => {
                "Digest new comments into sentiment themes and a priority reply queue."
            }
            StepTemplate::EngagementPrompts => {
                "Schedule community posts and polls that feed the next content cycle."
            }
            StepTemplate::ShortsRepurposing => {
                "Cut vertical clips from the latest upload and overlay hook text."
            }
        }
    }

    /// Node type on the external automation platform.
    pub fn platform_node_name(&self) -> &'static str {
        match self {
            StepTemplate::TrendScouting => "HTTP Request",
            StepTemplate::MetadataSync => "YouTube Data",
            StepTemplate::AiScripting => "OpenAI",
            StepTemplate::AssetHandoff => "Google Drive",
            StepTemplate::SponsorMatching => "OpenAI",
            StepTemplate::DeliverableTracking => "Google Sheets",
            StepTemplate::CommentIntelligence => "OpenAI",
            StepTemplate::EngagementPrompts => "Schedule Trigger",
            StepTemplate::ShortsRepurposing => "FFmpeg",
        }
    }

    /// Base duration in minutes, before automation-level adjustment.
    pub fn base_duration_minutes(&self) -> u32 {
        match self {
            StepTemplate::TrendScouting => 25,
            StepTemplate::MetadataSync => 15,
            StepTemplate::AiScripting => 35,
            StepTemplate::AssetHandoff => 20,
            StepTemplate::SponsorMatching => 30,
            StepTemplate::DeliverableTracking => 15,
            StepTemplate::CommentIntelligence => 25,
            StepTemplate::EngagementPrompts => 15,
            StepTemplate::ShortsRepurposing => 20,
        }
    }

    /// Whether the step can be AI-led at all.
    pub fn ai_capable(&self) -> bool {
        match self {
            StepTemplate::TrendScouting
            | StepTemplate::AiScripting
            | StepTemplate::SponsorMatching
            | StepTemplate::CommentIntelligence
            | StepTemplate::EngagementPrompts
            | StepTemplate::ShortsRepurposing => true,
            StepTemplate::MetadataSync
            | StepTemplate::AssetHandoff
            | StepTemplate::DeliverableTracking => false,
        }
    }

    /// Whether the step stays AI-led even in assist mode. Assist mode is
    /// human-led with AI research, so only the research steps qualify.
    pub fn ai_in_assist(&self) -> bool {
        matches!(
            self,
            StepTemplate::TrendScouting | StepTemplate::CommentIntelligence
        )
    }

    /// Declared dependencies on other templates. Edges to templates that
    /// are not instantiated are dropped at build time, so cross-goal
    /// references here are safe.
    pub fn dependencies(&self) -> &'static [StepTemplate] {
        match self {
            StepTemplate::TrendScouting => &[],
            StepTemplate::MetadataSync => &[StepTemplate::TrendScouting, StepTemplate::AiScripting],
            StepTemplate::AiScripting => &[StepTemplate::TrendScouting],
            StepTemplate::AssetHandoff => &[StepTemplate::AiScripting],
            StepTemplate::SponsorMatching => &[StepTemplate::TrendScouting],
            StepTemplate::DeliverableTracking => &[StepTemplate::SponsorMatching],
            StepTemplate::CommentIntelligence => &[],
            StepTemplate::EngagementPrompts => {
                &[StepTemplate::CommentIntelligence, StepTemplate::AiScripting]
            }
            StepTemplate::ShortsRepurposing => &[StepTemplate::AssetHandoff],
        }
    }

    /// Artifact names the step produces.
    pub fn outputs(&self) -> &'static [&'static str] {
        match self {
            StepTemplate::TrendScouting => &["trend report", "topic shortlist"],
            StepTemplate::MetadataSync => &["titles", "tags", "thumbnail brief"],
            StepTemplate::AiScripting => &["script draft", "b-roll list"],
            StepTemplate::AssetHandoff => &["asset folder", "edit brief"],
            StepTemplate::SponsorMatching => &["sponsor shortlist", "CTA placements"],
            StepTemplate::DeliverableTracking => &["deliverable tracker"],
            StepTemplate::CommentIntelligence => &["sentiment digest", "reply queue"],
            StepTemplate::EngagementPrompts => &["community posts", "poll ideas"],
            StepTemplate::ShortsRepurposing => &["vertical clips", "hook overlays"],
        }
    }

    /// Suggested model label for the step's prompt. Only meaningful for
    /// AI-capable templates; never invoked by this library.
    pub fn prompt_model(&self) -> &'static str {
        match self {
            StepTemplate::AiScripting => "gpt-4o",
            _ => "gpt-4o-mini",
        }
    }

    /// Configuration field names (wire form) that feed the step's prompt.
    pub fn prompt_inputs(&self) -> &'static [&'static str] {
        match self {
            StepTemplate::TrendScouting => &["channelTopic", "tone", "cadencePerWeek"],
            StepTemplate::AiScripting => &["channelName", "channelTopic", "tone"],
            StepTemplate::SponsorMatching => &["channelTopic", "monetizationTarget"],
            StepTemplate::CommentIntelligence => &["channelName", "tone"],
            StepTemplate::EngagementPrompts => &["channelTopic", "tone"],
            StepTemplate::ShortsRepurposing => &["channelTopic", "tone"],
            StepTemplate::MetadataSync
            | StepTemplate::AssetHandoff
            | StepTemplate::DeliverableTracking => &[],
        }
    }
}
