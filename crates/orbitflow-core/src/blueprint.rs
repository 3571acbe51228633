//! Blueprint output types.
//!
//! A `Blueprint` is the compiled automation plan for a channel: the
//! pipeline node map, rollout timeline, scoring metrics, AI prompt pack,
//! and advisory notes. It is a value object constructed fresh on every
//! compilation and serializes with the camelCase field names the external
//! automation platform imports.

use serde::{Deserialize, Serialize};

use crate::types::CadenceLabel;

/// A unit of work in the generated automation graph, analogous to a node
/// in the external workflow platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStep {
    /// Stable slug identifier, unique within the blueprint.
    pub id: String,

    /// Human-readable step title.
    pub title: String,

    /// What the step does and what it hands off.
    pub description: String,

    /// Estimated duration per run, in minutes.
    pub duration_minutes: u32,

    /// Node type to instantiate on the automation platform.
    pub platform_node_name: String,

    /// Whether the step is AI-led (true) or human-led (false).
    pub ai_involved: bool,

    /// Ids of steps that must run before this one. Always resolves
    /// within the same blueprint and never forms a cycle.
    pub dependencies: Vec<String>,

    /// Artifact names this step produces.
    pub outputs: Vec<String>,
}

impl PipelineStep {
    /// Returns true if this step depends on the given step id.
    pub fn depends_on(&self, id: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == id)
    }
}

/// A calendar-relative rollout milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Stable milestone identifier.
    pub id: String,

    /// Milestone title.
    pub title: String,

    /// Relative offset label, e.g. "Day 0" or "Week 2".
    pub eta: String,

    /// What happens at this milestone.
    pub details: String,
}

/// Instructions for one AI-involved step, ready to paste into the
/// platform's LLM connector node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptTemplate {
    /// Stable prompt identifier.
    pub id: String,

    /// Prompt title.
    pub title: String,

    /// Suggested model label. Never invoked by this library.
    pub model: String,

    /// The prompt instructions.
    pub instructions: String,

    /// Configuration field names that feed this prompt.
    pub input_schema: Vec<String>,
}

/// A single scoring metric for the blueprint header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub helper: String,
}

/// The compiled automation blueprint for a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    /// Short derived headline.
    pub headline: String,

    /// One-paragraph summary of the plan.
    pub summary: String,

    /// Automation-fit score, 0-100.
    pub automation_score: u8,

    /// Publish-frequency bucket.
    pub cadence_label: CadenceLabel,

    /// Header metrics, fixed cardinality.
    pub metrics: Vec<Metric>,

    /// Pipeline node map in canonical goal order.
    pub steps: Vec<PipelineStep>,

    /// Rollout timeline in chronological order.
    pub timeline: Vec<Milestone>,

    /// One prompt per AI-involved step.
    pub prompts: Vec<PromptTemplate>,

    /// Short-form hook suggestions; empty unless shorts repurposing was
    /// requested.
    pub hook_ideas: Vec<String>,

    /// Advisory notes triggered by the configuration's free-text notes.
    pub operator_notes: Vec<String>,

    /// The caller's webhook URL, carried verbatim and never invoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl Blueprint {
    /// Look up a step by id.
    pub fn step(&self, id: &str) -> Option<&PipelineStep> {
        self.steps.iter().find(|step| step.id == id)
    }

    /// All AI-led steps.
    pub fn ai_steps(&self) -> Vec<&PipelineStep> {
        self.steps.iter().filter(|step| step.ai_involved).collect()
    }

    /// Total estimated pipeline duration in minutes.
    pub fn total_duration_minutes(&self) -> u32 {
        self.steps.iter().map(|step| step.duration_minutes).sum()
    }
}
