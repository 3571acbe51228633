//! Content-pack derivation.
//!
//! All text here is produced by template substitution over configuration
//! fields and rule-table lookups; nothing is generated by a model. The
//! operator-note scan is an ordered table of (keyword, advisory) pairs
//! matched case-insensitively by substring: each keyword fires at most
//! once, and any number of distinct keywords may fire together.

use orbitflow_core::{AutomationLevel, CadenceLabel, ChannelConfig, PipelineStep, PromptTemplate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::StepTemplate;

/// Keyword-triggered advisory notes, scanned in order.
const OPERATOR_NOTE_RULES: &[(&str, &str)] = &[
    (
        "sponsor",
        "Sponsored segments detected in notes: enable the disclosure checklist before any sponsored upload goes out.",
    ),
    (
        "compliance",
        "Compliance constraints noted: route every script through review before the publish step.",
    ),
    (
        "brand",
        "Brand guidelines referenced: pin the brand kit to the asset handoff so edits stay on-style.",
    ),
    (
        "burnout",
        "Capacity concerns noted: batch record ahead of schedule and keep the cadence one notch below maximum.",
    ),
    (
        "collab",
        "Collaborators mentioned: add a shared approval slot so external partners never block the pipeline.",
    ),
];

/// Derived textual content for a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPack {
    pub headline: String,
    pub summary: String,
    pub prompts: Vec<PromptTemplate>,
    pub hook_ideas: Vec<String>,
    pub operator_notes: Vec<String>,
}

/// Derive headline, summary, prompt pack, hooks, and operator notes.
pub fn derive_content(
    config: &ChannelConfig,
    steps: &[PipelineStep],
    cadence_label: CadenceLabel,
) -> ContentPack {
    let prompts: Vec<PromptTemplate> = steps
        .iter()
        .filter(|step| step.ai_involved)
        .filter_map(|step| {
            StepTemplate::from_id(&step.id).map(|template| PromptTemplate {
                id: format!("prompt-{}", step.id),
                title: format!("{} Prompt", step.title),
                model: template.prompt_model().to_string(),
                instructions: prompt_instructions(template, config),
                input_schema: template
                    .prompt_inputs()
                    .iter()
                    .map(|field| field.to_string())
                    .collect(),
            })
        })
        .collect();

    let hook_ideas = if config.include_shorts {
        hook_ideas(config)
    } else {
        Vec::new()
    };

    let operator_notes = operator_notes(&config.notes);

    debug!(
        prompts = prompts.len(),
        hooks = hook_ideas.len(),
        notes = operator_notes.len(),
        "content pack derived"
    );

    ContentPack {
        headline: headline(config),
        summary: summary(config, steps, cadence_label),
        prompts,
        hook_ideas,
        operator_notes,
    }
}

fn headline(config: &ChannelConfig) -> String {
    let name = &config.channel_name;
    let topic = &config.channel_topic;
    match config.automation_level {
        AutomationLevel::Assist => format!("{name}: an AI research desk for {topic}"),
        AutomationLevel::Hybrid => format!("{name}: a human-reviewed automation pipeline for {topic}"),
        AutomationLevel::Autopilot => format!("{name} on autopilot: an end-to-end {topic} engine"),
    }
}

fn summary(config: &ChannelConfig, steps: &[PipelineStep], cadence_label: CadenceLabel) -> String {
    let count = steps.len();
    let tone = config.tone;
    let topic = &config.channel_topic;
    match config.automation_level {
        AutomationLevel::Assist => format!(
            "You stay hands-on while {count} automated research steps keep the {tone} {topic} pipeline fed on a {cadence_label} rhythm."
        ),
        AutomationLevel::Hybrid => format!(
            "{count} pipeline steps run automatically with a human review gate before anything ships, holding a {cadence_label} {tone} cadence for {topic}."
        ),
        AutomationLevel::Autopilot => format!(
            "All {count} steps orchestrate end to end with guardrails, sustaining a {cadence_label} {tone} cadence for {topic}."
        ),
    }
}

fn prompt_instructions(template: StepTemplate, config: &ChannelConfig) -> String {
    let name = &config.channel_name;
    let topic = &config.channel_topic;
    let tone = config.tone;
    match template {
        StepTemplate::TrendScouting => format!(
            "Research current {topic} trends and return a ranked shortlist of ten video topics with demand notes, written for a {tone} channel publishing {} times weekly.",
            config.cadence_per_week
        ),
        StepTemplate::AiScripting => format!(
            "Write a full video script for {name} on the chosen {topic} topic in a {tone} voice, with a cold-open hook, chapter beats, and b-roll callouts."
        ),
        StepTemplate::SponsorMatching => format!(
            "Shortlist sponsors relevant to a {topic} audience and draft one CTA per sponsor that supports the {} goal.",
            config.monetization_target
        ),
        StepTemplate::CommentIntelligence => format!(
            "Cluster new comments on {name} by sentiment and intent, then draft replies in the channel's {tone} voice for the top thread in each cluster."
        ),
        StepTemplate::EngagementPrompts => format!(
            "Draft three community posts and one poll about {topic} in a {tone} voice, each designed to surface ideas for future uploads."
        ),
        StepTemplate::ShortsRepurposing => format!(
            "Pick the three strongest moments from the latest {topic} upload and write a {tone} hook line under ten words for each vertical clip."
        ),
        // Human-led templates carry no prompt; kept for exhaustiveness.
        StepTemplate::MetadataSync
        | StepTemplate::AssetHandoff
        | StepTemplate::DeliverableTracking => String::new(),
    }
}

fn hook_ideas(config: &ChannelConfig) -> Vec<String> {
    let topic = &config.channel_topic;
    let tone = config.tone;
    vec![
        format!("The {tone} take on {topic} nobody else is making"),
        format!("What creators keep getting wrong about {topic}"),
        format!("60 seconds of {topic}, {tone} edition"),
    ]
}

fn operator_notes(notes: &str) -> Vec<String> {
    let haystack = notes.to_lowercase();
    OPERATOR_NOTE_RULES
        .iter()
        .filter(|(keyword, _)| haystack.contains(keyword))
        .map(|(_, advisory)| advisory.to_string())
        .collect()
}
