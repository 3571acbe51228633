//! Blueprint compilation entry point.
//!
//! `compile` is a pure function from a validated channel configuration to
//! a fully-populated blueprint. The four stages run strictly in sequence:
//! scoring, node-graph construction, timeline projection, content-pack
//! derivation. No stage re-invokes an earlier one, nothing is cached, and
//! identical input always yields byte-identical output.

use orbitflow_core::{Blueprint, ChannelConfig, Metric, PipelineStep, Result};
use tracing::{debug, info};

use crate::{content, graph, scoring, timeline};

/// Compile a channel configuration into an automation blueprint.
///
/// Returns a validation error when the configuration is rejected (the
/// only user-correctable failure) or an invariant violation if the step
/// catalog ever produces a cyclic graph. Partial results are never
/// returned.
pub fn compile(config: &ChannelConfig) -> Result<Blueprint> {
    config.validate()?;

    info!(channel = %config.channel_name, "compiling automation blueprint");

    // Stage 1: scoring.
    let (automation_score, cadence_label) = scoring::score(config);

    // Stage 2: node graph. Its output feeds both remaining stages.
    let steps = graph::build_steps(config)?;

    // Stage 3: timeline projection.
    let timeline = timeline::project_timeline(&steps, config, cadence_label);

    // Stage 4: content pack.
    let pack = content::derive_content(config, &steps, cadence_label);

    let metrics = build_metrics(config, automation_score, cadence_label.to_string(), &steps);

    debug!(
        steps = steps.len(),
        milestones = timeline.len(),
        prompts = pack.prompts.len(),
        score = automation_score,
        "blueprint compiled"
    );

    Ok(Blueprint {
        headline: pack.headline,
        summary: pack.summary,
        automation_score,
        cadence_label,
        metrics,
        steps,
        timeline,
        prompts: pack.prompts,
        hook_ideas: pack.hook_ideas,
        operator_notes: pack.operator_notes,
        webhook_url: config.webhook_url.clone(),
    })
}

/// Header metrics, fixed cardinality.
fn build_metrics(
    config: &ChannelConfig,
    score: u8,
    cadence_label: String,
    steps: &[PipelineStep],
) -> Vec<Metric> {
    let ai_led = steps.iter().filter(|step| step.ai_involved).count();
    let human_led = steps.len() - ai_led;

    vec![
        Metric {
            label: "Automation Score".to_string(),
            value: format!("{score}%"),
            helper: "How much of the pipeline runs without a human touch.".to_string(),
        },
        Metric {
            label: "Publish Cadence".to_string(),
            value: cadence_label,
            helper: format!("{} uploads per week", config.cadence_per_week),
        },
        Metric {
            label: "Pipeline Coverage".to_string(),
            value: format!("{} nodes", steps.len()),
            helper: format!("{ai_led} AI-led, {human_led} human-led"),
        },
    ]
}
