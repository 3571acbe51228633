//! Timeline projection.
//!
//! Projects the step graph onto calendar-relative milestones. Steps are
//! walked in topological order (ties broken by emitted canonical order),
//! paced by a per-step stride that compresses as cadence rises. The
//! rollout always ends with a launch milestone, preceded by a review
//! checkpoint whenever a human is still in the loop.

use std::collections::HashMap;

use orbitflow_core::{AutomationLevel, CadenceLabel, ChannelConfig, Milestone, PipelineStep};
use tracing::debug;

/// Project the pipeline onto a milestone sequence.
pub fn project_timeline(
    steps: &[PipelineStep],
    config: &ChannelConfig,
    cadence_label: CadenceLabel,
) -> Vec<Milestone> {
    let order = topological_order(steps);
    let stride = stride_days(config);

    let mut timeline: Vec<Milestone> = Vec::with_capacity(order.len() + 2);
    for (position, &index) in order.iter().enumerate() {
        let step = &steps[index];
        timeline.push(Milestone {
            id: format!("m-{}", step.id),
            title: step.title.clone(),
            eta: eta_label(position as u32 * stride),
            details: step.description.clone(),
        });
    }

    let mut next_slot = order.len() as u32;
    if config.automation_level.requires_review() {
        timeline.push(Milestone {
            id: "m-review".to_string(),
            title: "Review Checkpoint".to_string(),
            eta: eta_label(next_slot * stride),
            details: "Walk the pipeline end to end and sign off on output quality before launch."
                .to_string(),
        });
        next_slot += 1;
    }

    timeline.push(Milestone {
        id: "m-launch".to_string(),
        title: "Pipeline Launch".to_string(),
        eta: eta_label(next_slot * stride),
        details: format!(
            "Go live on a {} cadence; first automated publish at {}.",
            cadence_label,
            config.preferred_publish_time.format("%H:%M"),
        ),
    });

    debug!(milestones = timeline.len(), stride_days = stride, "timeline projected");
    timeline
}

/// Days between consecutive milestones. Higher cadence compresses the
/// rollout; assist mode adds a day of human slack per slot.
fn stride_days(config: &ChannelConfig) -> u32 {
    let base = (7 / config.cadence_per_week.max(1) as u32).max(1);
    if config.automation_level == AutomationLevel::Assist {
        base + 1
    } else {
        base
    }
}

/// Relative offset label for a day count.
fn eta_label(day: u32) -> String {
    if day < 7 {
        format!("Day {day}")
    } else {
        format!("Week {}", day / 7)
    }
}

/// Kahn's algorithm over the emitted edges; ready steps are taken in
/// emitted order so the result is stable across calls.
fn topological_order(steps: &[PipelineStep]) -> Vec<usize> {
    let index: HashMap<&str, usize> = steps
        .iter()
        .enumerate()
        .map(|(i, step)| (step.id.as_str(), i))
        .collect();

    let mut indegree: Vec<usize> = steps.iter().map(|step| step.dependencies.len()).collect();
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); steps.len()];
    for (i, step) in steps.iter().enumerate() {
        for dep in &step.dependencies {
            dependents[index[dep.as_str()]].push(i);
        }
    }

    let mut emitted = vec![false; steps.len()];
    let mut order = Vec::with_capacity(steps.len());
    while order.len() < steps.len() {
        // Acyclicity is validated upstream, so a ready step always exists.
        let next = (0..steps.len())
            .find(|&i| !emitted[i] && indegree[i] == 0)
            .expect("validated step graph cannot deadlock");
        emitted[next] = true;
        order.push(next);
        for &dependent in &dependents[next] {
            indegree[dependent] -= 1;
        }
    }
    order
}
