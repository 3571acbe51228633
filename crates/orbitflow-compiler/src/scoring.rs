//! Automation-fit scoring and cadence classification.
//!
//! The score is a fixed weighted sum clamped to [0, 100]. The weights
//! below are the configuration-of-record:
//!
//! - automation level base: assist 20, hybrid 40, autopilot 55
//! - goal coverage: +8 per distinct goal for the first three, the
//!   fourth adds +4 (diminishing once the full set is selected)
//! - shorts repurposing bonus: +6
//! - cadence term: 3 x min(cadence, 7) - higher cadence means more
//!   automatable repetitive work

use orbitflow_core::{AutomationLevel, CadenceLabel, ChannelConfig};
use tracing::debug;

const LEVEL_BASE_ASSIST: u32 = 20;
const LEVEL_BASE_HYBRID: u32 = 40;
const LEVEL_BASE_AUTOPILOT: u32 = 55;
const GOAL_WEIGHT: u32 = 8;
const FOURTH_GOAL_WEIGHT: u32 = 4;
const SHORTS_BONUS: u32 = 6;
const CADENCE_WEIGHT: u32 = 3;
const CADENCE_CAP: u32 = 7;

/// Compute the automation-fit score and cadence label for a configuration.
pub fn score(config: &ChannelConfig) -> (u8, CadenceLabel) {
    let cadence_label = CadenceLabel::classify(config.cadence_per_week);

    let level_base = match config.automation_level {
        AutomationLevel::Assist => LEVEL_BASE_ASSIST,
        AutomationLevel::Hybrid => LEVEL_BASE_HYBRID,
        AutomationLevel::Autopilot => LEVEL_BASE_AUTOPILOT,
    };

    let goal_count = config.normalized_goals().len() as u32;
    let goal_term =
        goal_count.min(3) * GOAL_WEIGHT + if goal_count == 4 { FOURTH_GOAL_WEIGHT } else { 0 };

    let shorts_term = if config.include_shorts { SHORTS_BONUS } else { 0 };
    let cadence_term = CADENCE_WEIGHT * (config.cadence_per_week as u32).min(CADENCE_CAP);

    let raw = level_base + goal_term + shorts_term + cadence_term;
    let automation_score = raw.min(100) as u8;

    debug!(
        score = automation_score,
        cadence = %cadence_label,
        "scoring complete"
    );

    (automation_score, cadence_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitflow_core::Goal;

    fn config(level: AutomationLevel, cadence: u8, goals: &[Goal], shorts: bool) -> ChannelConfig {
        ChannelConfig::builder()
            .channel_name("Orbit Labs")
            .channel_topic("AI tools for creators")
            .automation_level(level)
            .cadence_per_week(cadence)
            .goals(goals.iter().copied())
            .include_shorts(shorts)
            .build()
            .unwrap()
    }

    #[test]
    fn test_cadence_label_thresholds() {
        let (_, label) = score(&config(AutomationLevel::Hybrid, 3, &[Goal::Community], false));
        assert_eq!(label, CadenceLabel::ThreeToFourWeekly);
        let (_, label) = score(&config(AutomationLevel::Hybrid, 5, &[Goal::Community], false));
        assert_eq!(label, CadenceLabel::Daily);
        let (_, label) = score(&config(AutomationLevel::Hybrid, 2, &[Goal::Community], false));
        assert_eq!(label, CadenceLabel::Weekly);
    }

    #[test]
    fn test_score_is_clamped_to_100() {
        // Max raw: 55 + 28 + 6 + 21 = 110.
        let (score, _) = score(&config(
            AutomationLevel::Autopilot,
            14,
            &Goal::CANONICAL,
            true,
        ));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_level_ordering_is_strict() {
        let goals = [Goal::AudienceGrowth];
        let (assist, _) = score(&config(AutomationLevel::Assist, 3, &goals, false));
        let (hybrid, _) = score(&config(AutomationLevel::Hybrid, 3, &goals, false));
        let (autopilot, _) = score(&config(AutomationLevel::Autopilot, 3, &goals, false));
        assert!(assist < hybrid);
        assert!(hybrid < autopilot);
    }

    #[test]
    fn test_fourth_goal_diminishes() {
        let base = |goals: &[Goal]| score(&config(AutomationLevel::Hybrid, 3, goals, false)).0;
        let one = base(&Goal::CANONICAL[..1]);
        let two = base(&Goal::CANONICAL[..2]);
        let three = base(&Goal::CANONICAL[..3]);
        let four = base(&Goal::CANONICAL);
        assert_eq!(two - one, 8);
        assert_eq!(three - two, 8);
        assert_eq!(four - three, 4);
    }

    #[test]
    fn test_duplicate_goals_do_not_inflate_score() {
        let deduped = score(&config(AutomationLevel::Hybrid, 3, &[Goal::Community], false)).0;
        let duplicated = score(&config(
            AutomationLevel::Hybrid,
            3,
            &[Goal::Community, Goal::Community, Goal::Community],
            false,
        ))
        .0;
        assert_eq!(deduped, duplicated);
    }

    #[test]
    fn test_cadence_term_caps_at_seven() {
        let goals = [Goal::AudienceGrowth];
        let (seven, _) = score(&config(AutomationLevel::Hybrid, 7, &goals, false));
        let (fourteen, _) = score(&config(AutomationLevel::Hybrid, 14, &goals, false));
        assert_eq!(seven, fourteen);
    }

    #[test]
    fn test_determinism() {
        let cfg = config(AutomationLevel::Hybrid, 4, &Goal::CANONICAL, true);
        assert_eq!(score(&cfg), score(&cfg));
    }
}
