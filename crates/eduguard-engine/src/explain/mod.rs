//! Rule-based explanation generator
//!
//! Produces the human-readable rationale attached to each assessment.
//! Rules are an ordered table of (predicate, renderer) pairs evaluated
//! in priority order: primary indicators (paste, geographic jump) frame
//! the event with high confidence on their own; secondary combination
//! indicators only apply once the score is already past the suspicion
//! threshold. The output is advisory text only and never feeds back
//! into the score or the suspicious flag.

use eduguard_core::{BehavioralFeatures, BehavioralSample, GeoOutcome, SUSPICION_THRESHOLD};

/// Everything the rules may inspect for one assessment.
pub struct ExplanationInput<'a> {
    pub score: f64,
    pub sample: &'a BehavioralSample,
    pub features: &'a BehavioralFeatures,
    pub geo: &'a GeoOutcome,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tier {
    Primary,
    Secondary,
}

struct Rule {
    tier: Tier,
    applies: fn(&ExplanationInput) -> bool,
    render: fn(&ExplanationInput) -> String,
}

/// Ordered by priority; within a tier, matched reasons are joined.
const RULES: &[Rule] = &[
    Rule {
        tier: Tier::Primary,
        applies: |input| input.features.paste_flag == 1,
        render: |_| {
            "data was pasted into the form, a strong indicator of automated activity".to_string()
        },
    },
    Rule {
        tier: Tier::Primary,
        applies: |input| input.geo.is_inconsistent,
        render: |input| match distance_from_reason(&input.geo.reason) {
            Some(km) => format!(
                "a significant geographic jump of approximately {:.0} km was detected",
                km
            ),
            None => {
                "a significant geographic jump from the last known location was detected"
                    .to_string()
            }
        },
    },
    Rule {
        tier: Tier::Secondary,
        applies: |input| {
            input.features.time_to_complete < 5.0 && input.sample.key_press_count > 10
        },
        render: |_| "the submission was completed much faster than average".to_string(),
    },
    Rule {
        tier: Tier::Secondary,
        applies: |input| input.features.key_press_speed > 10.0 && input.sample.key_press_count > 20,
        render: |_| "the typing speed was significantly faster than a typical user".to_string(),
    },
    Rule {
        tier: Tier::Secondary,
        applies: |input| input.features.error_rate > 0.25 && input.sample.key_press_count > 20,
        render: |_| "a high rate of corrections were made".to_string(),
    },
];

const NORMAL_TEXT: &str =
    "Behavioral patterns appear normal and consistent with a genuine user.";

const FALLBACK_TEXT: &str = "The AI model detected a combination of subtle behavioral patterns \
     that deviate from the norm. A manual review is recommended.";

/// Pull the distance figure out of a geo reason string, if it cites one.
/// The "unable to verify" reason carries no figure.
fn distance_from_reason(reason: &str) -> Option<f64> {
    reason
        .split_whitespace()
        .find_map(|token| token.parse::<f64>().ok())
}

fn matched(input: &ExplanationInput, tier: Tier) -> Vec<String> {
    RULES
        .iter()
        .filter(|rule| rule.tier == tier && (rule.applies)(input))
        .map(|rule| (rule.render)(input))
        .collect()
}

/// Generate the rationale for one assessment. Deterministic.
pub fn generate(input: &ExplanationInput) -> String {
    let primary = matched(input, Tier::Primary);
    if !primary.is_empty() {
        return format!(
            "This event was flagged with high confidence because {}.",
            primary.join(" and ")
        );
    }

    if input.score <= SUSPICION_THRESHOLD {
        return NORMAL_TEXT.to_string();
    }

    let secondary = matched(input, Tier::Secondary);
    if !secondary.is_empty() {
        return format!(
            "This event was flagged for review because {}.",
            secondary.join(", and ")
        );
    }

    FALLBACK_TEXT.to_string()
}
