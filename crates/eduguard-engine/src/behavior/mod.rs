//! Behavioral feature extraction
//!
//! Converts raw keystroke/paste/timing telemetry into the first four
//! fields of the classifier's feature vector. Pure and deterministic:
//! no side effects, no error conditions. Division by zero is defined to
//! yield 0 rather than an error.

use eduguard_core::{BehavioralFeatures, BehavioralSample};
use tracing::debug;

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive behavioral features from one telemetry sample.
///
/// `key_press_speed` is keys per second, 0 when either the time or the
/// count is non-positive; `error_rate` is corrections per key press, 0
/// when there were no key presses; `paste_flag` is 1 iff any paste
/// occurred. Float outputs are rounded to two decimal places.
pub fn extract(sample: &BehavioralSample) -> BehavioralFeatures {
    let key_press_speed = if sample.total_time_seconds > 0.0 && sample.key_press_count > 0 {
        f64::from(sample.key_press_count) / sample.total_time_seconds
    } else {
        0.0
    };

    let error_rate = if sample.key_press_count > 0 {
        f64::from(sample.error_count) / f64::from(sample.key_press_count)
    } else {
        0.0
    };

    let features = BehavioralFeatures {
        paste_flag: u8::from(sample.paste_count > 0),
        key_press_speed: round2(key_press_speed),
        error_rate: round2(error_rate),
        time_to_complete: round2(sample.total_time_seconds),
    };

    debug!(?features, "behavioral features computed");
    features
}
