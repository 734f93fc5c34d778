//! Behavioral telemetry types
//!
//! Raw keystroke/paste/timing counters captured during form entry, and
//! the feature values derived from them.

use serde::{Deserialize, Serialize};

/// Raw behavioral telemetry for one signup/login attempt.
///
/// Produced by the form UI and consumed exactly once per attempt. Counts
/// are not validated beyond what the types enforce; nonsensical values
/// (e.g. zero time with many key presses) flow through the derivation
/// guards unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralSample {
    /// Number of key presses during form entry
    pub key_press_count: u32,
    /// Number of paste events during form entry
    pub paste_count: u32,
    /// Number of corrections (backspace/delete) during form entry
    pub error_count: u32,
    /// Wall-clock time spent on the form, in seconds
    pub total_time_seconds: f64,
}

/// Features derived from a [`BehavioralSample`].
///
/// All rates are non-negative and rounded to two decimal places;
/// division by zero is defined to yield 0, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralFeatures {
    /// 1 if any paste event occurred, 0 otherwise
    pub paste_flag: u8,
    /// Key presses per second (0 when time or count is 0)
    pub key_press_speed: f64,
    /// Corrections per key press (0 when there are no key presses)
    pub error_rate: f64,
    /// Total time to complete the form, in seconds
    pub time_to_complete: f64,
}

impl BehavioralFeatures {
    /// Assemble the 5-element feature vector consumed by the classifier:
    /// `[paste_flag, key_press_speed, error_rate, time_to_complete, ip_flag]`.
    pub fn to_vector(&self, ip_inconsistent: bool) -> [f64; 5] {
        [
            f64::from(self.paste_flag),
            self.key_press_speed,
            self.error_rate,
            self.time_to_complete,
            if ip_inconsistent { 1.0 } else { 0.0 },
        ]
    }
}
