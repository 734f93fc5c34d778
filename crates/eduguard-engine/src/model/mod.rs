//! Pre-trained risk classifier
//!
//! A small ensemble of binary decision trees plus a per-feature min-max
//! scaler, loaded once at startup from JSON artifacts produced by the
//! offline trainer. The model is immutable for the process lifetime; no
//! retraining path exists at request time.

pub mod artifact;
pub mod classifier;

pub use artifact::{Forest, Scaler, TreeNode};
pub use classifier::{Classifier, ForestClassifier, StubClassifier};

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 5;
