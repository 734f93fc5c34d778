//! Classifier adapter
//!
//! `Classifier` is the seam between the scoring pipeline and the model:
//! the pipeline depends on `predict`, not on the artifact format, so
//! tests can run against a stub without any artifact on disk.

use crate::error::Result;
use crate::model::artifact::{Forest, Scaler};
use crate::model::FEATURE_COUNT;
use std::path::Path;
use tracing::debug;

/// Maps a raw feature vector to a fraud probability in [0, 1].
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64;
}

/// Ensemble-vote classifier over a loaded forest and scaler.
pub struct ForestClassifier {
    forest: Forest,
    scaler: Scaler,
}

impl ForestClassifier {
    pub fn new(forest: Forest, scaler: Scaler) -> Self {
        Self { forest, scaler }
    }

    /// Load both artifacts from disk. Fatal on a missing or corrupt
    /// file; callers invoke this once at startup.
    pub fn load(model_path: impl AsRef<Path>, scaler_path: impl AsRef<Path>) -> Result<Self> {
        let forest = Forest::load(model_path)?;
        let scaler = Scaler::load(scaler_path)?;
        Ok(Self::new(forest, scaler))
    }

    /// Number of trees in the ensemble.
    pub fn tree_count(&self) -> usize {
        self.forest.trees.len()
    }
}

impl Classifier for ForestClassifier {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let scaled = self.scaler.scale(features);
        debug!(?scaled, "scaled features sent to model");

        let fraud_votes = self
            .forest
            .trees
            .iter()
            .filter(|tree| tree.vote(&scaled) == 1)
            .count();
        let probability = fraud_votes as f64 / self.forest.trees.len() as f64;

        debug!(
            fraud_votes,
            total_trees = self.forest.trees.len(),
            probability,
            "ensemble vote complete"
        );
        probability
    }
}

/// Fixed-score classifier for pipeline tests.
pub struct StubClassifier {
    score: f64,
}

impl StubClassifier {
    pub fn new(score: f64) -> Self {
        Self { score }
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> f64 {
        self.score
    }
}
