//! Serialized model artifacts
//!
//! The forest and scaler are plain JSON files. Loading is fatal on a
//! missing or unparseable artifact: a process without a model must not
//! serve risk-scoring requests.

use crate::error::{EngineError, Result};
use crate::model::FEATURE_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// One node of a binary decision tree.
///
/// Split nodes route `value <= threshold` left, otherwise right; leaf
/// nodes carry the class vote (1 = fraud).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        class: u8,
    },
}

impl TreeNode {
    /// Walk the tree for one scaled feature vector and return the vote.
    pub fn vote(&self, features: &[f64; FEATURE_COUNT]) -> u8 {
        match self {
            TreeNode::Leaf { class } => *class,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                // Out-of-range feature indices vote non-fraud rather
                // than panicking; the artifact validator rejects them
                // at load time.
                let value = features.get(*feature).copied().unwrap_or(0.0);
                if value <= *threshold {
                    left.vote(features)
                } else {
                    right.vote(features)
                }
            }
        }
    }

    fn max_feature_index(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => (*feature)
                .max(left.max_feature_index())
                .max(right.max_feature_index()),
        }
    }
}

/// The serialized tree ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<TreeNode>,
}

impl Forest {
    /// Load and validate a forest from a JSON artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ModelLoad(format!("cannot read model file {}: {}", path.display(), e))
        })?;
        let forest: Forest = serde_json::from_str(&raw).map_err(|e| {
            EngineError::ModelLoad(format!("cannot parse model file {}: {}", path.display(), e))
        })?;
        forest.validate()?;

        info!(trees = forest.trees.len(), "fraud detection model loaded");
        Ok(forest)
    }

    fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(EngineError::ModelLoad("model has no trees".to_string()));
        }
        for tree in &self.trees {
            if tree.max_feature_index() >= FEATURE_COUNT {
                return Err(EngineError::ModelLoad(format!(
                    "tree references feature index {} (have {} features)",
                    tree.max_feature_index(),
                    FEATURE_COUNT
                )));
            }
        }
        Ok(())
    }
}

/// Per-feature min-max scaler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl Scaler {
    /// Load and validate a scaler from a JSON artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ModelLoad(format!("cannot read scaler file {}: {}", path.display(), e))
        })?;
        let scaler: Scaler = serde_json::from_str(&raw).map_err(|e| {
            EngineError::ModelLoad(format!("cannot parse scaler file {}: {}", path.display(), e))
        })?;
        scaler.validate()?;

        info!("normalization scaler loaded");
        Ok(scaler)
    }

    fn validate(&self) -> Result<()> {
        if self.min.len() != FEATURE_COUNT || self.max.len() != FEATURE_COUNT {
            return Err(EngineError::ModelLoad(format!(
                "scaler expects {} features, got min={} max={}",
                FEATURE_COUNT,
                self.min.len(),
                self.max.len()
            )));
        }
        Ok(())
    }

    /// Min-max scale one feature vector, clamping into [0, 1].
    /// A degenerate feature (`max == min`) scales to 0.
    pub fn scale(&self, features: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (i, value) in features.iter().enumerate() {
            let (min, max) = (self.min[i], self.max[i]);
            scaled[i] = if max - min == 0.0 {
                0.0
            } else {
                ((value - min) / (max - min)).clamp(0.0, 1.0)
            };
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn leaf(class: u8) -> TreeNode {
        TreeNode::Leaf { class }
    }

    fn split(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[test]
    fn test_tree_vote_routing() {
        let tree = split(0, 0.5, leaf(0), leaf(1));

        assert_eq!(tree.vote(&[0.0, 0.0, 0.0, 0.0, 0.0]), 0);
        assert_eq!(tree.vote(&[0.5, 0.0, 0.0, 0.0, 0.0]), 0); // <= goes left
        assert_eq!(tree.vote(&[1.0, 0.0, 0.0, 0.0, 0.0]), 1);
    }

    #[test]
    fn test_tree_node_json_roundtrip() {
        let tree = split(4, 0.5, split(0, 0.5, leaf(0), leaf(1)), leaf(1));
        let json = serde_json::to_string(&tree).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }

    #[test]
    fn test_scaler_scales_and_clamps() {
        let scaler = Scaler {
            min: vec![0.0, 0.0, 0.0, 0.0, 0.0],
            max: vec![1.0, 10.0, 1.0, 30.0, 1.0],
        };

        let scaled = scaler.scale(&[1.0, 5.0, 2.0, -3.0, 0.0]);
        assert_eq!(scaled[0], 1.0);
        assert_eq!(scaled[1], 0.5);
        assert_eq!(scaled[2], 1.0); // clamped high
        assert_eq!(scaled[3], 0.0); // clamped low
    }

    #[test]
    fn test_scaler_degenerate_feature_scales_to_zero() {
        let scaler = Scaler {
            min: vec![3.0, 0.0, 0.0, 0.0, 0.0],
            max: vec![3.0, 1.0, 1.0, 1.0, 1.0],
        };

        let scaled = scaler.scale(&[7.0, 0.5, 0.0, 0.0, 0.0]);
        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    fn test_forest_load_missing_file_is_fatal() {
        let err = Forest::load("/nonexistent/fraud_model.json").unwrap_err();
        assert!(err.to_string().contains("Model load error"));
    }

    #[test]
    fn test_forest_load_rejects_corrupt_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = Forest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("cannot parse"));
    }

    #[test]
    fn test_forest_load_rejects_empty_ensemble() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trees": []}}"#).unwrap();

        let err = Forest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("no trees"));
    }

    #[test]
    fn test_forest_load_rejects_bad_feature_index() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"trees": [{{"feature": 9, "threshold": 0.5, "left": {{"class": 0}}, "right": {{"class": 1}}}}]}}"#
        )
        .unwrap();

        let err = Forest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("feature index 9"));
    }

    #[test]
    fn test_scaler_load_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"min": [0, 0.5, 0, 1, 0], "max": [1, 11, 0.12, 30, 1]}}"#
        )
        .unwrap();

        let scaler = Scaler::load(file.path()).unwrap();
        assert_eq!(scaler.min[1], 0.5);
        assert_eq!(scaler.max[3], 30.0);
    }

    #[test]
    fn test_scaler_load_rejects_wrong_arity() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"min": [0, 0], "max": [1, 1]}}"#).unwrap();

        let err = Scaler::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("expects 5 features"));
    }
}
