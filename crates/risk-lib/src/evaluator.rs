//! Risk evaluation over the disease registry
//!
//! Walks the registry in insertion order, scores each entry with its bound
//! classifier, and emits only the flagged (medium or high tier) results.
//! Entries whose feature count disagrees with the classifier's input arity
//! are skipped silently.

use crate::classifier::{probability_to_percent, ArtifactCache, ArtifactError};
use crate::models::{RiskResult, RiskTier};
use crate::registry::DiseaseRegistry;
use thiserror::Error;
use tracing::{debug, warn};

/// Flagging floor: results below this percentage are dropped
pub const MEDIUM_RISK_PERCENT: f32 = 40.0;

/// High-tier floor
pub const HIGH_RISK_PERCENT: f32 = 70.0;

/// What to do when a classifier artifact cannot be loaded or scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadFailurePolicy {
    /// Skip the entry and keep evaluating the rest
    #[default]
    Skip,
    /// Abort the whole run
    Abort,
}

/// Configuration for the risk evaluator
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Floor for flagging a result at all
    pub medium_percent: f32,
    /// Floor for the high tier
    pub high_percent: f32,
    pub on_load_failure: LoadFailurePolicy,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            medium_percent: MEDIUM_RISK_PERCENT,
            high_percent: HIGH_RISK_PERCENT,
            on_load_failure: LoadFailurePolicy::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn classify(&self, risk_percent: f32) -> RiskTier {
        if risk_percent >= self.high_percent {
            RiskTier::High
        } else if risk_percent >= self.medium_percent {
            RiskTier::Medium
        } else {
            RiskTier::Ok
        }
    }
}

/// Error aborting an evaluation run under `LoadFailurePolicy::Abort`
#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error("failed to load classifier for {disease}")]
    ArtifactLoad {
        disease: String,
        #[source]
        source: ArtifactError,
    },

    #[error("classifier for {disease} failed to score its features: {message}")]
    Prediction { disease: String, message: String },
}

/// Scores every registry entry and collects the flagged diseases
#[derive(Debug, Clone, Default)]
pub struct RiskEvaluator {
    config: EvaluatorConfig,
}

impl RiskEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate the registry in order and return exactly the flagged
    /// diseases, preserving registry order. Ok-tier results are dropped.
    pub fn evaluate(
        &self,
        registry: &DiseaseRegistry,
        cache: &mut ArtifactCache,
    ) -> Result<Vec<RiskResult>, EvaluateError> {
        let mut flagged = Vec::new();

        for entry in registry.entries() {
            let classifier = match cache.load(entry.artifact_ref) {
                Ok(classifier) => classifier,
                Err(source) => match self.config.on_load_failure {
                    LoadFailurePolicy::Skip => {
                        warn!(
                            disease = entry.name,
                            error = %source,
                            "Classifier unavailable, skipping disease"
                        );
                        continue;
                    }
                    LoadFailurePolicy::Abort => {
                        return Err(EvaluateError::ArtifactLoad {
                            disease: entry.name.to_string(),
                            source,
                        });
                    }
                },
            };

            if entry.features.len() != classifier.input_arity() {
                debug!(
                    disease = entry.name,
                    features = entry.features.len(),
                    expected = classifier.input_arity(),
                    "Feature count disagrees with classifier input, skipping"
                );
                continue;
            }

            let probability = match classifier.predict_probability(entry.features.as_slice()) {
                Ok(probability) => probability,
                Err(source) => match self.config.on_load_failure {
                    LoadFailurePolicy::Skip => {
                        warn!(
                            disease = entry.name,
                            error = %source,
                            "Classifier failed to score, skipping disease"
                        );
                        continue;
                    }
                    LoadFailurePolicy::Abort => {
                        return Err(EvaluateError::Prediction {
                            disease: entry.name.to_string(),
                            message: format!("{:#}", source),
                        });
                    }
                },
            };

            let risk_percent = probability_to_percent(probability);
            let tier = self.config.classify(risk_percent);
            debug!(disease = entry.name, risk_percent, tier = ?tier, "Disease scored");

            if tier.is_flagged() {
                flagged.push(RiskResult {
                    disease: entry.name.to_string(),
                    risk_percent,
                    tier,
                });
            }
        }

        Ok(flagged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ArtifactLoader, Classifier};
    use crate::models::{Gender, HealthProfile, YesNo};
    use anyhow::Result;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Arc;

    struct ScriptedClassifier {
        arity: usize,
        probability: f32,
    }

    impl Classifier for ScriptedClassifier {
        fn input_arity(&self) -> usize {
            self.arity
        }

        fn predict_probability(&self, features: &[f32]) -> Result<f32> {
            assert_eq!(features.len(), self.arity);
            Ok(self.probability)
        }
    }

    /// Maps artifact refs to (arity, probability); unknown refs fail to load
    struct ScriptedLoader {
        scripts: HashMap<&'static str, (usize, f32)>,
    }

    impl ArtifactLoader for ScriptedLoader {
        fn load(&self, artifact_ref: &str) -> Result<Arc<dyn Classifier>, ArtifactError> {
            match self.scripts.get(artifact_ref) {
                Some((arity, probability)) => Ok(Arc::new(ScriptedClassifier {
                    arity: *arity,
                    probability: *probability,
                })),
                None => Err(ArtifactError::NotFound {
                    reference: artifact_ref.to_string(),
                    path: PathBuf::from(artifact_ref),
                }),
            }
        }
    }

    fn scripted_cache(scripts: &[(&'static str, usize, f32)]) -> ArtifactCache {
        let scripts = scripts
            .iter()
            .map(|(r, arity, p)| (*r, (*arity, *p)))
            .collect();
        ArtifactCache::new(Box::new(ScriptedLoader { scripts }))
    }

    fn test_profile() -> HealthProfile {
        HealthProfile {
            age: 45,
            gender: Gender::Male,
            bmi: 32.0,
            sleep_hours: 5,
            screen_time_hours: 10,
            stress_level: 8,
            activity_level: 2,
            water_intake_glasses: 3,
            fatigue_level: 9,
            sun_exposure: 2,
            hydration_level: 3,
            diabetes_risk_score: 70,
            anemia: YesNo::No,
        }
    }

    #[test]
    fn test_high_risk_is_flagged() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[("diabetes.onnx", 4, 0.81)]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].disease, "Diabetes");
        assert_eq!(results[0].risk_percent, 81.0);
        assert_eq!(results[0].tier, RiskTier::High);
    }

    #[test]
    fn test_below_floor_is_dropped() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[("diabetes.onnx", 4, 0.39)]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_tier_boundaries() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.classify(39.99), RiskTier::Ok);
        assert_eq!(config.classify(40.0), RiskTier::Medium);
        assert_eq!(config.classify(69.99), RiskTier::Medium);
        assert_eq!(config.classify(70.0), RiskTier::High);
        assert_eq!(config.classify(100.0), RiskTier::High);
    }

    #[test]
    fn test_exact_boundary_probabilities() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[
            ("diabetes.onnx", 4, 0.40),
            ("hypertension.onnx", 2, 0.70),
        ]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].disease, "Diabetes");
        assert_eq!(results[0].tier, RiskTier::Medium);
        assert_eq!(results[1].disease, "Hypertension");
        assert_eq!(results[1].tier, RiskTier::High);
    }

    #[test]
    fn test_arity_mismatch_is_skipped_silently() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        // Diabetes extracts 4 features but the artifact expects 6
        let mut cache = scripted_cache(&[
            ("diabetes.onnx", 6, 0.99),
            ("hypertension.onnx", 2, 0.55),
        ]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].disease, "Hypertension");
        assert_eq!(results[0].tier, RiskTier::Medium);
    }

    #[test]
    fn test_registry_order_is_preserved_in_output() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[
            ("kidney.onnx", 5, 0.9),
            ("hypertension.onnx", 2, 0.5),
            ("anemia.onnx", 8, 0.75),
        ]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();
        let names: Vec<_> = results.iter().map(|r| r.disease.as_str()).collect();

        assert_eq!(names, vec!["Hypertension", "Anemia", "Chronic Kidney Disease"]);
    }

    #[test]
    fn test_missing_artifacts_skip_by_default() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[("hypertension.onnx", 2, 0.5)]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].disease, "Hypertension");
    }

    #[test]
    fn test_missing_artifact_aborts_under_strict_policy() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[]);
        let evaluator = RiskEvaluator::with_config(EvaluatorConfig {
            on_load_failure: LoadFailurePolicy::Abort,
            ..EvaluatorConfig::default()
        });

        let err = evaluator.evaluate(&registry, &mut cache).unwrap_err();
        match err {
            EvaluateError::ArtifactLoad { disease, .. } => assert_eq!(disease, "Diabetes"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_entries_unavailable_yields_empty_output() {
        // Output matches an all-healthy run; the two are not distinguished
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let mut cache = scripted_cache(&[]);

        let results = RiskEvaluator::new().evaluate(&registry, &mut cache).unwrap();
        assert!(results.is_empty());
    }
}
