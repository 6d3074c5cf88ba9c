//! Disease model registry
//!
//! Fixed, ordered mapping from disease name to the classifier artifact that
//! scores it and the profile fields that feed it, in model input order.
//! Built once per analysis from a hardcoded table; construction cannot fail.
//! Missing artifact files are the classifier adapter's concern.

use crate::models::{FeatureVector, HealthProfile};
use serde::Serialize;

/// One row of the hardcoded registry table
struct RegistryRow {
    name: &'static str,
    artifact_ref: &'static str,
    feature_names: &'static [&'static str],
    extract: fn(&HealthProfile) -> FeatureVector,
}

/// The seven registered diseases, in display and evaluation order.
/// Feature order within each entry is the order the bound classifier was
/// trained with; the extraction functions below pin it at compile time.
const DISEASES: &[RegistryRow] = &[
    RegistryRow {
        name: "Diabetes",
        artifact_ref: "diabetes.onnx",
        feature_names: &["bmi", "screen_time_hours", "fatigue_level", "age"],
        extract: diabetes_features,
    },
    RegistryRow {
        name: "Hypertension",
        artifact_ref: "hypertension.onnx",
        feature_names: &["stress_level", "sleep_hours"],
        extract: hypertension_features,
    },
    RegistryRow {
        name: "Dyslipidemia",
        artifact_ref: "dyslipidemia.onnx",
        feature_names: &["fatigue_level", "hydration_level", "activity_level"],
        extract: dyslipidemia_features,
    },
    RegistryRow {
        name: "Anemia",
        artifact_ref: "anemia.onnx",
        feature_names: &[
            "age",
            "gender",
            "bmi",
            "sleep_hours",
            "stress_level",
            "activity_level",
            "water_intake_glasses",
            "fatigue_level",
        ],
        extract: anemia_features,
    },
    RegistryRow {
        name: "Vitamin D Deficiency",
        artifact_ref: "vitamin_d.onnx",
        feature_names: &[
            "sun_exposure",
            "activity_level",
            "water_intake_glasses",
            "hydration_level",
        ],
        extract: vitamin_d_features,
    },
    RegistryRow {
        name: "Early Cardiovascular Risk",
        artifact_ref: "cardio.onnx",
        feature_names: &[
            "age",
            "bmi",
            "sleep_hours",
            "screen_time_hours",
            "stress_level",
            "activity_level",
            "fatigue_level",
            "hydration_level",
            "diabetes_risk_score",
            "anemia",
        ],
        extract: cardio_features,
    },
    RegistryRow {
        name: "Chronic Kidney Disease",
        artifact_ref: "kidney.onnx",
        feature_names: &[
            "hydration_level",
            "water_intake_glasses",
            "stress_level",
            "activity_level",
            "fatigue_level",
        ],
        extract: kidney_features,
    },
];

fn diabetes_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.bmi,
        p.screen_time_hours as f32,
        p.fatigue_level as f32,
        p.age as f32,
    ])
}

fn hypertension_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![p.stress_level as f32, p.sleep_hours as f32])
}

fn dyslipidemia_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.fatigue_level as f32,
        p.hydration_level as f32,
        p.activity_level as f32,
    ])
}

fn anemia_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.age as f32,
        p.gender.as_feature(),
        p.bmi,
        p.sleep_hours as f32,
        p.stress_level as f32,
        p.activity_level as f32,
        p.water_intake_glasses as f32,
        p.fatigue_level as f32,
    ])
}

fn vitamin_d_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.sun_exposure as f32,
        p.activity_level as f32,
        p.water_intake_glasses as f32,
        p.hydration_level as f32,
    ])
}

fn cardio_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.age as f32,
        p.bmi,
        p.sleep_hours as f32,
        p.screen_time_hours as f32,
        p.stress_level as f32,
        p.activity_level as f32,
        p.fatigue_level as f32,
        p.hydration_level as f32,
        p.diabetes_risk_score as f32,
        p.anemia.as_feature(),
    ])
}

fn kidney_features(p: &HealthProfile) -> FeatureVector {
    FeatureVector::new(vec![
        p.hydration_level as f32,
        p.water_intake_glasses as f32,
        p.stress_level as f32,
        p.activity_level as f32,
        p.fatigue_level as f32,
    ])
}

/// One registered disease bound to its artifact and the feature values
/// extracted from the current profile. Immutable for the analysis run.
#[derive(Debug, Clone)]
pub struct DiseaseEntry {
    pub name: &'static str,
    pub artifact_ref: &'static str,
    pub features: FeatureVector,
}

/// Static registry row, exposed without a profile for listings
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub artifact_ref: &'static str,
    pub feature_names: &'static [&'static str],
}

/// Ordered disease registry for one analysis run
#[derive(Debug, Clone)]
pub struct DiseaseRegistry {
    entries: Vec<DiseaseEntry>,
}

impl DiseaseRegistry {
    /// Build the registry from a profile, extracting each disease's feature
    /// vector. Entry order is the table's insertion order, stable.
    pub fn from_profile(profile: &HealthProfile) -> Self {
        let entries = DISEASES
            .iter()
            .map(|row| DiseaseEntry {
                name: row.name,
                artifact_ref: row.artifact_ref,
                features: (row.extract)(profile),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[DiseaseEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&DiseaseEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The static registry table (names, artifact refs, feature names),
    /// available without a profile.
    pub fn catalog() -> impl Iterator<Item = CatalogEntry> {
        DISEASES.iter().map(|row| CatalogEntry {
            name: row.name,
            artifact_ref: row.artifact_ref,
            feature_names: row.feature_names,
        })
    }

    /// Registered disease names, in registry order
    pub fn disease_names() -> impl Iterator<Item = &'static str> {
        DISEASES.iter().map(|row| row.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, YesNo};

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
    fn test_registry_order_is_stable() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let names: Vec<_> = registry.entries().iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Diabetes",
                "Hypertension",
                "Dyslipidemia",
                "Anemia",
                "Vitamin D Deficiency",
                "Early Cardiovascular Risk",
                "Chronic Kidney Disease",
            ]
        );
    }

    #[test]
    fn test_diabetes_feature_order() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let entry = registry.get("Diabetes").unwrap();
        assert_eq!(entry.artifact_ref, "diabetes.onnx");
        assert_eq!(entry.features.as_slice(), &[32.0, 10.0, 9.0, 45.0]);
    }

    #[test]
    fn test_anemia_feature_order() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let entry = registry.get("Anemia").unwrap();
        assert_eq!(
            entry.features.as_slice(),
            &[45.0, 1.0, 32.0, 5.0, 8.0, 2.0, 3.0, 9.0]
        );
    }

    #[test]
    fn test_cardio_includes_score_and_anemia_encoding() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        let entry = registry.get("Early Cardiovascular Risk").unwrap();
        let features = entry.features.as_slice();
        assert_eq!(features.len(), 10);
        assert_eq!(features[8], 70.0);
        assert_eq!(features[9], 0.0);
    }

    #[test]
    fn test_feature_lengths_match_feature_names() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        for (entry, catalog) in registry.entries().iter().zip(DiseaseRegistry::catalog()) {
            assert_eq!(entry.name, catalog.name);
            assert_eq!(
                entry.features.len(),
                catalog.feature_names.len(),
                "feature count mismatch for {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_get_unknown_disease() {
        let registry = DiseaseRegistry::from_profile(&test_profile());
        assert!(registry.get("Gout").is_none());
    }
}
