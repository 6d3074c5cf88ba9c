//! Core data models for the risk engine

use serde::{Deserialize, Serialize};

/// Gender as encoded for the classifiers (female = 0, male = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_feature(self) -> f32 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

/// Yes/no answer as encoded for the classifiers (no = 0, yes = 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub fn as_feature(self) -> f32 {
        match self {
            YesNo::No => 0.0,
            YesNo::Yes => 1.0,
        }
    }
}

/// All lifestyle and biometric measurements for one analysis run.
///
/// Closed input ranges (age 15-100, BMI 10.0-50.0, the 0/1-10 scales) are
/// enforced by the input surface, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    pub age: u8,
    pub gender: Gender,
    pub bmi: f32,
    pub sleep_hours: u8,
    pub screen_time_hours: u8,
    pub stress_level: u8,
    pub activity_level: u8,
    pub water_intake_glasses: u8,
    pub fatigue_level: u8,
    pub sun_exposure: u8,
    pub hydration_level: u8,
    pub diabetes_risk_score: u8,
    pub anemia: YesNo,
}

/// Ordered numeric inputs for one classifier.
///
/// Length and order are fixed per disease; vectors are only produced by the
/// registry's extraction functions, never assembled ad hoc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

/// Risk tier derived from a classifier's positive-class probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Below the flagging floor; dropped from analysis output
    Ok,
    Medium,
    High,
}

impl RiskTier {
    /// Medium and High results are kept; Ok results are dropped
    pub fn is_flagged(self) -> bool {
        matches!(self, RiskTier::Medium | RiskTier::High)
    }
}

/// One flagged risk from an analysis run. Transient, not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    pub disease: String,
    /// In [0, 100], rounded to two decimal places
    pub risk_percent: f32,
    pub tier: RiskTier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_input_encodings() {
        assert_eq!(Gender::Female.as_feature(), 0.0);
        assert_eq!(Gender::Male.as_feature(), 1.0);
        assert_eq!(YesNo::No.as_feature(), 0.0);
        assert_eq!(YesNo::Yes.as_feature(), 1.0);
    }

    #[test]
    fn test_tier_flagging() {
        assert!(!RiskTier::Ok.is_flagged());
        assert!(RiskTier::Medium.is_flagged());
        assert!(RiskTier::High.is_flagged());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let json = r#"{
            "age": 45,
            "gender": "male",
            "bmi": 32.0,
            "sleep_hours": 5,
            "screen_time_hours": 10,
            "stress_level": 8,
            "activity_level": 2,
            "water_intake_glasses": 3,
            "fatigue_level": 9,
            "sun_exposure": 2,
            "hydration_level": 3,
            "diabetes_risk_score": 70,
            "anemia": "no"
        }"#;

        let profile: HealthProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.age, 45);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.anemia, YesNo::No);

        let back = serde_json::to_string(&profile).unwrap();
        let again: HealthProfile = serde_json::from_str(&back).unwrap();
        assert_eq!(again.diabetes_risk_score, 70);
        assert_eq!(again.bmi, 32.0);
    }

    #[test]
    fn test_feature_vector_accessors() {
        let v = FeatureVector::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }
}
