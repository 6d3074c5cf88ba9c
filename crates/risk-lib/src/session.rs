//! Per-session analysis state
//!
//! One instance per user session with a single logical writer, passed
//! explicitly to whoever reads or mutates it. No ambient globals.

use crate::models::RiskResult;

/// Which diseases the last analysis flagged, and which one is open in the
/// detail view. Reset and repopulated on every analysis trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    detected_diseases: Vec<String>,
    selected_disease: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the session and repopulate the detected list from an analysis
    /// run, preserving result order. Idempotent for identical inputs.
    pub fn start_analysis(&mut self, results: &[RiskResult]) {
        self.detected_diseases.clear();
        self.selected_disease = None;
        self.detected_diseases
            .extend(results.iter().map(|r| r.disease.clone()));
    }

    /// Open a flagged disease in the detail view.
    ///
    /// Selecting a disease the last analysis did not flag is a no-op: the
    /// previous selection is neither cleared nor overwritten. Returns
    /// whether the selection changed.
    pub fn select(&mut self, disease: &str) -> bool {
        if self.is_detected(disease) {
            self.selected_disease = Some(disease.to_string());
            true
        } else {
            false
        }
    }

    pub fn detected_diseases(&self) -> &[String] {
        &self.detected_diseases
    }

    pub fn selected_disease(&self) -> Option<&str> {
        self.selected_disease.as_deref()
    }

    pub fn is_detected(&self, disease: &str) -> bool {
        self.detected_diseases.iter().any(|d| d == disease)
    }
}
