//! Static educational reference text, keyed by disease name

use serde::Serialize;

/// Educational text for one condition. Immutable reference data with no
/// lifecycle; not a diagnosis.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiseaseInfo {
    pub causes: &'static str,
    pub prevention: &'static str,
    pub diet: &'static str,
}

const INFO: &[(&str, DiseaseInfo)] = &[
    (
        "Diabetes",
        DiseaseInfo {
            causes: "Insulin resistance, obesity, sedentary lifestyle, genetics.",
            prevention: "Regular exercise, weight management, balanced diet.",
            diet: "Whole grains, vegetables, low-sugar foods.",
        },
    ),
    (
        "Hypertension",
        DiseaseInfo {
            causes: "High salt intake, stress, obesity, inactivity.",
            prevention: "Low salt diet, exercise, stress control.",
            diet: "Leafy greens, bananas, oats, low-fat dairy.",
        },
    ),
    (
        "Dyslipidemia",
        DiseaseInfo {
            causes: "Unhealthy diet, lack of exercise, smoking, genetics.",
            prevention: "Physical activity, healthy fats, avoid smoking.",
            diet: "Fruits, vegetables, nuts, omega-3 rich foods.",
        },
    ),
    (
        "Anemia",
        DiseaseInfo {
            causes: "Iron deficiency, poor nutrition, blood loss.",
            prevention: "Iron-rich foods, vitamin supplementation.",
            diet: "Spinach, beetroot, legumes, dates.",
        },
    ),
    (
        "Vitamin D Deficiency",
        DiseaseInfo {
            causes: "Low sun exposure, poor diet.",
            prevention: "Sunlight exposure, supplements.",
            diet: "Milk, eggs, fatty fish.",
        },
    ),
    (
        "Early Cardiovascular Risk",
        DiseaseInfo {
            causes: "Poor lifestyle, diabetes, stress.",
            prevention: "Exercise, healthy diet, stress management.",
            diet: "Low-fat foods, fruits, whole grains.",
        },
    ),
    (
        "Chronic Kidney Disease",
        DiseaseInfo {
            causes: "Diabetes, hypertension, dehydration.",
            prevention: "Hydration, BP control, healthy lifestyle.",
            diet: "Low sodium foods, controlled protein intake.",
        },
    ),
];

/// Look up the educational text for a disease by its display name
pub fn lookup(disease: &str) -> Option<&'static DiseaseInfo> {
    INFO.iter()
        .find(|(name, _)| *name == disease)
        .map(|(_, info)| info)
}
