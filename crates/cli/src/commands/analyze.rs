//! Risk analysis command
//!
//! One invocation is one full synchronous analysis pass: build the registry
//! from the entered profile, score every disease, update the session, and
//! render from the session.

use crate::config::EngineConfig;
use crate::output::{self, OutputFormat};
use crate::AnalyzeArgs;
use anyhow::{Context, Result};
use risk_lib::classifier::ArtifactCache;
use risk_lib::evaluator::{EvaluatorConfig, LoadFailurePolicy, RiskEvaluator};
use risk_lib::info;
use risk_lib::models::{HealthProfile, RiskResult};
use risk_lib::registry::DiseaseRegistry;
use risk_lib::session::SessionState;
use serde::Serialize;
use std::fs;
use tracing::debug;

/// Full analysis output for JSON mode
#[derive(Serialize)]
struct AnalysisReport<'a> {
    generated_at: i64,
    flagged: &'a [RiskResult],
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<DetailView<'a>>,
}

#[derive(Serialize)]
struct DetailView<'a> {
    disease: &'a str,
    causes: &'static str,
    prevention: &'static str,
    diet: &'static str,
}

pub fn run(config: &EngineConfig, args: AnalyzeArgs, format: OutputFormat) -> Result<()> {
    let profile = load_profile(&args)?;
    let registry = DiseaseRegistry::from_profile(&profile);
    let mut cache = ArtifactCache::with_model_dir(&config.model_dir);

    let on_load_failure = if args.strict || config.strict {
        LoadFailurePolicy::Abort
    } else {
        LoadFailurePolicy::Skip
    };
    let evaluator = RiskEvaluator::with_config(EvaluatorConfig {
        on_load_failure,
        ..EvaluatorConfig::default()
    });

    debug!(model_dir = %config.model_dir.display(), "Starting analysis");
    let results = evaluator.evaluate(&registry, &mut cache)?;

    let mut session = SessionState::new();
    session.start_analysis(&results);

    if let Some(disease) = &args.detail {
        if !session.select(disease) {
            output::print_warning(&format!(
                "'{}' was not flagged by this analysis; detail view unchanged",
                disease
            ));
        }
    }

    let detail = session
        .selected_disease()
        .and_then(|name| info::lookup(name).map(|entry| (name, entry)));

    match format {
        OutputFormat::Json => {
            let report = AnalysisReport {
                generated_at: chrono::Utc::now().timestamp(),
                flagged: &results,
                detail: detail.map(|(disease, entry)| DetailView {
                    disease,
                    causes: entry.causes,
                    prevention: entry.prevention,
                    diet: entry.diet,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            if results.is_empty() {
                output::print_all_clear();
            } else {
                for result in &results {
                    output::print_risk_card(&result.disease, result.risk_percent, result.tier);
                }
            }
            if let Some((disease, entry)) = detail {
                output::print_info_box(disease, entry);
            }
            output::print_disclaimer();
        }
    }

    Ok(())
}

/// Build the profile from a JSON file or from the measurement flags. The
/// flags are guaranteed present by clap when no profile file is given.
fn load_profile(args: &AnalyzeArgs) -> Result<HealthProfile> {
    if let Some(path) = &args.profile {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        let profile: HealthProfile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse profile {}", path.display()))?;
        return Ok(profile);
    }

    Ok(HealthProfile {
        age: args.age.context("missing --age")?,
        gender: args.gender.context("missing --gender")?,
        bmi: args.bmi.context("missing --bmi")?,
        sleep_hours: args.sleep.context("missing --sleep")?,
        screen_time_hours: args.screen.context("missing --screen")?,
        stress_level: args.stress.context("missing --stress")?,
        activity_level: args.activity.context("missing --activity")?,
        water_intake_glasses: args.water.context("missing --water")?,
        fatigue_level: args.fatigue.context("missing --fatigue")?,
        sun_exposure: args.sun.context("missing --sun")?,
        hydration_level: args.hydration.context("missing --hydration")?,
        diabetes_risk_score: args.diabetes_score.context("missing --diabetes-score")?,
        anemia: args.anemia.context("missing --anemia")?,
    })
}
