//! Registry catalog listing

use crate::config::EngineConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use risk_lib::classifier::ArtifactCache;
use risk_lib::registry::DiseaseRegistry;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Row for the catalog table
#[derive(Tabled)]
struct ModelRow {
    #[tabled(rename = "Disease")]
    disease: String,
    #[tabled(rename = "Artifact")]
    artifact: String,
    #[tabled(rename = "Inputs")]
    inputs: usize,
    #[tabled(rename = "Features")]
    features: String,
}

/// Row for the catalog table with artifact status
#[derive(Tabled)]
struct CheckedModelRow {
    #[tabled(rename = "Disease")]
    disease: String,
    #[tabled(rename = "Artifact")]
    artifact: String,
    #[tabled(rename = "Inputs")]
    inputs: usize,
    #[tabled(rename = "Status")]
    status: String,
}

#[derive(Serialize)]
struct CheckedCatalogEntry {
    name: &'static str,
    artifact_ref: &'static str,
    feature_names: &'static [&'static str],
    status: String,
}

pub fn run(config: &EngineConfig, check: bool, format: OutputFormat) -> Result<()> {
    if check {
        run_check(config, format)
    } else {
        run_list(format)
    }
}

fn run_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let catalog: Vec<_> = DiseaseRegistry::catalog().collect();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Table => {
            let rows: Vec<ModelRow> = DiseaseRegistry::catalog()
                .map(|entry| ModelRow {
                    disease: entry.name.to_string(),
                    artifact: entry.artifact_ref.to_string(),
                    inputs: entry.feature_names.len(),
                    features: entry.feature_names.join(", "),
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }
    Ok(())
}

/// Load every artifact through the cache and report its status without
/// running an analysis.
fn run_check(config: &EngineConfig, format: OutputFormat) -> Result<()> {
    let mut cache = ArtifactCache::with_model_dir(&config.model_dir);

    let statuses: Vec<(String, Option<usize>)> = DiseaseRegistry::catalog()
        .map(|entry| match cache.load(entry.artifact_ref) {
            Ok(classifier) => ("ok".to_string(), Some(classifier.input_arity())),
            Err(err) => (err.to_string(), None),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let checked: Vec<_> = DiseaseRegistry::catalog()
                .zip(&statuses)
                .map(|(entry, (status, _))| CheckedCatalogEntry {
                    name: entry.name,
                    artifact_ref: entry.artifact_ref,
                    feature_names: entry.feature_names,
                    status: status.clone(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&checked)?);
        }
        OutputFormat::Table => {
            let rows: Vec<CheckedModelRow> = DiseaseRegistry::catalog()
                .zip(&statuses)
                .map(|(entry, (status, arity))| CheckedModelRow {
                    disease: entry.name.to_string(),
                    artifact: entry.artifact_ref.to_string(),
                    inputs: entry.feature_names.len(),
                    status: match arity {
                        Some(arity) => format!("{} (arity {})", "ok".green(), arity),
                        None => status.red().to_string(),
                    },
                })
                .collect();
            let table = Table::new(rows).with(Style::rounded()).to_string();
            println!("{}", table);
        }
    }
    Ok(())
}
