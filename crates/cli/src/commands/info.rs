//! Educational reference command

use crate::output::{self, OutputFormat};
use anyhow::Result;
use risk_lib::info;
use risk_lib::registry::DiseaseRegistry;
use serde::Serialize;

#[derive(Serialize)]
struct InfoView<'a> {
    disease: &'a str,
    causes: &'static str,
    prevention: &'static str,
    diet: &'static str,
}

pub fn run(disease: &str, format: OutputFormat) -> Result<()> {
    let Some(entry) = info::lookup(disease) else {
        output::print_error(&format!("no reference text for '{}'", disease));
        let known: Vec<_> = DiseaseRegistry::disease_names().collect();
        anyhow::bail!("unknown disease '{}'; known diseases: {}", disease, known.join(", "));
    };

    match format {
        OutputFormat::Json => {
            let view = InfoView {
                disease,
                causes: entry.causes,
                prevention: entry.prevention,
                diet: entry.diet,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Table => {
            output::print_info_box(disease, entry);
            output::print_disclaimer();
        }
    }

    Ok(())
}
