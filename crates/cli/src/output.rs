//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;
use risk_lib::info::DiseaseInfo;
use risk_lib::models::RiskTier;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Render one flagged-risk card
pub fn print_risk_card(disease: &str, risk_percent: f32, tier: RiskTier) {
    println!(
        "[{}] {}  estimated risk {}",
        tier_badge(tier),
        disease.bold(),
        color_percent(risk_percent, tier)
    );
}

/// Render the affirmation card shown when nothing is flagged
pub fn print_all_clear() {
    println!(
        "{} {}",
        "✓".green().bold(),
        "No major health risks detected. Maintain a healthy lifestyle and regular checkups."
    );
}

/// Render the educational info box for a selected disease
pub fn print_info_box(disease: &str, info: &DiseaseInfo) {
    println!();
    println!("{}", disease.bold().underline());
    println!("  {} {}", "Causes:".bold(), info.causes);
    println!("  {} {}", "Preventive tips:".bold(), info.prevention);
    println!("  {} {}", "Recommended diet:".bold(), info.diet);
}

pub fn print_disclaimer() {
    println!();
    println!(
        "{}",
        "Educational purpose only, not a medical diagnosis.".dimmed()
    );
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

fn tier_badge(tier: RiskTier) -> String {
    match tier {
        RiskTier::High => "HIGH".red().bold().to_string(),
        RiskTier::Medium => "MEDIUM".yellow().bold().to_string(),
        RiskTier::Ok => "OK".green().bold().to_string(),
    }
}

/// Color a risk percentage by its tier
pub fn color_percent(risk_percent: f32, tier: RiskTier) -> String {
    let formatted = format!("{:.2}%", risk_percent);
    match tier {
        RiskTier::High => formatted.red().to_string(),
        RiskTier::Medium => formatted.yellow().to_string(),
        RiskTier::Ok => formatted.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_formatting_keeps_two_decimals() {
        colored::control::set_override(false);
        assert_eq!(color_percent(81.0, RiskTier::High), "81.00%");
        assert_eq!(color_percent(40.5, RiskTier::Medium), "40.50%");
        colored::control::unset_override();
    }
}
