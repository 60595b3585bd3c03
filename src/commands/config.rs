use anyhow::Result;
use av_cost_model::config::{self, Config};
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults)
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
///
/// Loading already validated the configuration; this reports the summary.
pub fn validate(cfg: &Config, path: &Path) {
    let source = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Source".cyan(), source);
    println!(
        "  {}: {} ({})",
        "Logging".cyan(),
        cfg.logging.level,
        cfg.logging.format
    );
    println!(
        "  {}: {}",
        "Export Path".cyan(),
        cfg.export.output_path().display()
    );
    println!(
        "  {}: {} hours, {} users, {} GB",
        "Calculator Defaults".cyan(),
        cfg.calculator.hours,
        cfg.calculator.users,
        cfg.calculator.data_gb
    );
    println!("  {}: {}__<SECTION>__<KEY>", "Env Overrides".cyan(), config::ENV_PREFIX);

    info!("Configuration validation successful");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trips_through_toml() {
        let cfg = Config::default();
        let text = toml::to_string_pretty(&cfg).unwrap();

        assert!(text.contains("[calculator]"));
        assert!(text.contains("filename = \"av_proving_ground_cost_summary.txt\""));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }
}
