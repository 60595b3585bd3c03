use anyhow::Result;
use av_cost_model::config::Config;
use av_cost_model::summary::save_summary;
use av_cost_model::CostCatalog;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Execute the export command
pub fn execute(
    cfg: &Config,
    catalog: Arc<CostCatalog>,
    select: &[String],
    output: Option<PathBuf>,
    stdout: bool,
) -> Result<()> {
    let session = super::session_with_selection(catalog, select);
    let text = session.export_summary();

    if stdout {
        print!("{}", text);
        return Ok(());
    }

    let path = output.unwrap_or_else(|| cfg.export.output_path());
    save_summary(&path, &text)?;

    println!(
        "{} {}",
        "✓ Cost summary written to".green(),
        path.display()
    );
    Ok(())
}
