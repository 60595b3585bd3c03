use crate::cli::CatalogSection;
use anyhow::Result;
use av_cost_model::format::{format_grouped, format_money, tooltip_label};
use av_cost_model::CostCatalog;
use colored::Colorize;

/// Execute the catalog command
pub fn execute(catalog: &CostCatalog, section: Option<CatalogSection>, json: bool) -> Result<()> {
    if json {
        let value = match section {
            None => serde_json::to_value(catalog.snapshot())?,
            Some(CatalogSection::Base) => serde_json::to_value(catalog.base_costs())?,
            Some(CatalogSection::Scenarios) => serde_json::to_value(catalog.scenarios())?,
            Some(CatalogSection::Considerations) => {
                serde_json::to_value(catalog.additional_considerations())?
            }
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let show = |s: CatalogSection| section.map_or(true, |wanted| wanted == s);

    if show(CatalogSection::Base) {
        println!("{}", "Base Costs:".green().bold());
        for component in catalog.base_costs() {
            println!(
                "  {:<46} {}",
                tooltip_label(&component.name, component.cost, catalog.base_total()),
                component.description.dimmed()
            );
        }
        println!();
    }

    if show(CatalogSection::Scenarios) {
        println!("{}", "Scaling Scenarios:".green().bold());
        for scenario in catalog.scenarios() {
            println!(
                "  {:<36} {:>8} {:>12}  {}",
                scenario.label,
                format!("${}", format_grouped(scenario.monthly_cost.round() as u64)),
                format!("{}/hour", format_money(scenario.hourly_rate)),
                scenario.dominant_driver.dimmed()
            );
        }
        println!();
    }

    if show(CatalogSection::Considerations) {
        println!("{}", "Additional Considerations:".green().bold());
        for (idx, consideration) in catalog.additional_considerations().iter().enumerate() {
            println!(
                "  {:>2}. {:<40} {:>6}  {}",
                idx + 1,
                consideration.name,
                format!("+${}", consideration.incremental_cost),
                consideration.description.dimmed()
            );
        }
        println!();
    }

    Ok(())
}
