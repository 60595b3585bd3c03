use anyhow::Result;
use av_cost_model::format::format_money;
use av_cost_model::{CostCatalog, CostSession};
use colored::Colorize;
use serde_json::json;
use std::sync::Arc;

/// Execute the totals command
pub fn execute(catalog: Arc<CostCatalog>, select: &[String], json: bool) -> Result<()> {
    let session = super::session_with_selection(catalog, select);

    if json {
        let body = json!({
            "selected": session.selection().names().collect::<Vec<_>>(),
            "totals": session.get_totals(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_totals(&session);
    Ok(())
}

pub fn print_totals(session: &CostSession) {
    let catalog = session.catalog();
    let totals = session.get_totals();

    if session.selection().is_empty() {
        println!("{}", "No additional considerations selected".dimmed());
    } else {
        println!("{}", "Selected:".bold());
        for name in session.selection().names() {
            match catalog.find_consideration(name) {
                Some(c) => println!("  {} {}", format!("+${}", c.incremental_cost).cyan(), c.name),
                None => println!("  {} {}", "+$0".dimmed(), name.dimmed()),
            }
        }
    }
    println!();
    println!("  {}: {}", "Base".cyan(), format_money(catalog.base_total()));
    println!(
        "  {}: {}",
        "Additional".cyan(),
        format_money(totals.additional_total)
    );
    println!(
        "  {}: {}",
        "Total".green().bold(),
        format_money(totals.grand_total).bold()
    );
}
