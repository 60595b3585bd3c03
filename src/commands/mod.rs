//! Command implementations for the CLI
//!
//! - catalog: Print catalog tables
//! - breakdown: Base cost breakdown with bars and insights
//! - estimate: Scaling calculator
//! - totals: Totals for a selection
//! - export: Write the plain-text summary
//! - session: Interactive session over stdin
//! - config: Configuration display and validation

pub mod breakdown;
pub mod catalog;
pub mod config;
pub mod estimate;
pub mod export;
pub mod session;
pub mod totals;

use av_cost_model::{CostCatalog, CostSession};
use colored::Colorize;
use std::sync::Arc;

/// Start a session and toggle each requested consideration into it
///
/// Entries may be names or 1-based positions in the considerations list.
pub fn session_with_selection(catalog: Arc<CostCatalog>, select: &[String]) -> CostSession {
    let mut session = CostSession::new(catalog);

    for entry in select {
        let name = session.resolve_consideration_name(entry);
        if session.catalog().find_consideration(&name).is_none() {
            eprintln!(
                "{} '{}' is not in the catalog and adds no cost",
                "warning:".yellow().bold(),
                name
            );
        }
        session.toggle_consideration(&name);
    }

    session
}
