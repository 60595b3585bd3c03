//! Plain-text cost summary export
//!
//! Rendering is pure and deterministic for a given date. Writing the text to
//! disk is the separate `save_summary` step.

use crate::catalog::CostCatalog;
use crate::error::CostModelError;
use crate::format::format_money;
use crate::selection::SelectionState;
use chrono::{Local, NaiveDate};
use std::fmt::Write;
use std::path::Path;
use tracing::{debug, info};

/// File name used when a summary is saved
pub const SUMMARY_FILENAME: &str = "av_proving_ground_cost_summary.txt";

const TITLE: &str = "AV Digital Proving Ground - Cost Summary";
const ADDITIONAL_HEADING: &str = "Additional Considerations:";

/// Render the summary dated today
pub fn export_summary(catalog: &CostCatalog, selection: &SelectionState) -> String {
    export_summary_at(catalog, selection, Local::now().date_naive())
}

/// Render the summary with an explicit generation date
pub fn export_summary_at(
    catalog: &CostCatalog,
    selection: &SelectionState,
    generated_on: NaiveDate,
) -> String {
    let mut out = String::new();

    // Writing into a String never fails
    let _ = writeln!(out, "{}", TITLE);
    let _ = writeln!(out, "{}", "=".repeat(37));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Base Cost Breakdown (${}):",
        catalog.base_total()
    );
    let _ = writeln!(out, "{}", "-".repeat(27));

    for component in catalog.base_costs() {
        let _ = writeln!(
            out,
            "{}: {} ({}%)",
            component.name,
            format_money(component.cost),
            component.percentage
        );
    }

    if !selection.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", ADDITIONAL_HEADING);
        let _ = writeln!(out, "{}", "-".repeat(25));

        for consideration in selection.resolve(catalog) {
            let _ = writeln!(
                out,
                "{}: +${}",
                consideration.name, consideration.incremental_cost
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total Cost: {}",
        format_money(selection.grand_total(catalog))
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated on: {}", generated_on.format("%-m/%-d/%Y"));

    debug!(
        selected = selection.len(),
        bytes = out.len(),
        "Rendered cost summary"
    );

    out
}

/// Save rendered summary text, creating the parent directory if needed
pub fn save_summary(path: &Path, text: &str) -> Result<(), CostModelError> {
    let to_export_error = |source| CostModelError::Export {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_export_error)?;
    }
    std::fs::write(path, text).map_err(to_export_error)?;

    info!("Saved cost summary to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 7).unwrap()
    }

    #[test]
    fn test_empty_selection_has_no_additional_section() {
        let catalog = CostCatalog::builtin();
        let summary = export_summary_at(&catalog, &SelectionState::new(), date());

        assert!(summary.starts_with("AV Digital Proving Ground - Cost Summary\n"));
        assert!(summary.contains("Base Cost Breakdown ($100):\n"));
        assert!(!summary.contains(ADDITIONAL_HEADING));
        assert!(summary.contains("Total Cost: $100.00\n"));
        assert!(summary.ends_with("Generated on: 3/7/2026\n"));
    }

    #[test]
    fn test_base_lines_in_catalog_order() {
        let catalog = CostCatalog::builtin();
        let summary = export_summary_at(&catalog, &SelectionState::new(), date());

        let first = summary
            .find("Cloud Computing (AWS/Azure): $25.00 (25%)")
            .unwrap();
        let last = summary.find("Remaining Balance: $3.00 (3%)").unwrap();
        assert!(first < last);
        assert_eq!(
            summary.lines().filter(|l| l.contains(": $")).count(),
            catalog.base_costs().len() + 1
        );
    }

    #[test]
    fn test_selected_items_listed_in_selection_order() {
        let catalog = CostCatalog::builtin();
        let mut selection = SelectionState::new();
        selection.toggle("Machine Learning Model Training");
        selection.toggle("Data Ingress from Vehicles");

        let summary = export_summary_at(&catalog, &selection, date());

        assert_eq!(summary.matches(ADDITIONAL_HEADING).count(), 1);
        let ml = summary.find("Machine Learning Model Training: +$200\n").unwrap();
        let ingress = summary.find("Data Ingress from Vehicles: +$50\n").unwrap();
        assert!(ml < ingress);
        assert!(summary.contains("Total Cost: $350.00\n"));
    }

    #[test]
    fn test_unknown_selection_is_omitted() {
        let catalog = CostCatalog::builtin();
        let mut selection = SelectionState::new();
        selection.toggle("Quantum Annealing");

        let summary = export_summary_at(&catalog, &selection, date());

        assert!(summary.contains(ADDITIONAL_HEADING));
        assert!(!summary.contains("Quantum Annealing"));
        assert!(summary.contains("Total Cost: $100.00\n"));
    }

    #[test]
    fn test_save_summary_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join(SUMMARY_FILENAME);

        save_summary(&path, "hello\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_save_summary_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let result = save_summary(dir.path(), "x");

        match result {
            Err(CostModelError::Export { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("Expected export error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_summary_uses_today() {
        let catalog = CostCatalog::builtin();
        let summary = export_summary(&catalog, &SelectionState::new());
        let today = Local::now().date_naive().format("%-m/%-d/%Y").to_string();

        assert!(summary.contains(&today));
    }
}
