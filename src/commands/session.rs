//! Interactive session command
//!
//! Reads one command per line and keeps a single selection alive until
//! `quit` or end of input.

use anyhow::Result;
use av_cost_model::config::Config;
use av_cost_model::format::{format_currency, format_money, format_rate};
use av_cost_model::session::{SessionCommand, HELP_TEXT};
use av_cost_model::summary::save_summary;
use av_cost_model::{CostCatalog, CostSession};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::warn;

/// Execute the session command on stdin/stdout
pub fn execute(cfg: &Config, catalog: Arc<CostCatalog>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = CostSession::new(catalog);

    writeln!(
        stdout.lock(),
        "{}",
        "AV Digital Proving Ground cost session (type 'help' for commands)".green()
    )?;
    run(cfg, &mut session, stdin.lock(), stdout.lock())
}

pub fn run<R: BufRead, W: Write>(
    cfg: &Config,
    session: &mut CostSession,
    input: R,
    mut out: W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = e.kind(), "Rejected session input");
                writeln!(out, "{} {}", "error:".red().bold(), e)?;
                continue;
            }
        };

        match command {
            SessionCommand::List => {
                for (idx, c) in session.catalog().additional_considerations().iter().enumerate() {
                    let mark = if session.selection().is_selected(&c.name) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    writeln!(
                        out,
                        "{} {:>2}. {} (+${})",
                        mark,
                        idx + 1,
                        c.name,
                        c.incremental_cost
                    )?;
                }
            }
            SessionCommand::Toggle(entry) => {
                let name = session.resolve_consideration_name(&entry);
                let known = session.catalog().find_consideration(&name).is_some();
                let selected = session.toggle_consideration(&name).is_selected(&name);
                let state = if selected { "selected" } else { "deselected" };
                if known {
                    writeln!(out, "{} {}", name, state)?;
                } else {
                    writeln!(out, "{} {} (not in catalog, adds no cost)", name, state)?;
                }
                write_totals(&mut out, session)?;
            }
            SessionCommand::Selected => {
                if session.selection().is_empty() {
                    writeln!(out, "No additional considerations selected")?;
                }
                for name in session.selection().names() {
                    writeln!(out, "  {}", name)?;
                }
            }
            SessionCommand::Totals => write_totals(&mut out, session)?,
            SessionCommand::Estimate(params) => {
                let result = session.estimate(params);
                writeln!(
                    out,
                    "Monthly: {}  Hourly: {}  Annual: {}",
                    format_currency(result.monthly_cost as f64),
                    format_rate(result.hourly_rate),
                    format_currency(result.annual_cost as f64)
                )?;
            }
            SessionCommand::Export(path) => {
                let path = path.unwrap_or_else(|| cfg.export.output_path());
                match save_summary(&path, &session.export_summary()) {
                    Ok(()) => writeln!(out, "Cost summary written to {}", path.display())?,
                    Err(e) => writeln!(out, "{} {}", "error:".red().bold(), e)?,
                }
            }
            SessionCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            SessionCommand::Quit => break,
        }
    }

    out.flush()?;
    Ok(())
}

fn write_totals<W: Write>(out: &mut W, session: &CostSession) -> io::Result<()> {
    let totals = session.get_totals();
    writeln!(
        out,
        "Additional: {}  Total: {}",
        format_money(totals.additional_total),
        format_money(totals.grand_total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(cfg: &Config, script: &str) -> (CostSession, String) {
        let mut session = CostSession::new(Arc::new(CostCatalog::builtin()));
        let mut out = Vec::new();
        run(cfg, &mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_toggle_and_totals() {
        let (session, out) = run_script(
            &Config::default(),
            "toggle Machine Learning Model Training\ntoggle 1\ntotals\n",
        );

        assert_eq!(session.selection().len(), 2);
        assert!(out.contains("Additional: $250.00  Total: $350.00"));
    }

    #[test]
    fn test_quit_stops_processing() {
        let (session, _) = run_script(&Config::default(), "toggle 3\nquit\ntoggle 4\n");

        assert_eq!(session.selection().len(), 1);
        assert!(session.selection().is_selected("Multi-Region Deployment"));
    }

    #[test]
    fn test_bad_input_is_reported_not_fatal() {
        let (_, out) = run_script(
            &Config::default(),
            "fly away\nestimate 200 5 300\n",
        );

        assert!(out.contains("Invalid command"));
        assert!(out.contains("Monthly: $6,300  Hourly: $31.50  Annual: $75,600"));
    }

    #[test]
    fn test_unknown_name_is_selected_without_cost() {
        let (session, out) = run_script(&Config::default(), "toggle Quantum Annealing\n");

        assert!(session.selection().is_selected("Quantum Annealing"));
        assert!(out.contains("not in catalog"));
        assert!(out.contains("Total: $100.00"));
    }

    #[test]
    fn test_export_writes_to_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut cfg = Config::default();
        cfg.export.directory = dir.path().to_path_buf();

        run_script(&cfg, "toggle 2\nexport\n");

        let text = std::fs::read_to_string(cfg.export.output_path()).unwrap();
        assert!(text.contains("Machine Learning Model Training: +$200"));
        assert!(text.contains("Total Cost: $300.00"));
    }
}
