//! Interactive cost session
//!
//! A `CostSession` is the context a presentation layer talks to. It owns the
//! selection for one user session and shares the immutable catalog. Nothing
//! here is global: a session is created empty and dropped when it ends.

use crate::catalog::{CatalogSnapshot, CostCatalog};
use crate::error::CostModelError;
use crate::estimator::{self, CostEstimate, UsageParameters};
use crate::selection::{SelectionState, Totals};
use crate::summary;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct CostSession {
    id: Uuid,
    catalog: Arc<CostCatalog>,
    selection: SelectionState,
}

impl CostSession {
    /// Start a session with an empty selection
    pub fn new(catalog: Arc<CostCatalog>) -> Self {
        let id = Uuid::new_v4();
        info!(session_id = %id, "Cost session started");
        Self {
            id,
            catalog,
            selection: SelectionState::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &CostCatalog {
        &self.catalog
    }

    pub fn get_catalog(&self) -> CatalogSnapshot<'_> {
        self.catalog.snapshot()
    }

    pub fn estimate(&self, params: UsageParameters) -> CostEstimate {
        estimator::estimate(params)
    }

    /// Toggle a consideration and return the updated selection
    ///
    /// Names outside the catalog are accepted; they are simply not priced.
    pub fn toggle_consideration(&mut self, name: &str) -> &SelectionState {
        let selected = self.selection.toggle(name);
        if self.catalog.find_consideration(name).is_none() {
            debug!(session_id = %self.id, name, "Toggled name not present in catalog");
        }
        debug!(session_id = %self.id, name, selected, "Consideration toggled");
        &self.selection
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn get_totals(&self) -> Totals {
        self.selection.totals(&self.catalog)
    }

    pub fn export_summary(&self) -> String {
        summary::export_summary(&self.catalog, &self.selection)
    }

    pub fn export_summary_at(&self, generated_on: NaiveDate) -> String {
        summary::export_summary_at(&self.catalog, &self.selection, generated_on)
    }

    /// Resolve a 1-based position in the considerations list to its name,
    /// falling back to treating the input as a literal name
    pub fn resolve_consideration_name(&self, input: &str) -> String {
        let considerations = self.catalog.additional_considerations();
        match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= considerations.len() => considerations[n - 1].name.clone(),
            _ => input.to_string(),
        }
    }
}

impl Drop for CostSession {
    fn drop(&mut self) {
        info!(
            session_id = %self.id,
            selected = self.selection.len(),
            "Cost session ended"
        );
    }
}

/// One line of input in an interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    List,
    /// Name or 1-based position
    Toggle(String),
    Selected,
    Totals,
    Estimate(UsageParameters),
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse a command line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CostModelError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "toggle" | "t" => {
                if rest.is_empty() {
                    return Err(CostModelError::InvalidCommand(
                        "toggle requires a consideration name or number".to_string(),
                    ));
                }
                Self::Toggle(rest.to_string())
            }
            "selected" => Self::Selected,
            "totals" | "total" => Self::Totals,
            "estimate" | "e" => Self::Estimate(parse_usage(rest)?),
            "export" => {
                if rest.is_empty() {
                    Self::Export(None)
                } else {
                    Self::Export(Some(PathBuf::from(rest)))
                }
            }
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => {
                return Err(CostModelError::InvalidCommand(format!(
                    "unknown command '{}' (try 'help')",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn parse_usage(args: &str) -> Result<UsageParameters, CostModelError> {
    let values = args
        .split_whitespace()
        .map(|v| {
            v.parse::<i64>().map_err(|_| {
                CostModelError::InvalidCommand(format!("'{}' is not a whole number", v))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [hours, users, data_gb] => Ok(UsageParameters::clamped(*hours, *users, *data_gb)),
        _ => Err(CostModelError::InvalidCommand(
            "estimate takes <hours> <users> <data_gb>".to_string(),
        )),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  list                            show additional considerations
  toggle <name|number>            select or deselect a consideration
  selected                        show the current selection
  totals                          show additional and grand totals
  estimate <hours> <users> <gb>   project monthly, hourly and annual cost
  export [path]                   write the cost summary
  help                            show this help
  quit                            end the session";
