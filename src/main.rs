use anyhow::Result;
use av_cost_model::{config, init_tracing, CostCatalog};
use clap::Parser;
use std::sync::Arc;

mod cli;
mod commands;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    let cfg = config::load_config(&args.config)?;
    init_tracing(&cfg.logging.level, &cfg.logging.format);

    let catalog = Arc::new(CostCatalog::builtin());

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Catalog { json, section } => {
            commands::catalog::execute(&catalog, section, json)?;
        }
        cli::Commands::Breakdown { details } => {
            commands::breakdown::execute(&catalog, details);
        }
        cli::Commands::Estimate {
            hours,
            users,
            data_gb,
            json,
        } => {
            commands::estimate::execute(&cfg, hours, users, data_gb, json)?;
        }
        cli::Commands::Totals { select, json } => {
            commands::totals::execute(catalog, &select, json)?;
        }
        cli::Commands::Export {
            select,
            output,
            stdout,
        } => {
            commands::export::execute(&cfg, catalog, &select, output, stdout)?;
        }
        cli::Commands::Session => {
            commands::session::execute(&cfg, catalog)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(&cfg, &args.config),
        },
        cli::Commands::Version => {
            println!("AV Cost Model v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
