use av_cost_model::config::DEFAULT_CONFIG_FILE;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "avcost", version, about = "AV Digital Proving Ground cost model")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the cost catalog
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,

        /// Only show one table
        #[arg(short, long, value_enum)]
        section: Option<CatalogSection>,
    },

    /// Show the base cost breakdown (default)
    Breakdown {
        /// Include cost influences and optimization tips
        #[arg(short, long)]
        details: bool,
    },

    /// Estimate cost for a usage profile
    Estimate {
        /// Usage hours per month
        #[arg(long, allow_negative_numbers = true)]
        hours: Option<i64>,

        /// Concurrent users
        #[arg(short, long, allow_negative_numbers = true)]
        users: Option<i64>,

        /// Data volume in GB
        #[arg(short = 'g', long, allow_negative_numbers = true)]
        data_gb: Option<i64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Total the base cost plus selected considerations
    Totals {
        /// Consideration to toggle, by name or list number (repeatable)
        #[arg(short, long = "select")]
        select: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a plain-text cost summary
    Export {
        /// Consideration to toggle, by name or list number (repeatable)
        #[arg(short, long = "select")]
        select: Vec<String>,

        /// Output file (defaults to export.directory/export.filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Start an interactive session
    Session,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Base,
    Scenarios,
    Considerations,
}

impl Cli {
    /// Get the command to execute, defaulting to Breakdown if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Breakdown { details: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_breakdown() {
        let cli = Cli {
            config: PathBuf::from("avcost.toml"),
            command: None,
        };

        match cli.get_command() {
            Commands::Breakdown { details } => assert!(!details),
            _ => panic!("Expected Breakdown command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_with_negative() {
        let args = vec!["avcost", "estimate", "--hours", "-5", "--users", "3"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Estimate {
                hours,
                users,
                data_gb,
                json,
            } => {
                assert_eq!(hours, Some(-5));
                assert_eq!(users, Some(3));
                assert_eq!(data_gb, None);
                assert!(!json);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_repeated_select() {
        let args = vec![
            "avcost",
            "export",
            "-s",
            "Machine Learning Model Training",
            "--select",
            "Data Ingress from Vehicles",
            "--stdout",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Export {
                select,
                output,
                stdout,
            } => {
                assert_eq!(select.len(), 2);
                assert!(output.is_none());
                assert!(stdout);
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_export_stdout_conflicts_with_output() {
        let args = vec!["avcost", "export", "--stdout", "-o", "x.txt"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_cli_parsing_catalog_section() {
        let args = vec!["avcost", "catalog", "--section", "scenarios"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Catalog { section, json } => {
                assert_eq!(section, Some(CatalogSection::Scenarios));
                assert!(!json);
            }
            _ => panic!("Expected Catalog command"),
        }
    }

    #[test]
    fn test_cli_parsing_config_show() {
        let args = vec!["avcost", "config", "show"];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.get_command() {
            Commands::Config { action } => {
                assert!(matches!(action, ConfigCommands::Show));
            }
            _ => panic!("Expected Config command"),
        }
    }
}
