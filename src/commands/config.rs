//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use rentals_core::config::AppConfig;
use rentals_core::AppResult;
use rentals_fixtures::Fixtures;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration and the fixture data it points at
    Validate,
    /// Write the default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            let fixtures = Fixtures::load(config.fixtures.path.as_deref())?;
            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv("Log level", &config.logging.level);
            output::print_kv(
                "Page size",
                &format!(
                    "{} (max {})",
                    config.pagination.default_page_size, config.pagination.max_page_size
                ),
            );
            output::print_kv("Currency", &config.display.currency_symbol);
            output::print_kv(
                "Fixtures",
                config.fixtures.path.as_deref().unwrap_or("embedded"),
            );
            output::print_kv("Records", &fixtures.record_count().to_string());
        }
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out_path, default_config)?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
