//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;
use sigil_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "sigil")]
#[command(version)]
#[command(about = "Configurator for the smart wallet sign-in widget")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print an export of the stored configuration
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Apply a named preset to the stored configuration
    Preset {
        /// Preset name (full, simple, wallet)
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Manage the stored configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ExportFormat {
    /// Full configuration as pretty-printed JSON
    Json,
    /// React component usage snippet
    Component,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path of the stored configuration file
    Path,
    /// Print the stored configuration (defaults if absent)
    Show,
    /// Reset the stored configuration to defaults
    Reset,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to a file; the terminal belongs to the studio.
    let _log_guard = logging::init()?;

    // default to the studio
    let Some(command) = cli.command else {
        return commands::studio::run();
    };

    match command {
        Commands::Export { format } => {
            let format = match format {
                ExportFormat::Json => commands::export::Format::Json,
                ExportFormat::Component => commands::export::Format::Component,
            };
            commands::export::run(format)
        }
        Commands::Preset { name } => commands::preset::run(&name),
        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Show => commands::config::show(),
            ConfigCommands::Reset => commands::config::reset(),
        },
    }
}
