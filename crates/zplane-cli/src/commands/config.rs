//! Settings file management commands.

use clap::{Args, Subcommand};
use std::path::PathBuf;
use zplane_config::{Settings, paths};

use super::common::load_settings;

/// Manage the settings file.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings as TOML
    Show {
        /// Settings file (defaults to the user settings file)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write the default settings file
    Init {
        /// Destination (defaults to the user settings file)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the user settings file path
    Path,
}

/// Run a config command.
pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { config } => {
            let settings = load_settings(config.as_deref())?;
            print!("{}", settings.to_toml()?);
        }
        ConfigCommand::Init { path, force } => {
            let path = path.unwrap_or_else(paths::settings_file);
            if path.exists() && !force {
                anyhow::bail!(
                    "'{}' already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Settings::default().save(&path)?;
            println!("Wrote default settings to {}", path.display());
        }
        ConfigCommand::Path => {
            println!("{}", paths::settings_file().display());
        }
    }

    Ok(())
}
