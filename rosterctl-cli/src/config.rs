use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rosterctl_core::config::config_dir;
use rosterctl_core::RosterConfig;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a config file with the default settings
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = RosterConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        ));
    }

    RosterConfig::default()
        .save_to(&config_path)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("✅ Created config at: {:?}", config_path);
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {:?}", config_path);
    println!("  2. Point source.endpoint at your member list");
    println!("  3. Run: rosterctl config show");

    Ok(())
}

fn run_show() -> Result<()> {
    let config = RosterConfig::load().context("Failed to load config")?;
    print!("{}", config.to_toml()?);
    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", RosterConfig::config_path().display());
    Ok(())
}

/// Load environment variables from .env files
///
/// The current directory wins over ~/.rosterctl/.env; neither overwrites
/// variables that are already set.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded .env from current directory: {}", path.display());
    }

    let env_file = config_dir().join(".env");
    if env_file.exists() {
        match dotenvy::from_path(&env_file) {
            Ok(()) => debug!("Loaded .env from {}", env_file.display()),
            Err(e) => debug!("Failed to load {}: {}", env_file.display(), e),
        }
    }
}
