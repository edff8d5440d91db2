//! rosterctl - browse, search and prune the admin member list
//!
//! Entry point for the `rosterctl` binary:
//! - interactive paginated table with search, checkboxes and bulk delete (default)
//! - `list` prints one page for scripts
//! - `config` manages ~/.rosterctl/config.toml
//! - `completions` generates shell completion scripts

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rosterctl_core::{FileSource, HttpSource, MemberSource, RosterConfig};
use tracing::{debug, warn};

mod commands;
mod config;
mod tracing_setup;
mod tui;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "rosterctl",
    author,
    version,
    about = "Browse, search and prune the admin member list",
    long_about = "Fetch the member list once, then page through it, filter by name, email \
                  or role, check rows and delete them. Deletes only affect this session: \
                  the next fetch restores every member."
)]
struct Cli {
    /// Suppress progress spinners (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Member list URL (overrides source.endpoint)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Read members from a local JSON file instead of the endpoint
    #[arg(long, global = true, value_name = "PATH", conflicts_with = "endpoint")]
    file: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive member table (default)
    Tui,
    /// Print one page of members
    List(commands::list::ListArgs),
    /// Manage rosterctl configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::load_dotenv();
    ui::init_quiet_mode(cli.quiet);

    let command = cli.command.unwrap_or(Commands::Tui);
    let loaded = RosterConfig::load();

    // The table owns the screen, so its logs always go to a file
    let log_file = match (&command, &cli.log_file) {
        (_, Some(path)) => Some(path.clone()),
        (Commands::Tui, None) => Some(
            loaded
                .as_ref()
                .map(RosterConfig::log_file)
                .unwrap_or_else(|_| RosterConfig::default_log_file()),
        ),
        _ => None,
    };
    let tracing_config = tracing_setup::TracingConfig {
        debug: cli.debug,
        level: loaded.as_ref().ok().and_then(|c| c.logging.level.clone()),
        log_file,
    };
    if let Err(err) = tracing_setup::init(&tracing_config) {
        if matches!(command, Commands::Tui) {
            // Printed before raw mode, visible once the table closes
            eprintln!("rosterctl: logging disabled: {err:#}");
        } else if tracing_config.log_file.is_some() {
            let stderr_only = tracing_setup::TracingConfig {
                log_file: None,
                ..tracing_config
            };
            if tracing_setup::init(&stderr_only).is_ok() {
                warn!("Logging to stderr instead: {err:#}");
            }
        }
    }

    match command {
        Commands::Tui => {
            let config = loaded.context("Failed to load config")?;
            let source = build_source(cli.endpoint, cli.file, &config)?;
            tui::run(source).await?
        }
        Commands::List(args) => {
            let config = loaded.context("Failed to load config")?;
            let source = build_source(cli.endpoint, cli.file, &config)?;
            commands::run_list(args, source).await?
        }
        Commands::Config(args) => config::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

/// Pick the member source: `--file`, then `--endpoint`, then the config
fn build_source(
    endpoint: Option<String>,
    file: Option<PathBuf>,
    config: &RosterConfig,
) -> Result<Box<dyn MemberSource>> {
    if let Some(path) = file {
        debug!("Reading members from {}", path.display());
        return Ok(Box::new(FileSource::new(path)));
    }

    let mut config = config.clone();
    if let Some(url) = endpoint {
        config.set_endpoint(url).context("Invalid --endpoint")?;
    }

    let source = HttpSource::from_config(&config.source)
        .context("Failed to build HTTP client")?;
    debug!("Fetching members from {}", source.url());
    Ok(Box::new(source))
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
