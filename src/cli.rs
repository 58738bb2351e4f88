use std::path::{Path, PathBuf};

mod init;
mod input;
mod list;
mod menu;
mod stats;
mod table;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use edurec::{Catalog, Config};
use list::List;
use stats::Stats;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "edu.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command
            .unwrap_or(Command::Menu)
            .run(&self.config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // log to stderr so json output on stdout stays parseable
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Open the interactive menu (default)
    Menu,

    /// List records, optionally filtered
    List(List),

    /// Show record counts, status breakdowns and the average score
    Stats(Stats),

    /// Write a default configuration file
    Init,
}

impl Command {
    fn run(self, config_path: &Path) -> anyhow::Result<()> {
        match self {
            Self::Menu => {
                let (catalog, config) = open(config_path)?;
                menu::Menu::new(catalog, config).run()?;
            }
            Self::List(command) => {
                let (catalog, config) = open(config_path)?;
                command.run(&catalog, &config)?;
            }
            Self::Stats(command) => {
                let (catalog, _) = open(config_path)?;
                command.run(&catalog)?;
            }
            Self::Init => init::run(config_path)?,
        }
        Ok(())
    }
}

/// Load the configuration and build a fresh catalog, seeded with the
/// demonstration data unless the configuration turns it off.
#[instrument(level = "debug")]
fn open(config_path: &Path) -> anyhow::Result<(Catalog, Config)> {
    let config = Config::load_or_default(config_path)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("while loading {}", config_path.display()))?;

    let mut catalog = Catalog::new();
    if config.sample_data {
        edurec::seed(&mut catalog);
    }
    Ok((catalog, config))
}
