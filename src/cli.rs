use std::path::PathBuf;

mod form;
mod session;
mod table;
mod terminal;

use clap::ArgAction;
use roster::Config;
use session::Session;

/// Session-resident record manager.
///
/// One run is one session: records live in memory and are discarded on
/// exit. Type `help` inside the session for the available commands.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pre-populate the session with the sample roster
    #[arg(long)]
    seed: bool,

    /// Override the export artifact path
    #[arg(long, value_name = "PATH")]
    export_file: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = Config::load_or_default(self.config.as_deref());
        if let Some(path) = self.export_file {
            config.set_export_file(path);
        }

        let mut session = Session::new(config, form::TerminalPrompter);
        session.run(self.seed)
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

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
