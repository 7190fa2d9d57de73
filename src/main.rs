use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use corpus::app::AppContext;
use corpus::cli::{commands, Cli, Commands};
use corpus::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let command = cli.command.unwrap_or(Commands::Tui);

    init_tracing(&config, command == Commands::Tui)?;

    let ctx = AppContext::with_timeout(cli.db, config.store.timeout())?;

    match command {
        Commands::Tui => {
            commands::launch_tui(&ctx, &config)?;
        }
        Commands::List { author, json } => {
            commands::list_articles(&ctx, author.as_deref(), json)?;
        }
        Commands::Show { id, width } => {
            commands::show_article(&ctx, id, width)?;
        }
        Commands::Seed { count, reset } => {
            let count = count.unwrap_or(config.store.sample_count);
            commands::seed_articles(&ctx, count, reset)?;
        }
    }

    Ok(())
}

/// The TUI owns the terminal, so it logs to `<data dir>/corpus/corpus.log`.
/// Everything else logs to stderr.
fn init_tracing(config: &Config, to_file: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))?;

    if to_file {
        let path = AppContext::data_dir()?.join("corpus.log");
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    Ok(())
}
