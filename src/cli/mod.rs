pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corpus")]
#[command(about = "A terminal article browser", long_about = None)]
pub struct Cli {
    /// Database file (default: <data dir>/corpus/corpus.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the TUI
    Tui,
    /// List articles, newest first
    List {
        /// Only articles by this author
        #[arg(short, long)]
        author: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print a single article
    Show {
        /// Article id
        id: i64,

        /// Wrap content to this many columns
        #[arg(short, long, default_value_t = 80)]
        width: usize,
    },
    /// Insert sample articles
    Seed {
        /// Number of samples (default: store.sample_count from the config)
        #[arg(short, long)]
        count: Option<usize>,

        /// Delete every article first and restart id numbering
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["corpus"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.db.is_none());
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["corpus", "list", "--author", "author-2", "--json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                author: Some("author-2".to_string()),
                json: true,
            })
        );
    }

    #[test]
    fn test_parse_show_with_global_db() {
        let cli = Cli::try_parse_from(["corpus", "show", "7", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Show { id: 7, width: 80 }));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/x.db")));
    }

    #[test]
    fn test_parse_seed() {
        let cli = Cli::try_parse_from(["corpus", "seed", "--count", "3", "--reset"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Seed {
                count: Some(3),
                reset: true,
            })
        );
    }
}
