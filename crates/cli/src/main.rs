//! `wordbridge` command-line tool.
//!
//! ```text
//! wordbridge poem   --corpus corpus.txt "Test the system."
//! wordbridge graph  --corpus corpus.txt --format csv
//! wordbridge bridge --corpus corpus.txt test the
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;
use wordbridge_core::{TieBreak, WordbridgeConfig};
use wordbridge_engine::text::fold;
use wordbridge_engine::{GraphPoet, PoetOptions};

#[derive(Parser, Debug)]
#[command(name = "wordbridge", version, about = "Bridge-word poetry from a word-affinity graph")]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert bridge words into the input text.
    Poem {
        /// Corpus file used to build the affinity graph
        #[arg(long)]
        corpus: PathBuf,
        /// Tie-break policy for equal-scoring bridges; defaults to the config
        #[arg(long, value_enum)]
        tie_break: Option<TieBreakArg>,
        /// Input words
        #[arg(required = true)]
        input: Vec<String>,
    },

    /// Print the affinity graph of a corpus.
    Graph {
        /// Corpus file used to build the affinity graph
        #[arg(long)]
        corpus: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List every two-hop path between two words, best first.
    Bridge {
        /// Corpus file used to build the affinity graph
        #[arg(long)]
        corpus: PathBuf,
        /// First word
        a: String,
        /// Second word
        b: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TieBreakArg {
    #[value(name = "first_seen", alias = "first-seen")]
    FirstSeen,
    Lexicographic,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::FirstSeen => TieBreak::FirstSeen,
            TieBreakArg::Lexicographic => TieBreak::Lexicographic,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WordbridgeConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WordbridgeConfig::default(),
    };
    init_logging(cli.log_level.as_deref(), &config)?;

    match cli.command {
        Commands::Poem {
            corpus,
            tie_break,
            input,
        } => {
            let tie_break = tie_break.map_or(config.poet.tie_break, TieBreak::from);
            let poet = load_poet(&corpus)?.with_options(PoetOptions::new().tie_break(tie_break));
            println!("{}", poet.poem(&input.join(" ")));
        }
        Commands::Graph { corpus, format } => {
            let poet = load_poet(&corpus)?;
            match format {
                Format::Text => print!("{}", poet.graph()),
                Format::Json => println!("{}", serde_json::to_string_pretty(&poet.graph().snapshot())?),
                Format::Csv => print!("{}", poet.graph().snapshot().to_csv()),
            }
        }
        Commands::Bridge { corpus, a, b } => {
            let poet = load_poet(&corpus)?;
            let mut paths = poet
                .graph()
                .two_hop_paths(fold(&a).as_str(), fold(&b).as_str());
            // Stable sort keeps first-seen order among equal scores.
            paths.sort_by(|x, y| y.score().cmp(&x.score()));
            if paths.is_empty() {
                println!("no bridge between {} and {}", a, b);
            }
            for path in paths {
                println!(
                    "{}\t{} ({} + {})",
                    path.via,
                    path.score(),
                    path.first,
                    path.second
                );
            }
        }
    }
    Ok(())
}

fn load_poet(corpus: &Path) -> Result<GraphPoet> {
    GraphPoet::from_path(corpus).with_context(|| format!("building graph from {}", corpus.display()))
}

fn init_logging(flag: Option<&str>, config: &WordbridgeConfig) -> Result<()> {
    let level = match flag {
        Some(s) => LevelFilter::from_str(s).with_context(|| format!("invalid log level '{}'", s))?,
        None => config.log.level_filter()?,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
