//! ttr CLI - Command-line interface for TTR route boards
//!
//! Loads a JSON board file and answers questions about it: which cities and
//! routes it has, where cities sit, the cheapest way between two cities, and
//! random destination tickets.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::TtrConfig;
use output::{OutputConfig, OutputFormat};

/// Explore route boards: cities, routes, shortest paths and tickets.
#[derive(Parser)]
#[command(name = "ttr")]
#[command(author, version)]
#[command(about = "Explore route boards: cities, routes, shortest paths and tickets")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  ttr --board usa.json info             Summarize a board
  ttr edges --from Denver               Routes leaving Denver
  ttr path Seattle Miami                Cheapest chain of routes
  ttr locate --at 120,80 --radius 10    City near a point
  ttr ticket --seed 42                  Draw a destination ticket")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board file (JSON). Defaults to [board].path from .ttrrc.toml
    #[arg(short, long, global = true, env = "TTR_BOARD")]
    board: Option<PathBuf>,

    /// Fail on unknown route colors instead of using gray
    #[arg(long, global = true)]
    strict_colors: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line JSON and borderless tables
    #[arg(long, global = true)]
    compact: bool,

    /// Wrap tables at this many columns (defaults to the terminal width)
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize the board: city, route and color counts
    Info,

    /// List cities with their locations
    #[command(visible_alias = "cities")]
    Nodes,

    /// List route edges, optionally filtered by endpoint
    #[command(visible_alias = "routes")]
    Edges {
        /// Only routes leaving this city
        #[arg(long)]
        from: Option<String>,

        /// Only routes arriving at this city
        #[arg(long)]
        to: Option<String>,

        /// Only routes touching this city
        #[arg(long, conflicts_with_all = ["from", "to"])]
        node: Option<String>,
    },

    /// Find a city's location, or the city at a location
    Locate {
        /// City name
        #[arg(required_unless_present = "at", conflicts_with = "at")]
        name: Option<String>,

        /// Location as X,Y
        #[arg(long, value_parser = locate::parse_point, allow_hyphen_values = true)]
        at: Option<ttr_core::Point>,

        /// Accept the nearest city within this distance of --at
        #[arg(short, long, requires = "at")]
        radius: Option<f64>,
    },

    /// Cheapest chain of routes between two cities
    Path {
        /// Start city
        from: String,

        /// Destination city
        to: String,

        /// Give up after this many search steps
        #[arg(long)]
        max_expansions: Option<usize>,
    },

    /// Draw a random destination ticket
    Ticket {
        /// RNG seed (defaults to [game].seed, then a random seed)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("ttr {}", cli_version);
    println!("  {:<10} {}", "ttr-cli:".cyan(), cli_version);
    println!("  {:<10} {}", "ttr-core:".cyan(), cli_version);
    println!("  {:<10} {}", "Platform:".cyan(), platform);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    let config = TtrConfig::load(std::path::Path::new("."));

    // CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    let mut output = OutputConfig::auto_detect(format, config.use_color());
    if let Some(width) = cli.width {
        output = output.with_width(width);
    }
    if cli.compact || config.compact() {
        output = output.compact();
    }
    colored::control::set_override(output.use_colors());

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    let ctx = Context {
        board: cli.board.or_else(|| config.board_path().map(PathBuf::from)),
        strict_colors: cli.strict_colors || config.strict_colors(),
        output,
    };

    match command {
        Commands::Info => info::run(&ctx),
        Commands::Nodes => nodes::run(&ctx),
        Commands::Edges { from, to, node } => edges::run(&ctx, &edges::EdgeFilter { from, to, node }),
        Commands::Locate { name, at, radius } => {
            let query = match (name, at) {
                (_, Some(point)) => locate::Query::At { point, radius },
                (Some(name), None) => locate::Query::City(name),
                (None, None) => anyhow::bail!("Give a city name or --at X,Y"),
            };
            locate::run(&ctx, &query)
        }
        Commands::Path {
            from,
            to,
            max_expansions,
        } => path::run(&ctx, &from, &to, max_expansions),
        Commands::Ticket { seed } => ticket::run(&ctx, seed.or(config.seed())),
        Commands::Completions {
            shell,
            instructions,
        } => {
            if instructions {
                completions::run_instructions(shell, ctx.output)
            } else {
                let mut cmd = Cli::command();
                completions::generate_completions(shell, &mut cmd);
                Ok(())
            }
        }
    }
}
