//! Drafttable - turn a text document into a draft Markdown task table.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use drafttable::{Config, DraftGenerator};

/// Turn a text document into a draft Markdown task table
#[derive(Parser)]
#[command(name = "drafttable")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "A document named like a subcommand must follow `--`: drafttable -- config")]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text document to read
    input: Option<PathBuf>,

    /// Output file (defaults to draft_wbs.md in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum number of rows
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Configuration file to use instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the table instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Preview format used with --dry-run
    #[arg(short, long, value_enum, default_value_t = PreviewFormat::Markdown)]
    format: PreviewFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// Show configuration
    Config {
        /// Show config directory path
        #[arg(long)]
        path: bool,

        /// Configuration file to show instead of the default locations
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PreviewFormat {
    Markdown,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose { EnvFilter::new("debug") } else { EnvFilter::new("warn") };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();

    match &cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(*shell),
        Some(Commands::Config { path, config }) => cmd_config(config.as_deref(), *path)?,
        None => {
            let Some(input) = cli.input.as_deref() else {
                Cli::command()
                    .error(ErrorKind::MissingRequiredArgument, "an input document is required")
                    .exit();
            };
            cmd_generate(&cli, input)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Generate the draft table for a document.
fn cmd_generate(cli: &Cli, input: &Path) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let mut generator = DraftGenerator::from_config(&config.draft)?;
    if let Some(limit) = cli.limit {
        generator = generator.with_max_rows(limit);
    }

    if cli.dry_run {
        let table = generator.generate_from_file(input)?;
        match cli.format {
            PreviewFormat::Markdown => print!("{}", table.to_markdown()),
            PreviewFormat::Json => println!("{}", table.to_json()?),
        }
        return Ok(());
    }

    let output = config.draft.output_path(cli.output.as_deref());
    let summary = generator
        .run(input, &output)
        .with_context(|| format!("Failed to generate draft table from {}", input.display()))?;

    println!("Wrote {} row(s) to {}", summary.rows, summary.output.display());
    Ok(())
}

/// Generate shell completions.
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "drafttable", &mut io::stdout());
}

/// Show configuration.
fn cmd_config(path: Option<&Path>, show_path: bool) -> Result<()> {
    if show_path {
        if let Some(dir) = Config::config_dir() {
            println!("{}", dir.display());
        }
        return Ok(());
    }

    let config = load_config(path)?;
    println!("{}", config.to_toml()?);

    Ok(())
}
