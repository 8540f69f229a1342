//! partex CLI: LaTeX parameter tables and macros from JSON parameter catalogues.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use partex_render::{ColumnSpec, SectionSpec, DEFAULT_MACRO_PREFIX};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "partex",
    version,
    about = "Generate LaTeX parameter tables and macros from parameter catalogues"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a partex.toml configuration
    Init {
        /// Target directory (default: current directory)
        dir: Option<PathBuf>,
        /// Parameter file referenced by the configuration
        #[arg(long, default_value = "params.json")]
        params: String,
        /// Also write an example parameter catalogue
        #[arg(long)]
        example: bool,
    },
    /// Generate every macro file and table listed in partex.toml
    Render {
        /// Configuration file (default: search upward for partex.toml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Generate macro definitions for a parameter file
    Macros {
        /// JSON parameter catalogue
        params: PathBuf,
        /// Macro name prefix
        #[arg(long, default_value = DEFAULT_MACRO_PREFIX)]
        prefix: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a single table for a parameter file
    Table {
        /// JSON parameter catalogue
        params: PathBuf,
        /// Column as TITLE=FIELD or TITLE=FIELD+FIELD (repeatable)
        #[arg(long = "column", required = true)]
        columns: Vec<ColumnSpec>,
        /// Section as TAG or TAG:TITLE (repeatable; default: all sections)
        #[arg(long = "section")]
        sections: Vec<SectionSpec>,
        /// Relative column widths, comma separated
        #[arg(long, value_delimiter = ',')]
        widths: Option<Vec<f64>>,
        /// Macro name prefix for macro columns
        #[arg(long, default_value = DEFAULT_MACRO_PREFIX)]
        prefix: String,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List section tags of a parameter file
    Sections {
        /// JSON parameter catalogue
        params: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli.command);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match command {
        Commands::Init {
            dir,
            params,
            example,
        } => {
            let dir = dir.unwrap_or(cwd);
            commands::init::run(&dir, &params, example)
        }

        Commands::Render { config } => commands::render::run(&cwd, config.as_deref()),

        Commands::Macros {
            params,
            prefix,
            output,
        } => commands::macros::run(&params, &prefix, output.as_deref()),

        Commands::Table {
            params,
            columns,
            sections,
            widths,
            prefix,
            output,
        } => commands::table::run(
            &params,
            columns,
            sections,
            widths.as_deref(),
            &prefix,
            output.as_deref(),
        ),

        Commands::Sections { params } => commands::sections::run(&params),
    }
}
