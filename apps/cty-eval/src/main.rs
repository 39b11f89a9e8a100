//! `cty-eval` — renders CTY evaluation input files into `.docx` documents.
//!
//! ## Commands
//!
//! - `render`: build and save one document per input file
//! - `check`: validate input files and print the filename each would produce

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cty_eval::batch::{check_all, render_all, RenderOptions};
use cty_eval::config::Config;

#[derive(Parser)]
#[command(name = "cty-eval")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate CTY final evaluation documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render evaluation input files (JSON) to .docx
    Render {
        /// Evaluation input files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (default: CTY_EVAL_OUT_DIR or the current directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Filename suffix, overriding each input file's own suffix
        #[arg(short, long)]
        suffix: Option<String>,

        /// Leave students whose evaluation file already exists untouched
        #[arg(long)]
        skip_existing: bool,
    },

    /// Validate evaluation input files without writing anything
    Check {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            inputs,
            out_dir,
            suffix,
            skip_existing,
        } => {
            let options = RenderOptions {
                out_dir: out_dir.unwrap_or(config.out_dir),
                suffix,
                skip_existing,
            };
            let summary = render_all(&inputs, &options)?;
            for path in &summary.written {
                println!("{}", path.display());
            }
        }
        Commands::Check { inputs } => {
            for report in check_all(&inputs)? {
                println!(
                    "{}: ok -> {} ({} body paragraphs)",
                    report.input.display(),
                    report.filename,
                    report.paragraph_count
                );
            }
        }
    }

    Ok(())
}
