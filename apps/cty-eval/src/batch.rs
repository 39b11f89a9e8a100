//! Batch rendering of evaluation input files, as driven by the `cty-eval` binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::models::{BuiltEvaluation, EvaluationInput};

/// How a batch is written out.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub out_dir: PathBuf,
    /// Overrides every input file's own suffix when set.
    pub suffix: Option<String>,
    /// Leave students whose target file already exists untouched.
    pub skip_existing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RenderSummary {
    pub written: Vec<PathBuf>,
    /// Targets that already existed and were left alone.
    pub skipped: Vec<PathBuf>,
    /// Excess-paragraph warnings across all inputs.
    pub warnings: usize,
}

/// What `check` found for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub input: PathBuf,
    pub filename: String,
    pub paragraph_count: usize,
}

fn load(path: &Path) -> Result<(EvaluationInput, BuiltEvaluation)> {
    let input = EvaluationInput::from_path(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    let built = input
        .build()
        .with_context(|| format!("Invalid evaluation in {}", path.display()))?;
    for w in &built.warnings {
        warn!("{}: {w}", path.display());
    }
    Ok((input, built))
}

/// Builds and saves every input in order. Stops at the first error.
pub fn render_all(inputs: &[PathBuf], options: &RenderOptions) -> Result<RenderSummary> {
    let mut summary = RenderSummary::default();

    for path in inputs {
        let (input, built) = load(path)?;
        summary.warnings += built.warnings.len();
        let suffix = options.suffix.as_deref().unwrap_or(input.suffix());

        if options.skip_existing && built.builder.file_exists_in(&options.out_dir, suffix) {
            let target = options.out_dir.join(built.builder.filename(suffix));
            info!("Skipping {}: {} already exists", path.display(), target.display());
            summary.skipped.push(target);
            continue;
        }

        let target = built
            .builder
            .save_in(&options.out_dir, suffix)
            .with_context(|| format!("Failed to write evaluation for {}", path.display()))?;
        summary.written.push(target);
    }

    info!(
        "Rendered {} evaluation(s), skipped {}",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

/// Validates every input without writing anything.
pub fn check_all(inputs: &[PathBuf]) -> Result<Vec<CheckReport>> {
    inputs
        .iter()
        .map(|path| {
            let (input, built) = load(path)?;
            Ok(CheckReport {
                input: path.clone(),
                filename: built.builder.filename(input.suffix()),
                paragraph_count: built.builder.paragraph_count(),
            })
        })
        .collect()
}
