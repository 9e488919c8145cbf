use clap::Args;
use propgraph_types::{PropError, Result};
use std::path::PathBuf;
use tokio::fs;

/// Where the formula comes from: inline, or a file.
#[derive(Args, Debug)]
pub struct FormulaInput {
    /// The formula, e.g. "(p=>q)^p"
    #[arg(required_unless_present = "file")]
    pub formula: Option<String>,

    /// Read the formula from a file instead
    #[arg(short, long, conflicts_with = "formula")]
    pub file: Option<PathBuf>,
}

impl FormulaInput {
    pub async fn read(&self) -> Result<String> {
        match (&self.formula, &self.file) {
            (Some(formula), _) => Ok(formula.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .await
                .map_err(|e| PropError::io(format!("Failed to read {}: {}", path.display(), e))),
            (None, None) => Err(PropError::cli("No formula given")),
        }
    }
}
