use super::FormulaInput;
use clap::Args;
use propgraph_core::{Compiler, PropGraphConfig};
use propgraph_types::{PropError, Result};
use std::path::Path;

// serde serialization recurses once per tree level.
const JSON_MAX_DEPTH: usize = 2048;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: FormulaInput,

    /// Output the AST as JSON
    #[arg(short, long)]
    pub json: bool,
}

impl CheckArgs {
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = PropGraphConfig::load_or_default(config_path)?;
        let source = self.input.read().await?;
        let expr = Compiler::new(config).parse(&source)?;

        if self.json {
            if expr.depth() > JSON_MAX_DEPTH {
                return Err(PropError::cli(format!("Formula is too deep to print as JSON (more than {} levels)", JSON_MAX_DEPTH)));
            }
            println!("{}", serde_json::to_string_pretty(&expr)?);
        }
        else {
            let stats = expr.stats();
            println!("Check successful!");
            println!("Formula: {}", expr);
            println!("Atoms: {}", stats.atoms);
            println!("Negations: {}", stats.unary);
            println!("Binary connectives: {}", stats.binary);
            println!("Depth: {}", expr.depth());
        }
        Ok(())
    }
}
