use super::FormulaInput;
use clap::Args;
use propgraph_core::{Compiler, PropGraphConfig};
use propgraph_types::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub input: FormulaInput,

    /// Output file, overriding the configured path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the graph instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl RenderArgs {
    pub async fn run(&self, config_path: &Path) -> Result<()> {
        let config = PropGraphConfig::load_or_default(config_path)?;
        let source = self.input.read().await?;
        let output = self.output.clone().unwrap_or_else(|| config.output.path.clone());

        let compiler = Compiler::new(config);
        let dot = compiler.render(&source)?;

        if self.stdout {
            println!("{}", dot);
            return Ok(());
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&output, dot).await?;
        println!("Graph saved to {} (render it with Graphviz)", output.display());
        Ok(())
    }
}
