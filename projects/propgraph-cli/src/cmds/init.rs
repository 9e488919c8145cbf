use clap::Args;
use propgraph_core::{PropGraphConfig, CONFIG_FILE};
use propgraph_types::{PropError, Result};
use std::path::PathBuf;

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(default_value = CONFIG_FILE)]
    pub path: PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    pub async fn run(&self) -> Result<()> {
        if self.path.exists() && !self.force {
            return Err(PropError::cli(format!("{} already exists, pass --force to replace it", self.path.display())));
        }
        PropGraphConfig::default().save(&self.path)?;
        println!("✓ Wrote {}", self.path.display());
        Ok(())
    }
}
