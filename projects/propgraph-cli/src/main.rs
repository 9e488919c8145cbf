use clap::Parser;
use propgraph_cli::{PropGraphApplication, PropGraphCommands};

#[tokio::main]
async fn main() -> propgraph_types::Result<()> {
    let cli = PropGraphApplication::parse();

    match cli.command {
        PropGraphCommands::Render(args) => args.run(&cli.config).await?,
        PropGraphCommands::Check(args) => args.run(&cli.config).await?,
        PropGraphCommands::Tokens(args) => args.run().await?,
        PropGraphCommands::Init(args) => args.run().await?,
    }

    Ok(())
}
