use clap::{Parser, Subcommand};
use propgraph_core::CONFIG_FILE;
use std::path::PathBuf;

mod cmds;

pub use cmds::{CheckArgs, FormulaInput, InitArgs, RenderArgs, TokensArgs};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct PropGraphApplication {
    /// Configuration file, used when present
    #[arg(long, global = true, default_value = CONFIG_FILE, env = "PROPGRAPH_CONFIG")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: PropGraphCommands,
}

#[derive(Subcommand)]
pub enum PropGraphCommands {
    /// Parse a formula and write its syntax tree as a Graphviz graph
    Render(RenderArgs),
    /// Parse a formula and report its structure
    Check(CheckArgs),
    /// Print the tokens of a formula
    Tokens(TokensArgs),
    /// Write a default configuration file
    Init(InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_args() {
        let cli = PropGraphApplication::try_parse_from(["propgraph", "render", "p=>q", "--stdout"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        match cli.command {
            PropGraphCommands::Render(args) => {
                assert_eq!(args.input.formula.as_deref(), Some("p=>q"));
                assert!(args.stdout);
            }
            _ => panic!("Expected render command"),
        }
    }

    #[test]
    fn test_formula_and_file_conflict() {
        let result = PropGraphApplication::try_parse_from(["propgraph", "check", "p", "--file", "f.txt"]);
        assert!(result.is_err());
    }
}
