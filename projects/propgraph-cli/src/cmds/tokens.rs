use super::FormulaInput;
use clap::Args;
use propgraph_parser::tokenize;
use propgraph_types::Result;

#[derive(Args)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: FormulaInput,
}

impl TokensArgs {
    pub async fn run(&self) -> Result<()> {
        let source = self.input.read().await?;
        for token in tokenize(&source)? {
            println!("{:<6} {:<14} {}", token.span.to_string(), format!("{:?}", token.kind), token.text);
        }
        Ok(())
    }
}
