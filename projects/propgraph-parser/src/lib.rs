pub mod lexer;
pub mod parser;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use propgraph_ast::Expr;
use propgraph_types::Result;

/// Parses one complete formula.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source).parse()
}

/// All tokens of `source`, without the trailing `EOF`.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).collect()
}
