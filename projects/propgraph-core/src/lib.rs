use propgraph_ast::Expr;
use propgraph_dot::DotWriter;
use propgraph_parser::Parser;
use propgraph_types::Result;

pub mod config;

pub use config::{PropGraphConfig, CONFIG_FILE, DEFAULT_MAX_DEPTH};

/// Parses formulas and renders them as graphs, as configured.
pub struct Compiler {
    pub config: PropGraphConfig,
}

impl Compiler {
    pub fn new(config: PropGraphConfig) -> Self {
        Self { config }
    }

    pub fn parse(&self, source: &str) -> Result<Expr> {
        let parser = match self.config.parser.max_depth {
            0 => Parser::new(source),
            limit => Parser::with_max_depth(source, limit),
        };
        parser.parse()
    }

    pub fn render(&self, source: &str) -> Result<String> {
        let expr = self.parse(source)?;
        Ok(self.render_expr(&expr))
    }

    pub fn render_expr(&self, expr: &Expr) -> String {
        DotWriter::new(self.config.dot_options()).write(expr)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(PropGraphConfig::default())
    }
}
