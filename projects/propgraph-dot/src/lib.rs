//! Serializes a formula tree as a Graphviz `digraph`.
//!
//! Nodes are numbered in pre-order: a node gets its id before any of its
//! children are visited. Each node yields one declaration line labelled with
//! its operator symbol or atom value, and each parent to child relationship
//! yields one edge line, left child first, written once the child subtrees
//! are done.

use propgraph_ast::Expr;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    pub graph_name: String,
    pub node_prefix: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self { graph_name: "G".to_string(), node_prefix: "n".to_string() }
    }
}

pub struct DotWriter {
    pub options: DotOptions,
}

impl DotWriter {
    pub fn new(options: DotOptions) -> Self {
        Self { options }
    }

    pub fn write(&self, expr: &Expr) -> String {
        let mut visit = Visit {
            prefix: &self.options.node_prefix,
            quote_ids: !is_bare_id(&format!("{}0", self.options.node_prefix)),
            next_id: 0,
            out: String::new(),
        };
        let _ = writeln!(visit.out, "digraph {} {{", dot_id(&self.options.graph_name));
        visit.tree(expr);
        visit.out.push('}');
        visit.out
    }
}

/// [`DotWriter::write`] with default options.
pub fn to_dot(expr: &Expr) -> String {
    DotWriter::new(DotOptions::default()).write(expr)
}

// State of one serialization call; ids never leak between calls.
struct Visit<'a> {
    prefix: &'a str,
    quote_ids: bool,
    next_id: usize,
    out: String,
}

enum Step<'e> {
    Enter(&'e Expr),
    Exit { id: usize, arity: usize },
}

impl Visit<'_> {
    // Walks with an explicit stack; chains make trees as deep as the input.
    fn tree(&mut self, root: &Expr) {
        let mut steps = vec![Step::Enter(root)];
        let mut finished: Vec<usize> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(expr) => {
                    let id = self.next_id;
                    self.next_id += 1;

                    let node = self.node_id(id);
                    let _ = writeln!(self.out, "{} [label=\"{}\"];", node, escape(expr.label()));

                    let children = expr.children();
                    steps.push(Step::Exit { id, arity: children.len() });
                    steps.extend(children.into_iter().rev().map(Step::Enter));
                }
                Step::Exit { id, arity } => {
                    let from = self.node_id(id);
                    for child in finished.split_off(finished.len() - arity) {
                        let to = self.node_id(child);
                        let _ = writeln!(self.out, "{} -> {};", from, to);
                    }
                    finished.push(id);
                }
            }
        }
    }

    fn node_id(&self, id: usize) -> String {
        let name = format!("{}{}", self.prefix, id);
        if self.quote_ids { quote(&name) } else { name }
    }
}

const KEYWORDS: [&str; 6] = ["graph", "digraph", "subgraph", "node", "edge", "strict"];

// An ID DOT accepts without quotes: an identifier that is not a keyword, or
// a plain numeral.
fn is_bare_id(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name))
}

fn dot_id(name: &str) -> String {
    if is_bare_id(name) { name.to_string() } else { quote(name) }
}

fn quote(name: &str) -> String {
    format!("\"{}\"", escape(name))
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
