use propgraph_types::Span;
use std::fmt::{self, Display, Formatter};

mod stats;

pub use stats::NodeStats;

pub trait AstNode {
    fn span(&self) -> Span;
}

/// A parsed formula. Leaves are always [`Expr::Atom`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    Atom(AtomExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

impl AstNode for Expr {
    fn span(&self) -> Span {
        match self {
            Expr::Atom(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
        }
    }
}

impl Expr {
    /// Text shown for this node alone: the atom value or the operator symbol.
    pub fn label(&self) -> &str {
        match self {
            Expr::Atom(e) => &e.value,
            Expr::Unary(e) => e.op.kind.symbol(),
            Expr::Binary(e) => e.op.kind.symbol(),
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Atom(_) => Vec::new(),
            Expr::Unary(e) => vec![&*e.expr],
            Expr::Binary(e) => vec![&*e.left, &*e.right],
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Expr::Atom(_))
    }

    // Allocation-free stand-in left behind by a detached child.
    fn placeholder() -> Expr {
        Expr::Atom(AtomExpr { kind: AtomKind::Constant, value: String::new(), span: Span::default() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomExpr {
    pub kind: AtomKind,
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomKind {
    /// A single letter in `p..=z`.
    Variable,
    /// `0` or `1`.
    Constant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub expr: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOp {
    pub kind: UnaryOpKind,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOpKind {
    Not,
}

impl UnaryOpKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOpKind::Not => "~",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOp {
    pub kind: BinaryOpKind,
    pub span: Span,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOpKind {
    And,
    Or,
    Implies,
    Equivalent,
}

impl BinaryOpKind {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOpKind::And => "^",
            BinaryOpKind::Or => "o",
            BinaryOpKind::Implies => "=>",
            BinaryOpKind::Equivalent => "<=>",
        }
    }
}

/// Fully parenthesized form: every binary node is wrapped, atoms and
/// negations are not.
impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut pieces = vec![Piece::Node(self)];
        while let Some(piece) = pieces.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Node(Expr::Atom(e)) => f.write_str(&e.value)?,
                Piece::Node(Expr::Unary(e)) => {
                    f.write_str(e.op.kind.symbol())?;
                    pieces.push(Piece::Node(&*e.expr));
                }
                Piece::Node(Expr::Binary(e)) => {
                    f.write_str("(")?;
                    pieces.extend([Piece::Text(")"), Piece::Node(&*e.right), Piece::Text(e.op.kind.symbol()), Piece::Node(&*e.left)]);
                }
            }
        }
        Ok(())
    }
}

enum Piece<'e> {
    Node(&'e Expr),
    Text(&'static str),
}

// Chains fold into left-deep trees as long as the input, so the default
// recursive drop would overflow the stack. Children are detached onto a heap
// stack instead; every node is dropped with atom-only children.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(expr: &mut Expr, pending: &mut Vec<Expr>) {
    match expr {
        Expr::Atom(_) => {}
        Expr::Unary(e) => {
            if !e.expr.is_atom() {
                pending.push(std::mem::replace(&mut *e.expr, Expr::placeholder()));
            }
        }
        Expr::Binary(e) => {
            for child in [&mut e.left, &mut e.right] {
                if !child.is_atom() {
                    pending.push(std::mem::replace(&mut **child, Expr::placeholder()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, at: usize) -> Expr {
        Expr::Atom(AtomExpr { kind: AtomKind::Variable, value: name.to_string(), span: Span::new(at, at + 1) })
    }

    #[test]
    fn test_display_parenthesizes_binary_nodes() {
        let left = var("p", 0);
        let right = var("q", 2);
        let span = left.span().to(right.span());
        let and = Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op: BinaryOp { kind: BinaryOpKind::And, span: Span::new(1, 2) },
            right: Box::new(right),
            span,
        });
        let not = Expr::Unary(UnaryExpr {
            op: UnaryOp { kind: UnaryOpKind::Not, span: Span::new(0, 1) },
            expr: Box::new(and),
            span,
        });

        assert_eq!(not.to_string(), "~(p^q)");
        assert_eq!(not.label(), "~");
        assert_eq!(not.children().len(), 1);
    }

    fn and_chain(links: usize) -> Expr {
        let mut expr = var("p", 0);
        for i in 0..links {
            let span = expr.span().to(Span::new(2 * i + 2, 2 * i + 3));
            expr = Expr::Binary(BinaryExpr {
                left: Box::new(expr),
                op: BinaryOp { kind: BinaryOpKind::And, span: Span::new(2 * i + 1, 2 * i + 2) },
                right: Box::new(var("q", 2 * i + 2)),
                span,
            });
        }
        expr
    }

    #[test]
    fn test_long_chain_display_and_drop() {
        let expr = and_chain(100_000);
        let text = expr.to_string();
        assert_eq!(text.len(), 1 + 4 * 100_000);
        assert!(text.starts_with("((((p^q)^q)"));
        assert!(text.ends_with("^q)"));
        drop(expr);
    }

    #[test]
    fn test_drop_deep_negation() {
        let mut expr = var("r", 0);
        for _ in 0..100_000 {
            expr = Expr::Unary(UnaryExpr {
                op: UnaryOp { kind: UnaryOpKind::Not, span: Span::default() },
                expr: Box::new(expr),
                span: Span::default(),
            });
        }
        assert_eq!(expr.stats().unary, 100_000);
        drop(expr);
    }
}
