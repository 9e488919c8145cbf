use crate::Expr;

/// Node counts of one tree, by shape.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct NodeStats {
    pub atoms: usize,
    pub unary: usize,
    pub binary: usize,
}

impl NodeStats {
    pub fn nodes(&self) -> usize {
        self.atoms + self.unary + self.binary
    }

    /// Parent to child relationships in the tree.
    pub fn edges(&self) -> usize {
        self.unary + 2 * self.binary
    }
}

impl Expr {
    pub fn stats(&self) -> NodeStats {
        let mut stats = NodeStats::default();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Expr::Atom(_) => stats.atoms += 1,
                Expr::Unary(_) => stats.unary += 1,
                Expr::Binary(_) => stats.binary += 1,
            }
            stack.extend(node.children());
        }
        stats
    }

    /// Longest root to leaf path, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children().into_iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AtomExpr, AtomKind, BinaryExpr, BinaryOp, BinaryOpKind, UnaryExpr, UnaryOp, UnaryOpKind};
    use propgraph_types::Span;

    fn constant(value: &str) -> Expr {
        Expr::Atom(AtomExpr { kind: AtomKind::Constant, value: value.to_string(), span: Span::default() })
    }

    #[test]
    fn test_stats_and_depth() {
        // ~1 => 0
        let not = Expr::Unary(UnaryExpr {
            op: UnaryOp { kind: UnaryOpKind::Not, span: Span::default() },
            expr: Box::new(constant("1")),
            span: Span::default(),
        });
        let implies = Expr::Binary(BinaryExpr {
            left: Box::new(not),
            op: BinaryOp { kind: BinaryOpKind::Implies, span: Span::default() },
            right: Box::new(constant("0")),
            span: Span::default(),
        });

        let stats = implies.stats();
        assert_eq!(stats, NodeStats { atoms: 2, unary: 1, binary: 1 });
        assert_eq!(stats.nodes(), 4);
        assert_eq!(stats.edges(), 3);
        assert_eq!(implies.depth(), 3);
        assert_eq!(constant("0").depth(), 1);
    }
}
