use crate::lexer::{Lexer, Token, TokenKind};
use propgraph_ast::*;
use propgraph_types::{PropError, Result, Span};

/// Recursive descent over three precedence tiers, with one token of
/// lookahead:
///
/// ```text
/// expr   := term { ("=>" | "<=>") term }
/// term   := factor { ("^" | "o") factor }
/// factor := "~" factor | "(" expr ")" | VAR | CONST
/// ```
///
/// Both binary tiers fold left to right, so `p=>q=>s` is `(p=>q)=>s`.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    curr: Token,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> Parser<'a> {
    /// Negation and binary chains are read in loops. Parentheses recurse, so
    /// without a limit their nesting is bounded only by the thread stack.
    pub fn new(source: &'a str) -> Self {
        Self { lexer: Lexer::new(source), curr: dummy_token(), depth: 0, max_depth: None }
    }

    /// Rejects formulas nesting more than `limit` negations or parentheses.
    pub fn with_max_depth(source: &'a str, limit: usize) -> Self {
        Self { max_depth: Some(limit), ..Self::new(source) }
    }

    /// Parses the whole input as one formula. Anything left over after the
    /// top-level `expr` is a syntax error.
    pub fn parse(mut self) -> Result<Expr> {
        self.curr = self.lexer.next_token()?;
        let expr = self.parse_expr()?;
        self.eat(TokenKind::EOF)?;
        Ok(expr)
    }

    /// Consumes the lookahead if it is `expected`, returning it.
    fn eat(&mut self, expected: TokenKind) -> Result<Token> {
        if self.curr.kind == expected {
            let next = self.lexer.next_token()?;
            Ok(std::mem::replace(&mut self.curr, next))
        }
        else {
            Err(PropError::syntax(self.curr.span, Some(expected), self.curr.kind))
        }
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;
        while let Some(kind) = expr_operator(self.curr.kind) {
            let op = BinaryOp { kind, span: self.eat(self.curr.kind)?.span };
            let right = self.parse_term()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(kind) = term_operator(self.curr.kind) {
            let op = BinaryOp { kind, span: self.eat(self.curr.kind)?.span };
            let right = self.parse_factor()?;
            left = binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        match self.curr.kind {
            TokenKind::Not => {
                // `~~~p` is read in a loop and wrapped innermost first.
                let mut ops = Vec::new();
                while self.curr.kind == TokenKind::Not {
                    let op_span = self.eat(TokenKind::Not)?.span;
                    self.enter(op_span)?;
                    ops.push(op_span);
                }
                let mut expr = self.parse_factor()?;
                self.depth -= ops.len();
                for op_span in ops.into_iter().rev() {
                    let span = op_span.to(expr.span());
                    expr = Expr::Unary(UnaryExpr { op: UnaryOp { kind: UnaryOpKind::Not, span: op_span }, expr: Box::new(expr), span });
                }
                Ok(expr)
            }
            TokenKind::LParen => {
                let open = self.eat(TokenKind::LParen)?.span;
                self.enter(open)?;
                let expr = self.parse_expr()?;
                self.depth -= 1;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Var => self.parse_atom(TokenKind::Var, AtomKind::Variable),
            TokenKind::Const => self.parse_atom(TokenKind::Const, AtomKind::Constant),
            found => Err(PropError::syntax(self.curr.span, None, found)),
        }
    }

    fn parse_atom(&mut self, token: TokenKind, kind: AtomKind) -> Result<Expr> {
        let token = self.eat(token)?;
        Ok(Expr::Atom(AtomExpr { kind, value: token.text, span: token.span }))
    }

    /// Opens one level of nesting, failing past the configured limit. Errors
    /// end the parse, so levels are only closed on success.
    fn enter(&mut self, span: Span) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => Err(PropError::depth_limit(span, limit)),
            _ => Ok(()),
        }
    }
}

fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    let span = left.span().to(right.span());
    Expr::Binary(BinaryExpr { left: Box::new(left), op, right: Box::new(right), span })
}

fn expr_operator(kind: TokenKind) -> Option<BinaryOpKind> {
    match kind {
        TokenKind::Implies => Some(BinaryOpKind::Implies),
        TokenKind::Equivalent => Some(BinaryOpKind::Equivalent),
        _ => None,
    }
}

fn term_operator(kind: TokenKind) -> Option<BinaryOpKind> {
    match kind {
        TokenKind::And => Some(BinaryOpKind::And),
        TokenKind::Or => Some(BinaryOpKind::Or),
        _ => None,
    }
}

fn dummy_token() -> Token {
    Token { kind: TokenKind::EOF, span: Span { start: 0, end: 0 }, text: String::new() }
}
