use std::fmt::{self, Display, Formatter};
use std::ops::Range;

mod errors;

pub use errors::{PropError, PropErrorKind, Result};

/// Source code location span, in byte offsets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Every kind of token the lexer can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    // Atoms
    Var,   // p..z
    Const, // 0 | 1

    // Connectives
    Not,        // ~
    And,        // ^
    Or,         // o
    Implies,    // =>
    Equivalent, // <=>

    // Grouping
    LParen, // (
    RParen, // )

    EOF,
}

impl TokenKind {
    /// Literal spelling for fixed tokens, `None` for atoms and end of input.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Not => Some("~"),
            TokenKind::And => Some("^"),
            TokenKind::Or => Some("o"),
            TokenKind::Implies => Some("=>"),
            TokenKind::Equivalent => Some("<=>"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::Var | TokenKind::Const | TokenKind::EOF => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Var => f.write_str("variable"),
            TokenKind::Const => f.write_str("constant"),
            TokenKind::EOF => f.write_str("end of input"),
            other => write!(f, "'{}'", other.symbol().unwrap_or_default()),
        }
    }
}
