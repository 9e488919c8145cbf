use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use thiserror::Error as ThisError;

use crate::{Span, TokenKind};

mod convert;
mod display;

/// The result type of this crate.
pub type Result<T> = std::result::Result<T, PropError>;

/// A boxed error kind, wrapping an [PropErrorKind].
#[derive(Clone, PartialEq, Eq)]
pub struct PropError {
    kind: Box<PropErrorKind>,
}

/// The kind of [PropError].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PropErrorKind {
    /// A character, or an unfinished `=>`/`<=>`, the lexer cannot classify.
    #[error("Lexical error at {span}: unrecognized input {found:?}")]
    LexicalError { span: Span, found: String },

    /// A token that does not fit the grammar at its position.
    #[error("Syntax error at {span}: {}", syntax_message(.expected, .found))]
    SyntaxError { span: Span, expected: Option<TokenKind>, found: TokenKind },

    #[error("Nesting exceeds the limit of {limit} at {span}")]
    DepthLimitExceeded { span: Span, limit: usize },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("CLI error: {message}")]
    CliError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

fn syntax_message(expected: &Option<TokenKind>, found: &TokenKind) -> String {
    match expected {
        Some(expected) => format!("expected {}, found {}", expected, found),
        None => format!("unexpected {}", found),
    }
}

impl PropError {
    pub fn new(kind: PropErrorKind) -> Self {
        kind.into()
    }

    pub fn kind(&self) -> &PropErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> PropErrorKind {
        *self.kind
    }

    /// Location in the input, for lexical and syntax failures.
    pub fn span(&self) -> Option<Span> {
        match &*self.kind {
            PropErrorKind::LexicalError { span, .. }
            | PropErrorKind::SyntaxError { span, .. }
            | PropErrorKind::DepthLimitExceeded { span, .. } => Some(*span),
            _ => None,
        }
    }

    pub fn lexical(span: Span, found: impl Into<String>) -> Self {
        PropErrorKind::LexicalError { span, found: found.into() }.into()
    }

    pub fn syntax(span: Span, expected: Option<TokenKind>, found: TokenKind) -> Self {
        PropErrorKind::SyntaxError { span, expected, found }.into()
    }

    pub fn depth_limit(span: Span, limit: usize) -> Self {
        PropErrorKind::DepthLimitExceeded { span, limit }.into()
    }

    pub fn config(message: impl Into<String>) -> Self {
        PropErrorKind::ConfigError { message: message.into() }.into()
    }

    pub fn io(message: impl Into<String>) -> Self {
        PropErrorKind::IoError { message: message.into() }.into()
    }

    pub fn cli(message: impl Into<String>) -> Self {
        PropErrorKind::CliError { message: message.into() }.into()
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PropErrorKind::InternalError { message: message.into() }.into()
    }
}
