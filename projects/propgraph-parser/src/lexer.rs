use propgraph_types::{PropError, Result, Span};
use std::iter::Peekable;
use std::str::Chars;

pub use propgraph_types::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<Chars<'a>>,
    cursor: usize,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().peekable(),
            cursor: 0,
            done: false,
        }
    }

    /// Scans past any blanks and exactly one token. Returns an `EOF` token,
    /// repeatedly, once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        self.consume_while(is_blank);
        let start = self.cursor;

        let kind = match self.advance() {
            Some(c) => match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '~' => TokenKind::Not,
                '^' => TokenKind::And,
                'o' => TokenKind::Or,
                '=' => {
                    if !self.eat_char('>') {
                        return Err(self.error_from(start));
                    }
                    TokenKind::Implies
                }
                '<' => {
                    if !(self.eat_char('=') && self.eat_char('>')) {
                        return Err(self.error_from(start));
                    }
                    TokenKind::Equivalent
                }
                'p'..='z' => TokenKind::Var,
                '0' | '1' => TokenKind::Const,
                _ => return Err(self.error_from(start)),
            },
            None => TokenKind::EOF,
        };

        let end = self.cursor;
        Ok(Token {
            kind,
            span: Span { start, end },
            text: self.source[start..end].to_string(),
        })
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn error_from(&self, start: usize) -> PropError {
        PropError::lexical(Span { start, end: self.cursor }, &self.source[start..self.cursor])
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if let Some(c) = c {
            self.cursor += c.len_utf8();
        }
        c
    }

    fn eat_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        }
        else {
            false
        }
    }

    fn consume_while<F>(&mut self, mut f: F)
    where
        F: FnMut(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if f(c) {
                self.advance();
            }
            else {
                break;
            }
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Yields every token before `EOF`, then stops. A lexical error is yielded
/// once and ends the sequence.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::EOF => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
