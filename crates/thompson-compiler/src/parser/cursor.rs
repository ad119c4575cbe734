//! Destructive left-to-right view over the pattern.

use crate::{Error, Expected, Result};

/// Remaining unconsumed suffix of a pattern plus the number of characters
/// already consumed.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    rest: &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(pattern: &'src str) -> Self {
        Self {
            rest: pattern,
            position: 0,
        }
    }

    /// Characters consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn rest(&self) -> &'src str {
        self.rest
    }

    pub fn more(&self) -> bool {
        !self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    pub fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    /// Consume `expected` or fail without consuming.
    pub fn eat(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c);
                Ok(())
            }
            Some(found) => Err(self.syntax_error(Expected::Char(expected), found)),
            None => Err(self.end_of_input(Expected::Char(expected))),
        }
    }

    /// Consume whatever character comes next. `expected` only describes the
    /// failure at end of input.
    pub fn next(&mut self, expected: Expected) -> Result<char> {
        let Some(c) = self.peek() else {
            return Err(self.end_of_input(expected));
        };
        self.advance(c);
        Ok(c)
    }

    pub fn syntax_error(&self, expected: Expected, found: char) -> Error {
        Error::Syntax {
            position: self.position,
            expected,
            found,
        }
    }

    pub fn end_of_input(&self, expected: Expected) -> Error {
        Error::UnexpectedEndOfInput {
            position: self.position,
            expected,
        }
    }

    fn advance(&mut self, c: char) {
        self.rest = &self.rest[c.len_utf8()..];
        self.position += 1;
    }
}
