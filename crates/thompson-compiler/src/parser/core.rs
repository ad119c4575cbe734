//! Parser state and low-level operations.

use thompson_core::AutomatonBuilder;

use super::cursor::Cursor;
use crate::compile::CompileCtx;
use crate::{Error, Expected, Result};

#[derive(Debug)]
pub struct ParseResult<B> {
    pub automaton: B,
    /// Number of state names handed out while building `automaton`.
    pub states_allocated: u32,
}

/// Parser over one pattern. Owns the compile context, so state names are
/// unique across everything a single `parse` builds.
pub struct Parser<'src> {
    pub(super) cursor: Cursor<'src>,
    pub(super) ctx: CompileCtx,
    depth: u32,
    recursion_fuel_limit: Option<u32>,
}

impl<'src> Parser<'src> {
    pub fn new(pattern: &'src str) -> Self {
        Self {
            cursor: Cursor::new(pattern),
            ctx: CompileCtx::new(),
            depth: 0,
            recursion_fuel_limit: None,
        }
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Every open group consumes one unit, restored when the group closes.
    /// The top level and `|` alternatives are free.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Parse the whole pattern into one automaton.
    pub fn parse<B: AutomatonBuilder>(mut self) -> Result<ParseResult<B>> {
        let automaton = self.regex()?;
        // `term` stops at ')' and `regex` consumes every '|', so anything
        // left over is an unmatched ')'.
        if let Some(found) = self.cursor.peek() {
            return Err(self.cursor.syntax_error(Expected::EndOfInput, found));
        }
        Ok(ParseResult {
            automaton,
            states_allocated: self.ctx.states_allocated(),
        })
    }

    pub(super) fn enter_recursion(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Fail unless the cursor is at something that can start a non-empty term.
    pub(super) fn expect_operand(&self) -> Result<()> {
        match self.cursor.peek() {
            None => Err(self.cursor.end_of_input(Expected::Operand)),
            Some(found @ ('|' | ')')) => Err(self.cursor.syntax_error(Expected::Operand, found)),
            Some(_) => Ok(()),
        }
    }
}
