//! Grammar rules. Each rule consumes its part of the pattern and returns the
//! fragment for it.

use thompson_core::AutomatonBuilder;

use super::core::Parser;
use crate::compile::connect;
use crate::{Expected, Result};

impl Parser<'_> {
    /// `regex := term ('|' regex)?`
    ///
    /// Right-associative: `a|b|c` builds `a`, `b` and `c`, then the union
    /// start of `b|c`, then the outer union start. Alternatives are read in a
    /// loop, so a flat alternation costs no recursion fuel.
    pub(super) fn regex<B: AutomatonBuilder>(&mut self) -> Result<B> {
        let first: B = self.term()?;

        if !self.cursor.at('|') {
            if first.is_empty() {
                return Ok(self.ctx.epsilon());
            }
            return Ok(first);
        }

        if first.is_empty() {
            return Err(self.cursor.syntax_error(Expected::Operand, '|'));
        }

        let mut rest: Vec<B> = Vec::new();
        while self.cursor.at('|') {
            self.cursor.eat('|')?;
            self.expect_operand()?;
            rest.push(self.term()?);
        }

        let tail = rest
            .into_iter()
            .rev()
            .reduce(|right, left| self.ctx.union(left, right));
        Ok(match tail {
            Some(tail) => self.ctx.union(first, tail),
            None => first,
        })
    }

    /// `term := factor*`
    ///
    /// Returns the empty placeholder when no factor is present.
    fn term<B: AutomatonBuilder>(&mut self) -> Result<B> {
        let mut term = B::empty();
        while self.cursor.more() && !self.cursor.at(')') && !self.cursor.at('|') {
            let factor = self.factor()?;
            term = connect(term, factor);
        }
        Ok(term)
    }

    /// `factor := base ('*')*`
    fn factor<B: AutomatonBuilder>(&mut self) -> Result<B> {
        let mut base = self.base()?;
        while self.cursor.at('*') {
            self.cursor.eat('*')?;
            base = self.ctx.star(base);
        }
        Ok(base)
    }

    /// `base := '(' regex ')' | symbol`
    ///
    /// Each open group consumes one unit of recursion fuel.
    ///
    /// Any other character is a symbol, including a `*` with nothing to
    /// repeat.
    fn base<B: AutomatonBuilder>(&mut self) -> Result<B> {
        if self.cursor.at('(') {
            self.cursor.eat('(')?;
            self.enter_recursion()?;
            let inner = self.regex();
            self.exit_recursion();
            let inner = inner?;
            self.cursor.eat(')')?;
            return Ok(inner);
        }

        let c = self.cursor.next(Expected::Operand)?;
        Ok(self.ctx.symbol(c))
    }
}
