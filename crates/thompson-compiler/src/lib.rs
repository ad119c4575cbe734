//! Thompson compiler: regular expressions to NFAs.
//!
//! This crate parses a pattern by recursive descent and builds the automaton
//! in the same pass, one fragment per grammar rule:
//! - `parser` - cursor over the pattern and the grammar rules
//! - `compile` - state-name counter, fragment combinators, and the `Compiler` entry point
//!
//! The automaton is assembled through [`thompson_core::AutomatonBuilder`], so
//! any representation implementing it can be produced. [`compile`] targets the
//! default [`Nfa`].

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

use std::fmt;

pub use compile::{CompileCtx, Compiler, DEFAULT_RECURSION_FUEL, connect};
pub use parser::{ParseResult, Parser};
pub use thompson_core::Nfa;

/// Errors that can occur while compiling a pattern.
///
/// All of them abort the compile; no partial automaton is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The next character does not fit the grammar.
    #[error("syntax error at position {position}: expected {expected}, found '{found}'")]
    Syntax {
        position: usize,
        expected: Expected,
        found: char,
    },

    /// The pattern ended while the grammar still needed input.
    #[error("unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEndOfInput { position: usize, expected: Expected },

    /// Recursion fuel exhausted (pattern nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

impl Error {
    /// Character offset into the pattern, if the error points at one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Syntax { position, .. } | Error::UnexpectedEndOfInput { position, .. } => {
                Some(*position)
            }
            Error::RecursionLimitExceeded => None,
        }
    }
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Char(char),
    /// Start of a symbol or a parenthesized group.
    Operand,
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Char(c) => write!(f, "'{c}'"),
            Expected::Operand => f.write_str("a symbol or '('"),
            Expected::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Compile `pattern` into an [`Nfa`] with default options.
pub fn compile(pattern: &str) -> Result<Nfa> {
    Compiler::new(pattern).compile_nfa()
}
