//! Configurable compile entry point.

use log::debug;
use thompson_core::{AutomatonBuilder, Nfa};

use crate::Result;
use crate::parser::Parser;

/// Default limit on group nesting depth.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

/// A pattern plus compile options.
///
/// ```
/// use thompson_compiler::Compiler;
///
/// let nfa = Compiler::new("a*b|c").compile_nfa().unwrap();
/// assert!(nfa.accepts("aab"));
/// assert!(!nfa.accepts("ac"));
/// ```
#[derive(Debug, Clone)]
pub struct Compiler<'src> {
    pattern: &'src str,
    recursion_fuel: Option<u32>,
}

impl<'src> Compiler<'src> {
    pub fn new(pattern: &'src str) -> Self {
        Self {
            pattern,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }

    /// Set recursion depth limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting recursion. It protects against
    /// deeply nested input; [`compile`](Self::compile) fails with
    /// [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded)
    /// when exhausted.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn pattern(&self) -> &'src str {
        self.pattern
    }

    pub fn recursion_fuel(&self) -> Option<u32> {
        self.recursion_fuel
    }

    /// Compile into any automaton representation.
    pub fn compile<B: AutomatonBuilder>(&self) -> Result<B> {
        let parser = Parser::new(self.pattern).with_recursion_fuel(self.recursion_fuel);
        match parser.parse::<B>() {
            Ok(parsed) => {
                debug!(
                    "compiled {:?}: {} states",
                    self.pattern, parsed.states_allocated
                );
                Ok(parsed.automaton)
            }
            Err(err) => {
                debug!("failed to compile {:?}: {}", self.pattern, err);
                Err(err)
            }
        }
    }

    pub fn compile_nfa(&self) -> Result<Nfa> {
        self.compile()
    }
}
