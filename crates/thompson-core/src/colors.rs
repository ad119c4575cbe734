//! Terminal colors for automaton dumps.

/// Escape sequences for each role in a dump. Every field is empty when
/// colors are off, so printers write them unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// State names.
    pub state: &'static str,
    /// Final state names.
    pub accepting: &'static str,
    /// Input symbols.
    pub symbol: &'static str,
    /// Epsilon labels, headers and arrows.
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        state: "\x1b[34m",
        accepting: "\x1b[1;34m",
        symbol: "\x1b[32m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        state: "",
        accepting: "",
        symbol: "",
        muted: "",
        reset: "",
    };

    /// Pick `ON` or `OFF` from a flag.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    /// Check if any escape code would be written.
    pub fn is_enabled(&self) -> bool {
        *self != Self::OFF
    }

    /// Color for a state name.
    pub fn for_state(&self, is_final: bool) -> &'static str {
        if is_final { self.accepting } else { self.state }
    }

    /// Color for a transition label.
    pub fn for_symbol(&self, symbol: crate::Symbol) -> &'static str {
        if symbol.is_epsilon() { self.muted } else { self.symbol }
    }
}
