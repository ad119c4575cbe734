//! Compile context: the single source of state names.

use thompson_core::StateId;

const FIRST_STATE: u32 = 1;

/// State-name allocator for one compile.
///
/// Passed by `&mut` through every construction call. Names are never reset
/// or reused, so fragments built in different branches merge without
/// renaming.
#[derive(Debug)]
pub struct CompileCtx {
    next_state: u32,
}

impl Default for CompileCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl CompileCtx {
    pub fn new() -> Self {
        Self {
            next_state: FIRST_STATE,
        }
    }

    /// Generate a fresh state name.
    pub fn fresh_state(&mut self) -> StateId {
        let id = StateId::new(self.next_state);
        self.next_state += 1;
        id
    }

    pub fn states_allocated(&self) -> u32 {
        self.next_state - FIRST_STATE
    }
}
