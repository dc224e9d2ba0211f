//! Expansion context for tracking depth during recursive expansion.

use crate::expander::ExpandError;

/// State carried through one top-level expansion.
///
/// Tracks the chain of placeholders whose chosen candidate is currently being
/// expanded, so the depth guard can report how it got there.
#[derive(Debug)]
pub struct ExpandContext {
    /// Placeholder names, outermost first.
    chain: Vec<String>,
    max_depth: usize,
}

impl ExpandContext {
    pub fn new(max_depth: usize) -> Self {
        Self {
            chain: Vec::new(),
            max_depth,
        }
    }

    /// Enter the chosen candidate of `name`.
    ///
    /// Fails once the chain already holds `max_depth` entries.
    pub fn enter(&mut self, name: &str) -> Result<(), ExpandError> {
        if self.chain.len() >= self.max_depth {
            let mut chain = self.chain.clone();
            chain.push(name.to_string());
            return Err(ExpandError::MaxDepthExceeded {
                max_depth: self.max_depth,
                chain,
            });
        }
        self.chain.push(name.to_string());
        Ok(())
    }

    /// Leave the innermost candidate.
    pub fn leave(&mut self) {
        self.chain.pop();
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.chain.len()
    }
}
