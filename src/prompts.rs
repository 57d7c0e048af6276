//! Reflective prompt selection
//!
//! Prompt choice is pseudo-random by default. The selector sits behind a
//! trait so callers and tests can substitute a deterministic source; the
//! draw is the only non-deterministic step in the weekly pipeline.

use rand::Rng;

use crate::types::Theme;

/// Strategy for picking one prompt from a theme's pool.
pub trait PromptSelector {
    /// Pick a prompt, or `None` if the pool is empty.
    fn pick(&self, theme: Theme, pool: &[&'static str]) -> Option<&'static str>;
}

/// Uniform random selection. The production default.
#[derive(Debug, Default)]
pub struct RandomPromptSelector;

impl PromptSelector for RandomPromptSelector {
    fn pick(&self, _theme: Theme, pool: &[&'static str]) -> Option<&'static str> {
        if pool.is_empty() {
            return None;
        }
        let mut rng = rand::thread_rng();
        pool.get(rng.gen_range(0..pool.len())).copied()
    }
}

/// Always picks the same position (modulo pool size). For tests and for
/// callers that need reproducible reports.
#[derive(Debug, Default)]
pub struct FixedPromptSelector {
    pub index: usize,
}

impl FixedPromptSelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl PromptSelector for FixedPromptSelector {
    fn pick(&self, _theme: Theme, pool: &[&'static str]) -> Option<&'static str> {
        if pool.is_empty() {
            return None;
        }
        pool.get(self.index % pool.len()).copied()
    }
}
