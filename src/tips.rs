//! Tip of the day
//!
//! One tip is drawn at random when the program starts and kept for the rest
//! of the session. Nothing here is persisted.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Built-in cleaning tips
pub const TIPS: [&str; 4] = [
    "Use vinegar + lemon for mirror shine",
    "Baking soda removes fridge odors",
    "Clean fans monthly to reduce dust",
    "Use microfiber cloths for glass cleaning",
];

/// Pick one candidate uniformly at random
///
/// Returns `None` only when `candidates` is empty.
pub fn pick_tip<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}

/// The tip chosen for this session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TipOfDay(&'static str);

impl TipOfDay {
    /// Draw today's tip from the built-in list using the thread RNG
    #[must_use]
    pub fn pick() -> Self {
        Self::pick_with(&mut rand::thread_rng())
    }

    /// Draw today's tip from the built-in list using `rng`
    pub fn pick_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // TIPS is a non-empty const array, so the fallback is never taken
        Self(pick_tip(&TIPS, rng).copied().unwrap_or(TIPS[0]))
    }

    /// The tip text
    #[must_use]
    pub const fn text(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for TipOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
