//! Trait definitions with mockall annotations for testing
//!
//! The dialogue controller never reaches for an ambient random source.
//! Phrase and delay selection go through [`ChoiceSource`] so callers can
//! inject a seeded generator and tests can pin exact choices.

/// Source of cosmetic randomness for phrasing and pacing
///
/// Choices made through this trait must never influence state transitions.
#[mockall::automock]
pub trait ChoiceSource {
    /// Pick an index in `0..len`
    ///
    /// # Parameters
    /// - `len`: Size of the pool, always greater than zero
    fn pick(&mut self, len: usize) -> usize;

    /// Pick a delay in milliseconds within `[min_ms, max_ms)`
    ///
    /// Returns `min_ms` when the window is empty.
    fn delay_between(&mut self, min_ms: u64, max_ms: u64) -> u64;
}
