//! Truncation windows applied to reference sequences before k-mer extraction.
//!
//! The clamp is deliberately narrow: a negative `start` becomes `0` and an
//! `end` past the sequence becomes the sequence length. An `end` of `0` is
//! taken literally, so the default window `[1, 0)` selects nothing.

use serde::{Deserialize, Serialize};

/// Default window start
pub const DEFAULT_WINDOW_START: i64 = 1;

/// Default window end (literal, not "end of sequence")
pub const DEFAULT_WINDOW_END: i64 = 0;

/// Requested `[start, end)` bounds, before clamping to a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncationWindow {
    pub start: i64,
    pub end: i64,
}

impl Default for TruncationWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
        }
    }
}

/// Window bounds after clamping against one sequence length.
///
/// `start` may exceed `end`, in which case the window is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveWindow {
    pub start: usize,
    pub end: usize,
}

impl TruncationWindow {
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Clamp the window against a sequence of `len` bases.
    #[must_use]
    pub fn clamp(&self, len: usize) -> EffectiveWindow {
        let start = usize::try_from(self.start).unwrap_or(0);
        // A negative end cannot select anything
        let end = usize::try_from(self.end).unwrap_or(0).min(len);
        EffectiveWindow { start, end }
    }

    /// Apply the window to a sequence, returning the selected bases.
    #[must_use]
    pub fn apply<'a>(&self, sequence: &'a [u8]) -> &'a [u8] {
        self.clamp(sequence.len()).slice(sequence)
    }
}

impl EffectiveWindow {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Slice `sequence` by this window; empty when the window is empty.
    #[must_use]
    pub fn slice<'a>(&self, sequence: &'a [u8]) -> &'a [u8] {
        if self.is_empty() || self.start >= sequence.len() {
            return &[];
        }
        &sequence[self.start..self.end.min(sequence.len())]
    }
}

impl std::fmt::Display for EffectiveWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}
