// Resumable cursor positions

use serde::Serialize;

/// The loop-carried variables that fully determine the next unit of work.
///
/// Re-invoking `advance` on a machine whose cursor equals this value makes
/// exactly the comparison the uninterrupted algorithm would make next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cursor {
    /// Run not started yet
    Idle,

    /// Linear search: index being examined
    Linear { index: usize },

    /// Inclusive range of a binary search (also exponential search's second
    /// phase). `right` goes negative when the range empties on the left.
    Range {
        left: isize,
        right: isize,
        mid: Option<usize>,
    },

    /// Jump search: last block end below the target, current jump index, and
    /// the scan position once the block is selected
    Jump {
        prev: usize,
        jump_index: usize,
        scan: Option<usize>,
    },

    /// Exponential search doubling phase
    Doubling { bound: usize },

    /// KMP failure-function construction. `j` is part of the pause point
    /// because a mismatch retry changes `j` without touching `i`.
    FailureFunction { i: usize, j: usize },

    /// Boyer-Moore bad-character table construction
    BadCharacter { i: usize },

    /// String matching. Naive search reports the alignment start as
    /// `text_index`, KMP the text position being compared, and Boyer-Moore
    /// the text position aligned with the last pattern character.
    Text {
        text_index: usize,
        pattern_index: usize,
    },

    Finished,
}
