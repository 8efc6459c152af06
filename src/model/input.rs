// Input snapshots for a search run

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Which kind of input an algorithm consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Family {
    /// Ordered sequence of integers plus a target value
    #[strum(to_string = "array")]
    Array,
    /// Text plus a pattern to locate inside it
    #[strum(to_string = "text")]
    Text,
}

/// Immutable input for one run.
///
/// Constructors copy the caller's buffers, so mutating the original slice or
/// string after `start` cannot affect a search in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchInput {
    Array { values: Vec<i32>, target: i32 },
    Text { text: Vec<char>, pattern: Vec<char> },
}

impl SearchInput {
    /// Snapshot an array and the value to look for
    pub fn array(values: &[i32], target: i32) -> Self {
        SearchInput::Array {
            values: values.to_vec(),
            target,
        }
    }

    /// Snapshot a text and the pattern to look for
    pub fn text(text: &str, pattern: &str) -> Self {
        SearchInput::Text {
            text: text.chars().collect(),
            pattern: pattern.chars().collect(),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            SearchInput::Array { .. } => Family::Array,
            SearchInput::Text { .. } => Family::Text,
        }
    }

    /// Length of the searched sequence (array length or text length)
    pub fn len(&self) -> usize {
        match self {
            SearchInput::Array { values, .. } => values.len(),
            SearchInput::Text { text, .. } => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
