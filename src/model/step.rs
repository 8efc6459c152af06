// Step records emitted by the engines

use crate::model::cursor::Cursor;
use serde::Serialize;
use std::fmt;
use strum_macros::Display;

/// Coarse stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Phase {
    NotStarted,
    /// Building a lookup table (KMP failure function, Boyer-Moore shifts)
    Preprocessing,
    Searching,
    Done,
}

/// How a highlighted position should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Role {
    Current,
    Compare,
    Match,
    Mismatch,
    RangeBoundary,
    Found,
    NotFound,
}

/// Which sequence a highlighted index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Lane {
    Array,
    Text,
    Pattern,
    /// Index into the failure function or bad-character table
    Table,
}

/// A single highlighted position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Highlight {
    pub lane: Lane,
    pub index: usize,
    pub role: Role,
}

impl Highlight {
    pub fn new(lane: Lane, index: usize, role: Role) -> Self {
        Highlight { lane, index, role }
    }
}

/// Snapshot of a preprocessing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TableView {
    /// KMP failure function, one entry per pattern position
    Failure(Vec<usize>),
    /// Boyer-Moore bad-character shifts, sorted by character
    BadCharacter(Vec<(char, usize)>),
}

/// Structured extra data attached to a step.
///
/// These are the richer views of the same step that a renderer may want:
/// a search range for binary and exponential search, or the table under
/// construction for KMP and Boyer-Moore.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum StepDetail {
    #[default]
    None,
    /// Inclusive index range currently under consideration
    Range {
        left: usize,
        right: usize,
        mid: Option<usize>,
    },
    Table { table: TableView, complete: bool },
}

/// One externally visible unit of progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Starts at 1 and increases by exactly 1 per step within a run
    pub number: usize,
    pub phase: Phase,
    pub description: String,
    pub highlights: Vec<Highlight>,
    pub detail: StepDetail,
    /// Where the run stands after this step
    pub cursor: Cursor,
}

impl Step {
    /// Indices highlighted on `lane` with `role`, in emission order
    pub fn positions(&self, lane: Lane, role: Role) -> Vec<usize> {
        self.highlights
            .iter()
            .filter(|h| h.lane == lane && h.role == role)
            .map(|h| h.index)
            .collect()
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        let table_size = match &self.detail {
            StepDetail::Table {
                table: TableView::Failure(entries),
                ..
            } => entries.len() * std::mem::size_of::<usize>(),
            StepDetail::Table {
                table: TableView::BadCharacter(entries),
                ..
            } => entries.len() * std::mem::size_of::<(char, usize)>(),
            _ => 0,
        };

        std::mem::size_of::<Step>()
            + self.description.len()
            + self.highlights.len() * std::mem::size_of::<Highlight>()
            + table_size
    }
}

/// Final outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchResult {
    FoundAt(usize),
    NotFound,
}

impl SearchResult {
    pub fn index(self) -> Option<usize> {
        match self {
            SearchResult::FoundAt(index) => Some(index),
            SearchResult::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, SearchResult::FoundAt(_))
    }
}

impl From<Option<usize>> for SearchResult {
    fn from(index: Option<usize>) -> Self {
        index.map_or(SearchResult::NotFound, SearchResult::FoundAt)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::FoundAt(index) => write!(f, "Found at index {}", index),
            SearchResult::NotFound => write!(f, "Not found"),
        }
    }
}
