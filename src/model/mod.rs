//! Data model shared by every search engine
//!
//! This module provides the plain values that flow between the engines and
//! whatever renders them:
//! - [`input`]: the immutable [`SearchInput`] snapshot taken when a run starts
//! - [`step`]: [`Step`] records, highlight roles and the terminal [`SearchResult`]
//! - [`cursor`]: the [`Cursor`] describing exactly where a run is paused
//!
//! None of these types carry rendering concerns. A renderer maps [`Role`] and
//! [`Lane`] onto its own colours and widgets.

pub mod cursor;
pub mod input;
pub mod step;

pub use cursor::Cursor;
pub use input::{Family, SearchInput};
pub use step::{Highlight, Lane, Phase, Role, SearchResult, Step, StepDetail, TableView};
