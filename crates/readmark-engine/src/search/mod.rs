//! # Search
//!
//! Finds a query in an article's plain text and maps the hits back onto
//! blocks so each rendered block highlights only its own matches.
//!
//! - **`matcher`**: `find_matches` over the plain-text corpus
//! - **`grouping`**: `group_by_bounds` partitioning matches per block
//! - **`session`**: `SearchSession` with a focused match and next/previous
//!   navigation

pub mod grouping;
pub mod matcher;
pub mod session;

pub use grouping::group_by_bounds;
pub use matcher::{SearchMatch, SearchOptions, find_matches};
pub use session::{FocusedMatch, SearchSession};
