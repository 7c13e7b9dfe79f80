//! Analysis passes
//!
//! The three passes are independent and hold no state between calls:
//! - `ranker` - Stable merge sort of transactions by amount
//! - `pattern_matcher` - Rabin-Karp substring search
//! - `shortest_path` - Dijkstra over a non-negative weighted directed graph

pub mod pattern_matcher;
pub mod ranker;
pub mod shortest_path;

pub use pattern_matcher::{contains_pattern, find_pattern_offsets, HashParams, PatternMatcher};
pub use ranker::{rank, rank_by, top_by_amount, top_of};
pub use shortest_path::shortest_paths;
