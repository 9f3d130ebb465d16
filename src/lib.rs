//! # liblevelancestor
//!
//! Offline preprocessing structures over immutable trees and strings, each
//! supporting one fast query:
//!
//! - **Level ancestor**: given a rooted [`Tree`](tree::Tree), answer
//!   `LA(v, k)` — the ancestor of `v` lying `k` edges above it. Four
//!   indices of increasing sophistication are provided:
//!
//!   | Index | Build | Query |
//!   |-------|-------|-------|
//!   | [`NaiveIndex`](ancestor::NaiveIndex) | O(n·h) | O(1) |
//!   | [`LongPathIndex`](ancestor::LongPathIndex) | O(n) | O(√n) |
//!   | [`LadderIndex`](ancestor::LadderIndex) | O(n) | O(log n) |
//!   | [`LadderJumpIndex`](ancestor::LadderJumpIndex) | O(n log n) | O(1) |
//!
//! - **Suffix automaton**: the minimal deterministic automaton recognising
//!   every factor of a string, built online in linear time
//!   ([`SuffixAutomaton`](suffix::SuffixAutomaton)).
//!
//! ## Example
//!
//! ```rust
//! use liblevelancestor::prelude::*;
//!
//! let tree = Tree::from_edges([
//!     (0, None),
//!     (1, Some(0)),
//!     (2, Some(1)),
//! ]).unwrap();
//!
//! let index = LadderJumpIndex::build(&tree);
//! assert_eq!(index.level_ancestor(2, 2), Some(0));
//! assert_eq!(index.level_ancestor(2, 3), None);
//!
//! let sam = SuffixAutomaton::from_text("abb");
//! assert!(sam.contains_factor("ab"));
//! assert!(!sam.contains_factor("ba"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ancestor;
pub mod suffix;
pub mod tree;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::ancestor::{
        LadderIndex, LadderJumpIndex, LevelAncestor, LongPathIndex, NaiveIndex,
    };
    pub use crate::suffix::SuffixAutomaton;
    pub use crate::tree::{NodeId, Tree, TreeError};
}
