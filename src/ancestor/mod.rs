//! Level-ancestor indices.
//!
//! A level-ancestor index answers `LA(v, k)`: the ancestor of `v` lying
//! `k` edges above it (`k == 0` is `v` itself). Four indices trade
//! preprocessing for query time:
//!
//! | Index | Build | Query | Idea |
//! |-------|-------|-------|------|
//! | [`NaiveIndex`] | O(n·h) | O(1) | full ancestor table per node |
//! | [`LongPathIndex`] | O(n) | O(√n) | greedy long-path decomposition |
//! | [`LadderIndex`] | O(n) | O(log n) | long paths doubled into ladders |
//! | [`LadderJumpIndex`] | O(n log n) | O(1) | ladders + 2^k jumps at leaves |
//!
//! All indices answer every valid query identically; they differ only in
//! cost. Each is built once from a [`Tree`](crate::tree::Tree) and is
//! immutable afterwards, so queries are plain `&self` reads and safe to
//! issue from any number of threads.
//!
//! ```rust
//! use liblevelancestor::prelude::*;
//!
//! let tree = Tree::from_reader("0 -1 1 0 2 1 3 2".as_bytes()).unwrap();
//! let ladder = LadderIndex::build(&tree);
//!
//! assert_eq!(ladder.level_ancestor(3, 0), Some(3));
//! assert_eq!(ladder.level_ancestor(3, 2), Some(1));
//! assert_eq!(ladder.level_ancestor(3, 4), None); // past the root
//! ```

mod decomposition;
mod ladder;
mod ladder_jump;
mod long_path;
mod naive;

pub use ladder::LadderIndex;
pub use ladder_jump::LadderJumpIndex;
pub use long_path::LongPathIndex;
pub use naive::NaiveIndex;

use crate::tree::NodeId;

/// Common query surface of every level-ancestor index.
pub trait LevelAncestor {
    /// The ancestor of `node` lying `k` edges above it.
    ///
    /// Returns `Some(node)` for `k == 0`, and `None` when `k` exceeds the
    /// depth of `node` or `node` is not part of the indexed tree.
    fn level_ancestor(&self, node: NodeId, k: usize) -> Option<NodeId>;
}
