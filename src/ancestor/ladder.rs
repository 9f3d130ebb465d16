//! Ladder (doubled long-path) level-ancestor index.

use crate::ancestor::decomposition::PathDecomposition;
use crate::ancestor::LevelAncestor;
use crate::tree::{NodeId, Tree};

/// Level-ancestor index over ladders.
///
/// Identical climb to [`LongPathIndex`](crate::ancestor::LongPathIndex),
/// but each path of length `L` is extended upward by up to `L` borrowed
/// ancestors. A node on a path of length `L` therefore reaches all of its
/// nearest `L` ancestors without leaving the ladder, so every hop at least
/// doubles the length of the path under the cursor and the climb takes at
/// most O(log n) hops. Build stays O(n).
#[derive(Debug, Clone)]
pub struct LadderIndex {
    decomposition: PathDecomposition,
}

impl LadderIndex {
    /// Decompose `tree` into long paths and double them into ladders.
    pub fn build(tree: &Tree) -> Self {
        Self {
            decomposition: PathDecomposition::with_ladders(tree),
        }
    }
}

impl LevelAncestor for LadderIndex {
    fn level_ancestor(&self, node: NodeId, k: usize) -> Option<NodeId> {
        self.decomposition.climb(node, k)
    }
}
