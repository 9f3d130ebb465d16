//! Long-path decomposition level-ancestor index.

use crate::ancestor::decomposition::PathDecomposition;
use crate::ancestor::LevelAncestor;
use crate::tree::{NodeId, Tree};

/// Level-ancestor index over the plain long-path decomposition.
///
/// A query either lands inside the node's own path (one lookup) or hops to
/// the parent of the path's top and retries there. A hop from a path of
/// length `L` can only land on a path created earlier, hence of length
/// ≥ `L`; in the worst case the climb visits O(√n) paths. Build is O(n).
#[derive(Debug, Clone)]
pub struct LongPathIndex {
    decomposition: PathDecomposition,
}

impl LongPathIndex {
    /// Decompose `tree` into long paths.
    pub fn build(tree: &Tree) -> Self {
        Self {
            decomposition: PathDecomposition::new(tree),
        }
    }
}

impl LevelAncestor for LongPathIndex {
    fn level_ancestor(&self, node: NodeId, k: usize) -> Option<NodeId> {
        self.decomposition.climb(node, k)
    }
}
