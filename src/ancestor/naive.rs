//! Full-table level-ancestor index.

use rustc_hash::FxHashMap;

use crate::ancestor::LevelAncestor;
use crate::tree::{NodeId, Tree};

/// Level-ancestor index storing the complete ancestor list of every node.
///
/// `table[v]` lists `v` itself at position 0, its parent at position 1 and
/// so on up to the root, so a query is one bounds check and one lookup.
/// Building costs O(n·h) time and memory, which makes this the oracle the
/// cheaper indices are tested against rather than the index to deploy.
#[derive(Debug, Clone)]
pub struct NaiveIndex {
    table: FxHashMap<NodeId, Vec<NodeId>>,
    depths: FxHashMap<NodeId, usize>,
}

impl NaiveIndex {
    /// Tabulate every ancestor of every node of `tree`.
    pub fn build(tree: &Tree) -> Self {
        let mut table: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
        let mut depths = FxHashMap::default();

        for &node in tree.nodes() {
            if let Some(depth) = tree.depth(node) {
                depths.insert(node, depth);
            }
            let mut ancestors = Vec::new();
            let mut cursor = Some(node);
            while let Some(ancestor) = cursor {
                ancestors.push(ancestor);
                cursor = tree.parent(ancestor);
            }
            table.insert(node, ancestors);
        }

        Self { table, depths }
    }
}

impl LevelAncestor for NaiveIndex {
    fn level_ancestor(&self, node: NodeId, k: usize) -> Option<NodeId> {
        let depth = *self.depths.get(&node)?;
        if k > depth {
            return None;
        }
        self.table.get(&node).map(|ancestors| ancestors[k])
    }
}
