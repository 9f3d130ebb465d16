//! Greedy path decomposition shared by the non-naive indices.
//!
//! The tree is cut into vertical paths, each running from some ancestor
//! down to a leaf. Leaves are processed in descending order of depth and
//! each walks upward, absorbing parents until it reaches a node already
//! claimed by an earlier (deeper) leaf. The earliest paths are therefore
//! the longest, which is what bounds the climb in
//! [`LongPathIndex`](crate::ancestor::LongPathIndex) and
//! [`LadderIndex`](crate::ancestor::LadderIndex).
//!
//! With the ladder extension, each path of length `L` is prepended with up
//! to `L` proper ancestors (stopping at the root). The bottom `L` slots of
//! a ladder coincide with the path; the borrowed top slots stay owned by
//! their own paths. Doubling guarantees that for any node `v` on the path,
//! every ancestor within `L − 1` edges is still inside the ladder.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::tree::{NodeId, Tree};

/// A tree cut into leaf-rooted paths, optionally doubled into ladders.
///
/// `paths[path_index[v]][node_index[v]] == v` for every node `v`; indices
/// inside a path run top-to-leaf. With ladders, `node_index` is relative
/// to the ladder (offset by the borrowed prefix) and only path-owned nodes
/// carry an entry for the ladder they live in.
#[derive(Debug, Clone)]
pub(crate) struct PathDecomposition {
    pub(crate) paths: Vec<Vec<NodeId>>,
    pub(crate) path_index: FxHashMap<NodeId, usize>,
    pub(crate) node_index: FxHashMap<NodeId, usize>,
    parents: FxHashMap<NodeId, Option<NodeId>>,
}

impl PathDecomposition {
    /// Decompose `tree` into plain long paths.
    pub(crate) fn new(tree: &Tree) -> Self {
        Self::build(tree, false)
    }

    /// Decompose `tree` and double every path into a ladder.
    pub(crate) fn with_ladders(tree: &Tree) -> Self {
        Self::build(tree, true)
    }

    fn build(tree: &Tree, ladders: bool) -> Self {
        let sorted_leaves = leaves_by_depth_descending(tree);

        let mut paths: Vec<Vec<NodeId>> = Vec::with_capacity(sorted_leaves.len());
        let mut path_index = FxHashMap::default();
        let mut node_index = FxHashMap::default();
        let mut marked: FxHashSet<NodeId> = FxHashSet::default();

        for leaf in sorted_leaves {
            let current = paths.len();

            // Climb from the leaf, claiming nodes until one is already
            // owned by an earlier path (or the walk leaves the root).
            let mut walked = Vec::new();
            let mut cursor = Some(leaf);
            while let Some(node) = cursor {
                if !marked.insert(node) {
                    break;
                }
                walked.push(node);
                path_index.insert(node, current);
                cursor = tree.parent(node);
            }

            let path_len = walked.len();
            if ladders {
                // Borrow up to `path_len` further ancestors; they keep the
                // path_index / node_index of the path that owns them.
                while walked.len() < 2 * path_len {
                    match cursor {
                        Some(node) => {
                            walked.push(node);
                            cursor = tree.parent(node);
                        }
                        None => break,
                    }
                }
            }

            let stair_len = walked.len();
            let offset = stair_len - path_len;
            walked.reverse();
            for (position, &node) in walked.iter().enumerate().skip(offset) {
                node_index.insert(node, position);
            }
            paths.push(walked);
        }

        Self {
            paths,
            path_index,
            node_index,
            parents: tree.parent_map().clone(),
        }
    }

    /// `(path_index, node_index)` of `node`, if it is part of the tree.
    pub(crate) fn position(&self, node: NodeId) -> Option<(usize, usize)> {
        Some((
            *self.path_index.get(&node)?,
            *self.node_index.get(&node)?,
        ))
    }

    /// Parent of `node`; `None` for the root.
    pub(crate) fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied().flatten()
    }

    /// Answer `LA(node, k)` by climbing from path to path.
    ///
    /// If the ancestor lies within the current path (`k <= node_index`),
    /// it is a direct lookup; otherwise consume the `node_index + 1` edges
    /// up to and past the path's top and continue from the top's parent.
    /// Reaching the root with edges still to consume means `k` exceeds the
    /// depth of `node`.
    pub(crate) fn climb(&self, node: NodeId, k: usize) -> Option<NodeId> {
        let mut node = node;
        let mut k = k;
        loop {
            let (path, position) = self.position(node)?;
            if k <= position {
                return Some(self.paths[path][position - k]);
            }
            let top = self.paths[path][0];
            k -= position + 1;
            node = self.parent(top)?;
        }
    }
}

/// Leaves of `tree`, deepest first, in linear time.
///
/// One bucket per depth; reading the buckets deepest-first yields the
/// descending order the greedy decomposition relies on.
fn leaves_by_depth_descending(tree: &Tree) -> Vec<NodeId> {
    let mut buckets: Vec<Vec<NodeId>> = vec![Vec::new(); tree.tree_height() + 1];
    for &node in tree.nodes() {
        if tree.height(node) != Some(0) {
            continue;
        }
        if let Some(depth) = tree.depth(node) {
            buckets[depth].push(node);
        }
    }

    let mut sorted = Vec::new();
    for bucket in buckets.iter().rev() {
        sorted.extend_from_slice(bucket);
    }
    sorted
}
