//! Rooted trees and the `node parent` input format.
//!
//! Every level-ancestor index is built from a [`Tree`]: an immutable rooted
//! tree exposing the node list, the parent map, per-node depth and height,
//! the root and the tree height. Construction validates the shape once, so
//! index builds can trust the structure unconditionally.
//!
//! # Input format
//!
//! [`Tree::load`] and [`Tree::from_reader`] parse whitespace-separated
//! `node parent` pairs, terminated by EOF. The root is the single entry
//! whose parent is `-1`. Node identifiers are non-negative integers; there
//! is no header and there are no comments.
//!
//! ```text
//! 0 -1
//! 1 0
//! 2 0
//! 3 1
//! ```
//!
//! ```rust
//! use liblevelancestor::tree::Tree;
//!
//! let tree = Tree::from_reader("0 -1  1 0  2 0  3 1".as_bytes()).unwrap();
//! assert_eq!(tree.root(), 0);
//! assert_eq!(tree.depth(3), Some(2));
//! assert_eq!(tree.height(0), Some(2));
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Identifier of a tree node.
///
/// The absence of a node (the root's parent, an ancestor beyond the root)
/// is `Option::<NodeId>::None`; the input file spells it `-1`.
pub type NodeId = usize;

/// Errors raised while loading or validating a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Reading the input failed.
    #[error("failed to read tree input: {0}")]
    Io(#[from] std::io::Error),

    /// A token was not a valid integer, or a node id was negative.
    #[error("malformed token {token:?} in tree input")]
    MalformedToken {
        /// The offending token.
        token: String,
    },

    /// The input ended in the middle of a `node parent` pair.
    #[error("node {node} has no parent entry (odd token count)")]
    MissingParent {
        /// The node whose parent entry is missing.
        node: NodeId,
    },

    /// The same node was declared twice.
    #[error("node {node} is declared more than once")]
    DuplicateNode {
        /// The duplicated node.
        node: NodeId,
    },

    /// No entry declared parent `-1`.
    #[error("no root: no node has parent -1")]
    MissingRoot,

    /// More than one entry declared parent `-1`.
    #[error("multiple roots: {first} and {second} both have parent -1")]
    MultipleRoots {
        /// The first root encountered.
        first: NodeId,
        /// The second root encountered.
        second: NodeId,
    },

    /// A parent reference names a node that was never declared.
    #[error("node {node} names undeclared parent {parent}")]
    UnknownParent {
        /// The child node.
        node: NodeId,
        /// The undeclared parent it references.
        parent: NodeId,
    },

    /// A node is not reachable from the root (the parent relation has a
    /// cycle or a second component).
    #[error("node {node} is not reachable from the root")]
    Unreachable {
        /// A node outside the root's component.
        node: NodeId,
    },
}

/// An immutable rooted tree.
///
/// Nodes are identified by arbitrary non-negative integers; ids need not be
/// dense, so every per-node attribute is a keyed map. Depth and height are
/// precomputed at construction: `depth(root) == 0`, `height(leaf) == 0`,
/// and `height(v) == 1 + max(height of children of v)` for interior nodes.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<NodeId>,
    parents: FxHashMap<NodeId, Option<NodeId>>,
    depths: FxHashMap<NodeId, usize>,
    heights: FxHashMap<NodeId, usize>,
    root: NodeId,
    tree_height: usize,
}

impl Tree {
    /// Build a tree from `(node, parent)` pairs.
    ///
    /// Exactly one pair must carry `None` as its parent (the root). Every
    /// named parent must itself be declared, and every node must be
    /// reachable from the root.
    pub fn from_edges<I>(pairs: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (NodeId, Option<NodeId>)>,
    {
        let mut nodes = Vec::new();
        let mut parents: FxHashMap<NodeId, Option<NodeId>> = FxHashMap::default();
        let mut root = None;

        for (node, parent) in pairs {
            if parents.insert(node, parent).is_some() {
                return Err(TreeError::DuplicateNode { node });
            }
            nodes.push(node);
            if parent.is_none() {
                match root {
                    None => root = Some(node),
                    Some(first) => {
                        return Err(TreeError::MultipleRoots {
                            first,
                            second: node,
                        })
                    }
                }
            }
        }

        let root = root.ok_or(TreeError::MissingRoot)?;

        let mut children: FxHashMap<NodeId, Vec<NodeId>> = FxHashMap::default();
        for (&node, &parent) in &parents {
            if let Some(parent) = parent {
                if !parents.contains_key(&parent) {
                    return Err(TreeError::UnknownParent { node, parent });
                }
                children.entry(parent).or_default().push(node);
            }
        }

        // Top-down pass assigns depths; the reverse order then yields
        // heights bottom-up, since children always follow their parent.
        let mut depths = FxHashMap::default();
        let mut order = Vec::with_capacity(nodes.len());
        let mut frontier = vec![root];
        depths.insert(root, 0usize);
        while let Some(node) = frontier.pop() {
            order.push(node);
            let depth = depths[&node];
            if let Some(kids) = children.get(&node) {
                for &child in kids {
                    depths.insert(child, depth + 1);
                    frontier.push(child);
                }
            }
        }

        if order.len() < nodes.len() {
            for &node in &nodes {
                if !depths.contains_key(&node) {
                    return Err(TreeError::Unreachable { node });
                }
            }
        }

        let mut heights: FxHashMap<NodeId, usize> = FxHashMap::default();
        for &node in order.iter().rev() {
            let height = children
                .get(&node)
                .into_iter()
                .flatten()
                .map(|child| heights[child] + 1)
                .max()
                .unwrap_or(0);
            heights.insert(node, height);
        }

        let tree_height = heights[&root];

        Ok(Self {
            nodes,
            parents,
            depths,
            heights,
            root,
            tree_height,
        })
    }

    /// Parse a tree from whitespace-separated `node parent` pairs.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, TreeError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let mut pairs = Vec::new();
        let mut tokens = text.split_whitespace();
        while let Some(token) = tokens.next() {
            let node = parse_node(token)?;
            let parent_token = tokens.next().ok_or(TreeError::MissingParent { node })?;
            let parent = parse_parent(parent_token)?;
            pairs.push((node, parent));
        }

        Self::from_edges(pairs)
    }

    /// Load a tree from a file of `node parent` pairs.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// All nodes, in declaration order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The parent of `node`, or `None` for the root or an unknown node.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied().flatten()
    }

    /// Whether `node` belongs to this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// Distance from the root (`depth(root) == 0`), or `None` for an
    /// unknown node.
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.depths.get(&node).copied()
    }

    /// Distance to the deepest leaf below (`height(leaf) == 0`), or `None`
    /// for an unknown node.
    pub fn height(&self, node: NodeId) -> Option<usize> {
        self.heights.get(&node).copied()
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Height of the whole tree: `height(root)`.
    pub fn tree_height(&self) -> usize {
        self.tree_height
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn parent_map(&self) -> &FxHashMap<NodeId, Option<NodeId>> {
        &self.parents
    }
}

fn parse_node(token: &str) -> Result<NodeId, TreeError> {
    token.parse::<NodeId>().map_err(|_| TreeError::MalformedToken {
        token: token.to_owned(),
    })
}

fn parse_parent(token: &str) -> Result<Option<NodeId>, TreeError> {
    if token == "-1" {
        return Ok(None);
    }
    parse_node(token).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_root_marker() {
        let tree = Tree::from_reader("0 -1 1 0 2 0 3 1".as_bytes()).unwrap();
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.parent(0), None);
        assert_eq!(tree.parent(3), Some(1));
    }

    #[test]
    fn accepts_newline_and_mixed_whitespace() {
        let tree = Tree::from_reader("5 -1\n7 5\n\t9  7\n".as_bytes()).unwrap();
        assert_eq!(tree.root(), 5);
        assert_eq!(tree.depth(9), Some(2));
    }

    #[test]
    fn depths_and_heights_are_consistent() {
        // 0 -> {1, 2}, 1 -> {3, 4}, 2 -> {5, 6}
        let tree = Tree::from_reader("0 -1 1 0 2 0 3 1 4 1 5 2 6 2".as_bytes()).unwrap();
        assert_eq!(tree.depth(0), Some(0));
        assert_eq!(tree.depth(4), Some(2));
        assert_eq!(tree.height(4), Some(0));
        assert_eq!(tree.height(1), Some(1));
        assert_eq!(tree.height(0), Some(2));
        assert_eq!(tree.tree_height(), 2);
    }

    #[test]
    fn sparse_ids_are_allowed() {
        let tree = Tree::from_reader("100 -1 2000 100 30000 2000".as_bytes()).unwrap();
        assert_eq!(tree.depth(30000), Some(2));
        assert!(!tree.contains(0));
    }

    #[test]
    fn rejects_missing_root() {
        assert!(matches!(
            Tree::from_reader("1 2 2 1".as_bytes()),
            Err(TreeError::MissingRoot) | Err(TreeError::Unreachable { .. })
        ));
    }

    #[test]
    fn rejects_multiple_roots() {
        assert!(matches!(
            Tree::from_reader("0 -1 1 -1".as_bytes()),
            Err(TreeError::MultipleRoots { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_node() {
        assert!(matches!(
            Tree::from_reader("0 -1 1 0 1 0".as_bytes()),
            Err(TreeError::DuplicateNode { node: 1 })
        ));
    }

    #[test]
    fn rejects_unknown_parent() {
        assert!(matches!(
            Tree::from_reader("0 -1 1 9".as_bytes()),
            Err(TreeError::UnknownParent { node: 1, parent: 9 })
        ));
    }

    #[test]
    fn rejects_cycle_as_unreachable() {
        assert!(matches!(
            Tree::from_reader("0 -1 1 2 2 1".as_bytes()),
            Err(TreeError::Unreachable { .. })
        ));
    }

    #[test]
    fn rejects_odd_token_count() {
        assert!(matches!(
            Tree::from_reader("0 -1 1".as_bytes()),
            Err(TreeError::MissingParent { node: 1 })
        ));
    }

    #[test]
    fn rejects_garbage_token() {
        assert!(matches!(
            Tree::from_reader("0 -1 x 0".as_bytes()),
            Err(TreeError::MalformedToken { .. })
        ));
    }

    #[test]
    fn single_node_tree() {
        let tree = Tree::from_reader("0 -1".as_bytes()).unwrap();
        assert_eq!(tree.root(), 0);
        assert_eq!(tree.depth(0), Some(0));
        assert_eq!(tree.height(0), Some(0));
        assert_eq!(tree.tree_height(), 0);
    }
}
