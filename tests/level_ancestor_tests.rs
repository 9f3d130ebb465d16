//! Scenario tests for the four level-ancestor indices.
//!
//! Every test runs against all variants; they must agree with each other
//! on every valid query and return `None` past the root.

use liblevelancestor::prelude::*;

fn chain_of_six() -> Tree {
    Tree::from_reader("0 -1 1 0 2 1 3 2 4 3 5 4".as_bytes()).unwrap()
}

fn balanced_binary() -> Tree {
    // root 0, children {1, 2}; 1 -> {3, 4}; 2 -> {5, 6}
    Tree::from_reader("0 -1 1 0 2 0 3 1 4 1 5 2 6 2".as_bytes()).unwrap()
}

/// Run `check` against every index variant.
fn for_each_index(tree: &Tree, check: impl Fn(&str, &dyn LevelAncestor)) {
    check("naive", &NaiveIndex::build(tree));
    check("long-path", &LongPathIndex::build(tree));
    check("ladder", &LadderIndex::build(tree));
    check("ladder-jump", &LadderJumpIndex::build(tree));
}

#[test]
fn chain_answers_along_the_path() {
    let tree = chain_of_six();
    for_each_index(&tree, |name, index| {
        assert_eq!(index.level_ancestor(5, 0), Some(5), "{name}");
        assert_eq!(index.level_ancestor(5, 1), Some(4), "{name}");
        assert_eq!(index.level_ancestor(5, 5), Some(0), "{name}");
        assert_eq!(index.level_ancestor(5, 6), None, "{name}");
    });
}

#[test]
fn balanced_binary_answers() {
    let tree = balanced_binary();
    for_each_index(&tree, |name, index| {
        assert_eq!(index.level_ancestor(4, 1), Some(1), "{name}");
        assert_eq!(index.level_ancestor(4, 2), Some(0), "{name}");
        assert_eq!(index.level_ancestor(6, 2), Some(0), "{name}");
        assert_eq!(index.level_ancestor(3, 0), Some(3), "{name}");
    });
}

#[test]
fn every_node_reaches_the_root_at_its_depth() {
    let tree = balanced_binary();
    for_each_index(&tree, |name, index| {
        for &node in tree.nodes() {
            let depth = tree.depth(node).unwrap();
            assert_eq!(
                index.level_ancestor(node, depth),
                Some(tree.root()),
                "{name}: node {node}"
            );
            assert_eq!(index.level_ancestor(node, depth + 1), None, "{name}: node {node}");
        }
    });
}

#[test]
fn parent_queries_match_the_tree() {
    let tree = chain_of_six();
    for_each_index(&tree, |name, index| {
        for &node in tree.nodes() {
            if let Some(parent) = tree.parent(node) {
                assert_eq!(index.level_ancestor(node, 1), Some(parent), "{name}");
            }
        }
    });
}

#[test]
fn single_node_tree() {
    let tree = Tree::from_reader("0 -1".as_bytes()).unwrap();
    for_each_index(&tree, |name, index| {
        assert_eq!(index.level_ancestor(0, 0), Some(0), "{name}");
        assert_eq!(index.level_ancestor(0, 1), None, "{name}");
    });
}

#[test]
fn star_tree() {
    let tree = Tree::from_reader("0 -1 1 0 2 0 3 0 4 0 5 0".as_bytes()).unwrap();
    for_each_index(&tree, |name, index| {
        for leaf in 1..=5 {
            assert_eq!(index.level_ancestor(leaf, 1), Some(0), "{name}");
            assert_eq!(index.level_ancestor(leaf, 2), None, "{name}");
        }
    });
}

#[test]
fn unknown_nodes_answer_none() {
    let tree = chain_of_six();
    for_each_index(&tree, |name, index| {
        assert_eq!(index.level_ancestor(42, 0), None, "{name}");
        assert_eq!(index.level_ancestor(42, 3), None, "{name}");
    });
}

#[test]
fn sparse_node_ids() {
    let tree = Tree::from_reader("10 -1 200 10 3000 200 40000 3000".as_bytes()).unwrap();
    for_each_index(&tree, |name, index| {
        assert_eq!(index.level_ancestor(40000, 2), Some(200), "{name}");
        assert_eq!(index.level_ancestor(40000, 3), Some(10), "{name}");
        assert_eq!(index.level_ancestor(40000, 4), None, "{name}");
    });
}

#[test]
fn variants_agree_on_a_bushy_tree() {
    // A spine with branches of mixed lengths hanging off every node.
    let tree = Tree::from_reader(
        "0 -1 1 0 2 1 3 2 4 3 5 4 6 5 \
         7 1 8 7 9 8 \
         10 3 11 10 \
         12 5 13 0 14 13 15 14 16 15"
            .as_bytes(),
    )
    .unwrap();

    let naive = NaiveIndex::build(&tree);
    let long_path = LongPathIndex::build(&tree);
    let ladder = LadderIndex::build(&tree);
    let ladder_jump = LadderJumpIndex::build(&tree);

    for &node in tree.nodes() {
        let depth = tree.depth(node).unwrap();
        for k in 0..=depth + 2 {
            let expected = naive.level_ancestor(node, k);
            assert_eq!(long_path.level_ancestor(node, k), expected, "long-path {node} {k}");
            assert_eq!(ladder.level_ancestor(node, k), expected, "ladder {node} {k}");
            assert_eq!(
                ladder_jump.level_ancestor(node, k),
                expected,
                "ladder-jump {node} {k}"
            );
        }
    }
}

#[test]
fn composition_of_queries() {
    let tree = balanced_binary();
    for_each_index(&tree, |name, index| {
        for &node in tree.nodes() {
            let depth = tree.depth(node).unwrap();
            for a in 0..=depth {
                for b in 0..=(depth - a) {
                    let stepwise = index
                        .level_ancestor(node, a)
                        .and_then(|mid| index.level_ancestor(mid, b));
                    assert_eq!(stepwise, index.level_ancestor(node, a + b), "{name}");
                }
            }
        }
    });
}
