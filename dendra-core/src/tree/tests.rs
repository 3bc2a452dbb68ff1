//! Unit tests for the parent-vector tree and the LCA index.

use rstest::rstest;

use super::{LcaIndex, NodeInclusion, Tree, TreeError};

/// Three leaf pairs under two inner nodes and a root; the fixture used by
/// the simplification tests as well.
fn fixture() -> Tree {
    Tree::from_parents(vec![5, 5, 6, 6, 6, 7, 7, 7]).expect("fixture parents are valid")
}

#[test]
fn rejects_an_empty_parent_vector() {
    assert_eq!(Tree::from_parents(Vec::new()), Err(TreeError::Empty));
}

#[test]
fn rejects_parents_out_of_bounds() {
    let err = Tree::from_parents(vec![9, 1]).expect_err("parent 9 does not exist");
    assert_eq!(
        err,
        TreeError::ParentOutOfBounds {
            node: 0,
            parent: 9,
            num_nodes: 2
        }
    );
}

#[rstest]
#[case(vec![0, 1])] // self-parented node before the end
#[case(vec![2, 2, 2, 3, 4])] // second root in the middle
#[case(vec![1, 1, 1, 3])] // node 2 points backwards
fn rejects_non_topological_layouts(#[case] parents: Vec<usize>) {
    let err = Tree::from_parents(parents).expect_err("layout is not topological");
    assert!(matches!(err, TreeError::NotTopological { .. }));
}

#[test]
fn rejects_a_non_root_last_node() {
    // Last node must be self-parented; here it points backwards.
    let err = Tree::from_parents(vec![2, 2, 1]).expect_err("last node is not a root");
    assert_eq!(err, TreeError::NotTopological { node: 2, parent: 1 });
}

#[test]
fn exposes_structure() {
    let tree = fixture();
    assert_eq!(tree.num_nodes(), 8);
    assert_eq!(tree.num_leaves(), 5);
    assert_eq!(tree.root(), 7);
    assert_eq!(tree.parent(0), 5);
    assert_eq!(tree.parent(7), 7);
    assert_eq!(tree.children(6), &[2, 3, 4]);
    assert!(tree.is_leaf(4));
    assert!(!tree.is_leaf(5));
}

#[test]
fn single_node_tree_is_both_leaf_and_root() {
    let tree = Tree::from_parents(vec![0]).expect("one self-parented node");
    assert_eq!(tree.root(), 0);
    assert_eq!(tree.num_leaves(), 1);
    assert!(tree.is_leaf(0));
}

#[test]
fn ancestors_walk_to_the_root() {
    let tree = fixture();
    assert_eq!(tree.ancestors(0).collect::<Vec<_>>(), vec![5, 7]);
    assert_eq!(tree.ancestors(7).count(), 0);
}

#[rstest]
#[case(NodeInclusion::Include, NodeInclusion::Include, vec![0, 1, 2, 3, 4, 5, 6, 7])]
#[case(NodeInclusion::Include, NodeInclusion::Exclude, vec![0, 1, 2, 3, 4, 5, 6])]
#[case(NodeInclusion::Exclude, NodeInclusion::Include, vec![5, 6, 7])]
#[case(NodeInclusion::Exclude, NodeInclusion::Exclude, vec![5, 6])]
fn leaves_to_root_respects_inclusion(
    #[case] leaves: NodeInclusion,
    #[case] root: NodeInclusion,
    #[case] expected: Vec<usize>,
) {
    let tree = fixture();
    assert_eq!(tree.leaves_to_root(leaves, root).collect::<Vec<_>>(), expected);
}

#[test]
fn root_to_leaves_is_the_reverse_scan() {
    let tree = fixture();
    let forward: Vec<_> = tree
        .leaves_to_root(NodeInclusion::Exclude, NodeInclusion::Exclude)
        .collect();
    let mut backward: Vec<_> = tree
        .root_to_leaves(NodeInclusion::Exclude, NodeInclusion::Exclude)
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[rstest]
#[case(0, 1, 5)]
#[case(0, 2, 7)]
#[case(2, 3, 6)]
#[case(4, 4, 4)]
#[case(5, 2, 7)]
#[case(6, 3, 6)]
fn lca_answers_single_queries(#[case] left: usize, #[case] right: usize, #[case] expected: usize) {
    let index = LcaIndex::new(&fixture());
    assert_eq!(index.lca(left, right), expected);
    assert_eq!(index.lca(right, left), expected);
}

#[test]
fn lca_answers_batches() {
    let index = LcaIndex::new(&fixture());
    let result = index.lca_pairs([(0, 1), (1, 2), (3, 4)]);
    assert_eq!(result, vec![5, 7, 6]);
}

#[test]
fn lca_on_a_single_node_tree() {
    let tree = Tree::from_parents(vec![0]).expect("single node");
    let index = LcaIndex::new(&tree);
    assert_eq!(index.lca(0, 0), 0);
}

#[test]
fn lca_on_a_left_deep_chain() {
    // Chain: leaves 0..4, each inner node fuses the previous subtree with
    // one more leaf.
    let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6]).expect("chain parents");
    let index = LcaIndex::new(&tree);
    assert_eq!(index.lca(0, 1), 4);
    assert_eq!(index.lca(0, 2), 5);
    assert_eq!(index.lca(1, 3), 6);
    assert_eq!(index.lca(4, 2), 5);
}
