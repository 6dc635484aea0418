//! Rebalancing: shape degradation and the explicit rebuild.

use ordtree::util::testing::init_test_setup;
use ordtree::Tree;

#[test]
fn given_degraded_tree_when_rebalancing_then_values_survive_and_height_shrinks() {
    init_test_setup();
    let mut tree = Tree::from_values(1..=7);
    for value in 8..=20 {
        tree.insert(value);
    }
    assert!(!tree.is_balanced());
    let before: Vec<i32> = tree.inorder().into_iter().copied().collect();
    let degraded_height = tree.height();

    tree.rebalance();

    let after: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(before, after);
    assert!(tree.is_balanced());
    assert!(tree.height() < degraded_height);
    // 20 values fit in 5 levels
    assert_eq!(tree.height(), 5);
}

#[test]
fn given_rebalanced_tree_when_checking_every_node_then_all_subtrees_are_balanced() {
    let mut tree = Tree::from_values(1..=3);
    for value in 4..=40 {
        tree.insert(value);
    }

    tree.rebalance();

    let mut all_balanced = true;
    tree.preorder_visit(|node| all_balanced &= node.is_balanced());
    assert!(all_balanced);
}

#[test]
fn given_empty_tree_when_rebalancing_then_nothing_happens() {
    let mut tree: Tree<i32> = Tree::new();
    tree.rebalance();

    assert!(tree.is_empty());
    assert!(tree.is_balanced());
}

#[test]
fn given_mixed_mutations_when_rebalancing_then_set_is_preserved() {
    let mut tree = Tree::from_values([10, 20, 30, 40, 50]);
    tree.insert(25);
    tree.insert(26);
    tree.insert(27);
    tree.delete(&40).expect("40 should be present");

    tree.rebalance();

    assert_eq!(
        tree.inorder(),
        vec![&10, &20, &25, &26, &27, &30, &50]
    );
    assert_eq!(tree.len(), 7);
}
