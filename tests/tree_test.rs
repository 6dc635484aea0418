//! Core tree operations: construction, lookup, insertion, deletion.

use ordtree::{Tree, TreeError};
use rstest::rstest;

// ============================================================
// Construction Tests
// ============================================================

#[test]
fn given_unsorted_input_with_duplicates_when_building_then_inorder_is_sorted_unique() {
    let tree = Tree::from_values([5, 3, 8, 3, 1, 5, 9, 1]);

    assert_eq!(tree.inorder(), vec![&1, &3, &5, &8, &9]);
    assert_eq!(tree.len(), 5);
}

#[test]
fn given_seven_sorted_values_when_building_then_shape_matches_median_split() {
    let tree = Tree::from_values([1, 2, 3, 4, 5, 6, 7]);

    // size 7, mid 3: value 4 becomes the root
    assert_eq!(tree.root().map(|node| *node.value()), Some(4));
    assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
    assert_eq!(tree.height(), 3);
    assert!(tree.is_balanced());
}

#[test]
fn given_empty_input_when_building_then_tree_is_empty_and_valid() {
    let tree: Tree<i32> = Tree::from_values([]);

    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.is_balanced());
    assert!(tree.inorder().is_empty());
}

#[rstest]
#[case(1, 1)]
#[case(3, 2)]
#[case(7, 3)]
#[case(15, 4)]
fn given_n_values_when_building_then_height_is_logarithmic(
    #[case] n: i32,
    #[case] expected_height: usize,
) {
    let tree = Tree::from_values(1..=n);
    assert_eq!(tree.height(), expected_height);
}

#[test]
fn given_iterator_when_collecting_then_builds_balanced_tree() {
    let tree: Tree<i32> = (1..=7).collect();
    assert_eq!(tree.root().map(|node| *node.value()), Some(4));
}

// ============================================================
// Find Tests
// ============================================================

#[rstest]
#[case(1)]
#[case(4)]
#[case(7)]
fn given_existing_value_when_finding_then_returns_node(#[case] value: i32) {
    let tree = Tree::from_values(1..=7);

    let node = tree.find(&value).expect("value should be present");
    assert_eq!(node.value(), &value);
}

#[test]
fn given_absent_value_when_finding_then_returns_none() {
    let tree = Tree::from_values(1..=7);

    assert!(tree.find(&42).is_none());
    assert!(!tree.contains(&42));
}

#[test]
fn given_values_when_querying_min_max_then_returns_extremes() {
    let tree = Tree::from_values([12, 3, 45, 7, 30]);

    assert_eq!(tree.min(), Some(&3));
    assert_eq!(tree.max(), Some(&45));

    let empty: Tree<i32> = Tree::new();
    assert_eq!(empty.min(), None);
    assert_eq!(empty.max(), None);
}

// ============================================================
// Insert Tests
// ============================================================

#[test]
fn given_empty_tree_when_inserting_then_value_becomes_root() {
    let mut tree = Tree::new();
    tree.insert(10);

    assert_eq!(tree.root().map(|node| *node.value()), Some(10));
    assert_eq!(tree.len(), 1);
}

#[test]
fn given_new_value_when_inserting_then_find_succeeds() {
    let mut tree = Tree::from_values([2, 4, 6]);
    tree.insert(5);

    assert!(tree.contains(&5));
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_present_value_when_inserting_again_then_shape_is_unchanged() {
    let mut tree = Tree::from_values([2, 4, 6]);
    tree.insert(5);
    let shape_before: Vec<i32> = tree.preorder().into_iter().copied().collect();

    tree.insert(5);

    let shape_after: Vec<i32> = tree.preorder().into_iter().copied().collect();
    assert_eq!(shape_before, shape_after);
    assert_eq!(tree.len(), 4);
}

#[test]
fn given_ascending_inserts_when_not_rebalancing_then_shape_degrades() {
    let mut tree = Tree::from_values(1..=7);
    for value in 8..=12 {
        tree.insert(value);
    }

    // inserts never rebalance; the right spine just grows below the old leaf 7
    assert!(!tree.is_balanced());
    assert_eq!(tree.height(), 8);
}

// ============================================================
// Delete Tests
// ============================================================

#[test]
fn given_leaf_value_when_deleting_then_leaf_is_detached() {
    let mut tree = Tree::from_values(1..=7);

    assert!(tree.delete(&1).is_ok());

    assert!(!tree.contains(&1));
    assert_eq!(tree.inorder(), vec![&2, &3, &4, &5, &6, &7]);
    assert_eq!(tree.len(), 6);
}

#[test]
fn given_node_with_one_child_when_deleting_then_child_is_spliced_up() {
    // 10 as root, 5 below it, 7 as the only child of 5
    let mut tree = Tree::new();
    tree.insert(10);
    tree.insert(5);
    tree.insert(7);

    assert!(tree.delete(&5).is_ok());

    assert_eq!(tree.inorder(), vec![&7, &10]);
    assert_eq!(tree.preorder(), vec![&10, &7]);
}

#[test]
fn given_root_with_two_children_when_deleting_root_then_left_value_replaces_it() {
    let mut tree = Tree::from_values([1, 2, 3]);

    assert!(tree.delete(&2).is_ok());

    // replacement comes from the leftmost node of the left subtree
    assert_eq!(tree.root().map(|node| *node.value()), Some(1));
    assert_eq!(tree.inorder(), vec![&1, &3]);
    assert_eq!(tree.len(), 2);
}

#[test]
fn given_sole_root_when_deleting_then_tree_becomes_empty() {
    let mut tree = Tree::from_values([42]);

    assert!(tree.delete(&42).is_ok());

    assert!(tree.is_empty());
    assert_eq!(tree.root().map(|node| *node.value()), None);
}

#[test]
fn given_absent_value_when_deleting_then_not_found_and_tree_unchanged() {
    let mut tree = Tree::from_values(1..=7);
    let before: Vec<i32> = tree.inorder().into_iter().copied().collect();

    assert_eq!(tree.delete(&42), Err(TreeError::NotFound));

    let after: Vec<i32> = tree.inorder().into_iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 7);
}

#[test]
fn given_any_delete_when_done_then_exactly_one_value_is_gone() {
    // 4 has two children here, so the replacement rule kicks in
    let mut tree = Tree::from_values(1..=7);

    assert!(tree.delete(&4).is_ok());

    let mut remaining: Vec<i32> = tree.inorder().into_iter().copied().collect();
    remaining.sort();
    assert_eq!(remaining, vec![1, 2, 3, 5, 6, 7]);
    assert_eq!(tree.len(), 6);
}

// ============================================================
// Depth Tests
// ============================================================

#[test]
fn given_nodes_at_known_positions_when_computing_depth_then_counts_edges_from_root() {
    let tree = Tree::from_values(1..=7);

    let root = tree.root().expect("non-empty tree");
    assert_eq!(tree.depth(root), Ok(0));

    let mid = tree.find(&2).expect("2 should be present");
    assert_eq!(tree.depth(mid), Ok(1));

    let leaf = tree.find(&5).expect("5 should be present");
    assert_eq!(tree.depth(leaf), Ok(2));
}

#[test]
fn given_node_from_another_tree_when_computing_depth_then_not_found() {
    let tree = Tree::from_values(1..=7);
    let other = Tree::from_values([42]);
    let foreign = other.find(&42).expect("42 should be present");

    // descent from the root dead-ends without finding 42
    assert_eq!(tree.depth(foreign), Err(TreeError::NotFound));
}
