mod common;

use arborist::model::{FieldValue, Record, record};
use arborist::{ErrorCategory, LoadError, LoadOptions, SiblingOrder, Tree, load_records};
use common::*;
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load_pairs(pairs: Vec<Pair>) -> Result<Tree<Pair>, LoadError> {
    Tree::from_items(pairs, &pair_options())
}

// ============= Successful Loads =============

#[test]
fn test_load_small_tree() {
    init_logger();
    let tree = load_pairs(small_pairs()).unwrap();

    assert_eq!(tree.len(), 6);
    assert!(!tree.is_empty());
    assert!(tree.contains(6));
    assert!(!tree.contains(7));
    assert_eq!(tree.children_ids(1), vec![2, 3]);
    assert_eq!(tree.roots().len(), 1);
}

#[test]
fn test_load_all_categories() {
    let tree = category_tree();
    assert_eq!(tree.len(), 17);

    for expected in categories() {
        let node = tree.find_node(expected.id).unwrap();
        assert_eq!(node.parent_id(), expected.parent_id);
        assert_eq!(node.data(), &expected);
    }
}

#[test]
fn test_new_tree_is_empty() {
    let tree: Tree<Pair> = Tree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.find_node(1).is_none());
    assert!(tree.roots().is_empty());
}

#[test]
fn test_multiple_roots() {
    let tree = load_pairs(vec![(3, 0), (1, 0), (2, 1), (4, 3)]).unwrap();
    assert_eq!(tree.children_ids(0), vec![1, 3]);
    assert_eq!(tree.sibling_ids(3, true), vec![1, 3]);
}

#[test]
fn test_reload_replaces_everything() {
    let tree = load_pairs(small_pairs()).unwrap();
    tree.load(vec![(10, 0), (11, 10)], &pair_options()).unwrap();

    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(1));
    assert_eq!(tree.children_ids(10), vec![11]);
    assert!(tree.children(1).is_empty());
}

// ============= Rejected Loads =============

#[test]
fn test_missing_id_fn() {
    let options = LoadOptions::new().with_parent_id_fn(|p: &Pair| p.1);
    let err = Tree::from_items(small_pairs(), &options).unwrap_err();

    assert_eq!(err, LoadError::MissingIdFn);
    assert_eq!(err.to_string(), "id function is required");
    assert_eq!(err.category(), ErrorCategory::Configuration);
}

#[test]
fn test_missing_parent_id_fn() {
    let options = LoadOptions::new().with_id_fn(|p: &Pair| p.0);
    let err = Tree::from_items(small_pairs(), &options).unwrap_err();

    assert_eq!(err, LoadError::MissingParentIdFn);
    assert_eq!(err.to_string(), "parent id function is required");
}

#[test]
fn test_configuration_checked_before_data() {
    let err = Tree::from_items(Vec::<Pair>::new(), &LoadOptions::new()).unwrap_err();
    assert_eq!(err, LoadError::MissingIdFn);
}

#[test]
fn test_empty_data() {
    let err = load_pairs(Vec::new()).unwrap_err();

    assert_eq!(err, LoadError::EmptyData);
    assert_eq!(err.to_string(), "invalid data: empty data");
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn test_zero_id() {
    let err = load_pairs(vec![(0, 0)]).unwrap_err();

    assert_eq!(err, LoadError::NonPositiveId { position: 0, id: 0 });
    assert_eq!(err.to_string(), "invalid data: item 0: ID must be positive");
    assert_eq!(err.position(), Some(0));
}

#[test]
fn test_negative_id_reports_position() {
    let err = load_pairs(vec![(1, 0), (2, 1), (-3, 1)]).unwrap_err();

    assert_eq!(err, LoadError::NonPositiveId { position: 2, id: -3 });
    assert_eq!(err.to_string(), "invalid data: item 2: ID must be positive");
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn test_negative_parent_id() {
    let err = load_pairs(vec![(1, -1)]).unwrap_err();

    assert_eq!(
        err,
        LoadError::NegativeParentId {
            position: 0,
            parent_id: -1
        }
    );
    assert_eq!(err.to_string(), "invalid data: item 0: parent ID cannot be negative");
}

#[test]
fn test_duplicate_id() {
    let err = load_pairs(vec![(1, 0), (1, 0)]).unwrap_err();

    assert_eq!(err, LoadError::DuplicateId(1));
    assert_eq!(err.to_string(), "invalid data: duplicate node ID: 1");
    assert_eq!(err.category(), ErrorCategory::Integrity);
    assert_eq!(err.position(), None);
}

#[test]
fn test_duplicate_checked_before_parent_sign() {
    let err = load_pairs(vec![(1, 0), (1, -1)]).unwrap_err();
    assert_eq!(err, LoadError::DuplicateId(1));
}

#[test]
fn test_dangling_parent() {
    let err = load_pairs(vec![(1, 5)]).unwrap_err();

    assert_eq!(err, LoadError::DanglingParent { id: 1, parent_id: 5 });
    assert_eq!(err.to_string(), "invalid parent ID 5 for node 1");
    assert_eq!(err.category(), ErrorCategory::Integrity);
}

#[test]
fn test_dangling_reported_in_input_order() {
    let err = load_pairs(vec![(1, 0), (3, 8), (2, 9)]).unwrap_err();
    assert_eq!(err, LoadError::DanglingParent { id: 3, parent_id: 8 });
}

#[test]
fn test_circular_reference() {
    let err = load_pairs(vec![(1, 2), (2, 1)]).unwrap_err();

    assert_eq!(err, LoadError::CircularReference(1));
    assert_eq!(err.to_string(), "circular reference detected at node 1");
    assert_eq!(err.category(), ErrorCategory::Integrity);
}

#[test]
fn test_cycle_beside_valid_tree() {
    let err = load_pairs(vec![(1, 0), (2, 1), (3, 5), (4, 3), (5, 4)]).unwrap_err();
    assert!(matches!(
        err,
        LoadError::CircularReference(3) | LoadError::CircularReference(4) | LoadError::CircularReference(5)
    ));
}

#[test]
fn test_rejected_load_keeps_previous_tree() {
    init_logger();
    let tree = load_pairs(small_pairs()).unwrap();

    let err = tree.load(vec![(1, 2), (2, 1)], &pair_options()).unwrap_err();
    assert_eq!(err, LoadError::CircularReference(1));

    assert_eq!(tree.len(), 6);
    assert_eq!(tree.children_ids(1), vec![2, 3]);
    assert_eq!(tree.descendant_ids(1, 0), vec![2, 3, 4, 5, 6]);

    tree.load(Vec::new(), &pair_options()).unwrap_err();
    tree.load(vec![(1, 0), (1, 0)], &pair_options()).unwrap_err();
    assert_eq!(tree.len(), 6);
}

#[test]
fn test_rejected_first_load_leaves_tree_empty() {
    let tree = Tree::new();
    tree.load(vec![(1, 5)], &pair_options()).unwrap_err();
    assert!(tree.is_empty());
}

// ============= Sibling Order =============

fn sortable() -> Vec<Category> {
    vec![
        Category { id: 1, parent_id: 0, title: "Root", sort: 1 },
        Category { id: 2, parent_id: 1, title: "B", sort: 3 },
        Category { id: 3, parent_id: 1, title: "A", sort: 2 },
        Category { id: 4, parent_id: 1, title: "C", sort: 1 },
    ]
}

fn child_titles(tree: &Tree<Category>) -> Vec<&'static str> {
    tree.children(1).iter().map(|node| node.data().title).collect()
}

#[test]
fn test_default_order_is_by_id() {
    let tree = Tree::from_items(sortable(), &category_options()).unwrap();
    assert_eq!(child_titles(&tree), vec!["B", "A", "C"]);
}

#[test]
fn test_sort_by_comparator() {
    let by_title = category_options().with_sort(|a: &Category, b: &Category| a.title.cmp(b.title));
    let tree = Tree::from_items(sortable(), &by_title).unwrap();
    assert_eq!(child_titles(&tree), vec!["A", "B", "C"]);

    let by_sort = category_options().with_sort_by_key(|c: &Category| c.sort);
    tree.load(sortable(), &by_sort).unwrap();
    assert_eq!(child_titles(&tree), vec!["C", "A", "B"]);

    let by_id_desc = category_options().with_sort(|a: &Category, b: &Category| b.id.cmp(&a.id));
    tree.load(sortable(), &by_id_desc).unwrap();
    assert_eq!(child_titles(&tree), vec!["C", "A", "B"]);
}

#[test]
fn test_sort_by_field() {
    let options = category_options().with_order(SiblingOrder::by_field("sort"));
    let tree = Tree::from_items(sortable(), &options).unwrap();
    assert_eq!(child_titles(&tree), vec!["C", "A", "B"]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let items = vec![
        category(1, 0, "Root"),
        category(5, 1, "x"),
        category(3, 1, "y"),
        category(4, 1, "z"),
    ];
    let options = category_options().with_sort_by_key(|c: &Category| c.sort);
    let tree = Tree::from_items(items, &options).unwrap();
    assert_eq!(tree.children_ids(1), vec![5, 3, 4]);
}

#[test]
fn test_set_sibling_order_resorts_children() {
    init_logger();
    let tree = Tree::from_items(sortable(), &category_options()).unwrap();
    let before = tree.children(1);

    tree.set_sibling_order(SiblingOrder::by_key(|c: &Category| c.title));
    assert_eq!(child_titles(&tree), vec!["A", "B", "C"]);
    assert_eq!(tree.sibling_ids(2, true), vec![3, 2, 4]);

    // Lists handed out earlier are snapshots
    assert_eq!(before.iter().map(|n| n.id()).collect::<Vec<_>>(), vec![2, 3, 4]);

    tree.set_sibling_order(SiblingOrder::ById);
    assert_eq!(tree.children_ids(1), vec![2, 3, 4]);
}

#[test]
fn test_set_sibling_order_ties_fall_back_to_input_order() {
    let items = vec![
        category(1, 0, "Root"),
        category(5, 1, "x"),
        category(3, 1, "y"),
        category(4, 1, "z"),
    ];
    let tree = Tree::from_items(items, &category_options()).unwrap();
    assert_eq!(tree.children_ids(1), vec![3, 4, 5]);

    tree.set_sibling_order(SiblingOrder::by_key(|c: &Category| c.sort));
    assert_eq!(tree.children_ids(1), vec![5, 3, 4]);
}

// ============= Dynamic Records =============

fn records() -> Vec<Record> {
    vec![
        record([("id", 1.into()), ("parent_id", 0.into()), ("title", "Root".into())]),
        record([("id", 2.into()), ("parent_id", 1.into()), ("title", "Zebra".into()), ("sort", 2.into())]),
        record([("id", 3.into()), ("parent_id", 1.into()), ("title", "Aardvark".into()), ("sort", 1.into())]),
    ]
}

#[test]
fn test_load_records() {
    let tree = load_records(records()).unwrap();
    assert_eq!(tree.children_ids(1), vec![2, 3]);
    assert_eq!(
        tree.find_node(3).unwrap().data().get("title"),
        Some(&FieldValue::from("Aardvark"))
    );
}

#[test]
fn test_records_sorted_by_field() {
    let options = LoadOptions::for_fields("id", "parent_id").with_sort_by_field("title");
    let tree = Tree::from_items(records(), &options).unwrap();
    assert_eq!(tree.children_ids(1), vec![3, 2]);

    // Root has no "sort" field and would sort first, it has no siblings though
    tree.set_sibling_order(SiblingOrder::by_field("sort"));
    assert_eq!(tree.children_ids(1), vec![3, 2]);
}

#[test]
fn test_records_with_other_field_names() {
    let items = vec![
        record([("key", 10.into()), ("owner", 0.into())]),
        record([("key", 11.into()), ("owner", 10.into())]),
    ];
    let tree = Tree::from_items(items, &LoadOptions::for_fields("key", "owner")).unwrap();
    assert_eq!(tree.parent_id(11), Some(10));
}

#[test]
fn test_record_missing_field() {
    let items = vec![record([("id", 1.into())])];
    let err = load_records(items).unwrap_err();

    assert_eq!(
        err,
        LoadError::UnreadableField {
            position: 0,
            field: "parent_id".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "invalid data: item 0: field `parent_id` is missing or not an integer"
    );
    assert_eq!(err.category(), ErrorCategory::Format);
}

#[test]
fn test_record_non_integer_id() {
    let items = vec![
        record([("id", 1.into()), ("parent_id", 0.into())]),
        record([("id", 2.5.into()), ("parent_id", 1.into())]),
    ];
    let err = load_records(items).unwrap_err();
    assert_eq!(err.position(), Some(1));
}
