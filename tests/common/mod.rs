#![allow(dead_code)]

use arborist::model::{FieldAccess, FieldValue, NodeId};
use arborist::{LoadOptions, Tree};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: NodeId,
    pub parent_id: NodeId,
    pub title: &'static str,
    pub sort: i64,
}

pub fn category(id: NodeId, parent_id: NodeId, title: &'static str) -> Category {
    Category {
        id,
        parent_id,
        title,
        sort: 0,
    }
}

impl FieldAccess for Category {
    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "parent_id" => Some(self.parent_id.into()),
            "title" => Some(self.title.into()),
            "sort" => Some(self.sort.into()),
            _ => None,
        }
    }
}

pub fn category_options() -> LoadOptions<Category> {
    LoadOptions::new()
        .with_id_fn(|c: &Category| c.id)
        .with_parent_id_fn(|c: &Category| c.parent_id)
}

/// Seventeen categories, deliberately not in id or level order:
/// ```text
/// Root (1)
///  ├ Child 1 (2)
///  │ ├ Child 1.1 (4)
///  │ ├ Child 1.2 (5)
///  │ │ ├ Child 1.2.1 (7)
///  │ │ └ Child 1.2.2 (8)
///  │ │  ├ Child 1.2.2.1 (9)
///  │ │  └ Child 1.2.2.2 (10)
///  │ │   ├ Child 1.2.2.2.1 (11)
///  │ │   └ Child 1.2.2.2.2 (12)
///  │ │    ├ Child 1.2.2.2.2.1 (13)
///  │ │    └ Child 1.2.2.2.2.2 (14)
///  │ │     ├ Child 1.2.2.2.2.2.1 (15)
///  │ │     └ Child 1.2.2.2.2.2.2 (16)
///  │ └ Child 1.3 (17)
///  └ Child 2 (3)
///   └ Child 2.1 (6)
/// ```
pub fn categories() -> Vec<Category> {
    vec![
        category(17, 2, "Child 1.3"),
        category(12, 10, "Child 1.2.2.2.2"),
        category(14, 12, "Child 1.2.2.2.2.2"),
        category(2, 1, "Child 1"),
        category(4, 2, "Child 1.1"),
        category(5, 2, "Child 1.2"),
        category(6, 3, "Child 2.1"),
        category(7, 5, "Child 1.2.1"),
        category(8, 5, "Child 1.2.2"),
        category(9, 8, "Child 1.2.2.1"),
        category(10, 8, "Child 1.2.2.2"),
        category(11, 10, "Child 1.2.2.2.1"),
        category(13, 12, "Child 1.2.2.2.2.1"),
        category(15, 14, "Child 1.2.2.2.2.2.1"),
        category(3, 1, "Child 2"),
        category(16, 14, "Child 1.2.2.2.2.2.2"),
        category(1, 0, "Root"),
    ]
}

pub fn category_tree() -> Tree<Category> {
    Tree::from_items(categories(), &category_options()).unwrap()
}

pub type Pair = (NodeId, NodeId);

pub fn pair_options() -> LoadOptions<Pair> {
    LoadOptions::new()
        .with_id_fn(|p: &Pair| p.0)
        .with_parent_id_fn(|p: &Pair| p.1)
}

/// `{(1,0),(2,1),(3,1),(4,2),(5,2),(6,3)}`
pub fn small_pairs() -> Vec<Pair> {
    vec![(1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 3)]
}

pub fn pair_tree(pairs: Vec<Pair>) -> Tree<Pair> {
    Tree::from_items(pairs, &pair_options()).unwrap()
}
