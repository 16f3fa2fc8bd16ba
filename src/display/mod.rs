//! ASCII tree drawings of a hierarchy.
//!
//! [format_tree] walks a subtree in pre-order and labels each node with its
//! indentation prefix, a branch icon and a label taken from the payload;
//! [render] joins these lines into one string. What is drawn is configured
//! with [FormatOptions]: a [LabelSelector], the [Icons] and the indent unit.
//!
//! # Example
//! ```
//! use arborist::display::FormatOptions;
//! use arborist::model::{record, Record};
//! use arborist::{LoadOptions, Tree};
//!
//! let items: Vec<Record> = vec![
//!     record([("id", 1.into()), ("parent_id", 0.into()), ("title", "Root".into())]),
//!     record([("id", 2.into()), ("parent_id", 1.into()), ("title", "Left".into())]),
//!     record([("id", 3.into()), ("parent_id", 2.into()), ("title", "Leaf".into())]),
//!     record([("id", 4.into()), ("parent_id", 1.into()), ("title", "Right".into())]),
//! ];
//! let tree = Tree::from_items(items, &LoadOptions::for_fields("id", "parent_id")).unwrap();
//!
//! let drawing = tree.render(1, &FormatOptions::default());
//! assert_eq!(drawing, "Root\n ├ Left\n │ └ Leaf\n └ Right");
//! ```

mod format_options;
mod formatter;

pub use format_options::{DEFAULT_INDENT, DEFAULT_LABEL_FIELD, FormatOptions, Icons, LabelSelector};
pub use formatter::{FormattedNode, format_tree, render};
