use crate::display::format_options::FormatOptions;
use crate::model::{Index, NodeId, NodeRef, Tree};
use log::trace;
use std::fmt;

// =#========================================================================#=
// FORMATTED NODE
// =#========================================================================#=
/// A node together with its line in an ASCII tree drawing.
pub struct FormattedNode<T> {
    pub node: NodeRef<T>,
    /// Indentation prefix, icon and label
    pub label: String,
}

impl<T> Clone for FormattedNode<T> {
    fn clone(&self) -> Self {
        FormattedNode {
            node: NodeRef::clone(&self.node),
            label: self.label.clone(),
        }
    }
}

impl<T> fmt::Debug for FormattedNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormattedNode")
            .field("id", &self.node.id())
            .field("label", &self.label)
            .finish()
    }
}

// =#========================================================================#=
// FORMATTING
// =#========================================================================#=
/// Pending line: node, prefix inherited from the parent, whether last sibling.
type Frame<'a, T> = (&'a NodeRef<T>, String, bool);

/// Draws the subtree below `root_id` as an ASCII tree, one entry per node
/// in pre-order.
///
/// The root's line is just its label. Every other line is the prefix
/// inherited from its parent, followed by `branch` (or `last_branch` for
/// the last sibling) and the label. A child passes on its own prefix plus
/// `continuation` (unless it is the last sibling) plus the indent unit, so
/// vertical bars appear only below ancestors with further siblings.
///
/// Labels that cannot be determined are left empty.
///
/// # Returns
/// One [FormattedNode] per node of the subtree; empty if there is no node
/// `root_id`.
///
/// # Example Output
/// With the default indent `" "` and icons `["│", "├ ", "└ "]`:
/// ```text
/// Root
///  ├ Child 1
///  │ ├ Child 1.1
///  │ └ Child 1.2
///  └ Child 2
///   └ Child 2.1
/// ```
pub fn format_tree<T>(index: &Index<T>, root_id: NodeId, options: &FormatOptions<T>) -> Vec<FormattedNode<T>> {
    let Some(root) = index.find_node(root_id) else {
        return Vec::new();
    };
    let (indent, icons, label) = (options.indent(), options.icons(), options.label());

    let mut formatted = vec![FormattedNode {
        label: label.label(root.data()),
        node: NodeRef::clone(&root),
    }];

    let mut stack: Vec<Frame<'_, T>> = Vec::new();
    push_children(&mut stack, index.children_slice(root_id), indent);

    while let Some((node, prefix, is_last)) = stack.pop() {
        let icon = if is_last {
            &icons.last_branch
        } else {
            &icons.branch
        };
        formatted.push(FormattedNode {
            node: NodeRef::clone(node),
            label: format!("{}{}{}", prefix, icon, label.label(node.data())),
        });

        let mut child_prefix = prefix;
        if !is_last {
            child_prefix.push_str(&icons.continuation);
        }
        child_prefix.push_str(indent);
        push_children(&mut stack, index.children_slice(node.id()), &child_prefix);
    }

    trace!("Formatted {} nodes below node {}", formatted.len(), root_id);
    formatted
}

/// Pushes `children` so that the first one is popped first.
fn push_children<'a, T>(stack: &mut Vec<Frame<'a, T>>, children: &'a [NodeRef<T>], prefix: &str) {
    let last = children.len().saturating_sub(1);
    for (i, child) in children.iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i == last));
    }
}

/// Draws the subtree below `root_id` as lines joined by `\n`.
///
/// See [format_tree]. Empty if there is no node `root_id`.
pub fn render<T>(index: &Index<T>, root_id: NodeId, options: &FormatOptions<T>) -> String {
    format_tree(index, root_id, options)
        .into_iter()
        .map(|formatted| formatted.label)
        .collect::<Vec<_>>()
        .join("\n")
}

impl<T> Tree<T> {
    /// See [format_tree].
    pub fn format_tree(&self, root_id: NodeId, options: &FormatOptions<T>) -> Vec<FormattedNode<T>> {
        format_tree(&*self.read(), root_id, options)
    }

    /// See [render].
    pub fn render(&self, root_id: NodeId, options: &FormatOptions<T>) -> String {
        render(&*self.read(), root_id, options)
    }
}
