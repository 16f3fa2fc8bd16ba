use crate::model::FieldAccess;
use std::fmt;
use std::sync::Arc;

/// Indent unit used when none (or an empty one) is given.
pub const DEFAULT_INDENT: &str = " ";

/// Payload field used for labels by default.
pub const DEFAULT_LABEL_FIELD: &str = "title";

type LabelFn<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

// =#========================================================================#=
// ICONS
// =#========================================================================#=
/// The three pieces an ASCII tree is drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    /// Drawn below a node that has further siblings after it
    pub continuation: String,
    /// Drawn before every child except the last
    pub branch: String,
    /// Drawn before the last child
    pub last_branch: String,
}

impl Icons {
    /// Creates icons from `[continuation, branch, last_branch]`.
    pub fn new(icons: [&str; 3]) -> Self {
        let [continuation, branch, last_branch] = icons;
        Icons {
            continuation: continuation.to_string(),
            branch: branch.to_string(),
            last_branch: last_branch.to_string(),
        }
    }
}

impl Default for Icons {
    /// `["│", "├ ", "└ "]`
    fn default() -> Self {
        Icons::new(["│", "├ ", "└ "])
    }
}

impl From<[&str; 3]> for Icons {
    fn from(icons: [&str; 3]) -> Self {
        Icons::new(icons)
    }
}

// =#========================================================================#=
// LABEL SELECTOR
// =#========================================================================#=
/// Produces the display text of a payload.
///
/// Returning `None` means the label could not be determined; the node is
/// then shown with an empty label instead of failing the whole rendering.
pub struct LabelSelector<T> {
    select: LabelFn<T>,
}

impl<T> LabelSelector<T> {
    /// Labels payloads with the text returned by `f`.
    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        LabelSelector { select: Arc::new(f) }
    }

    /// Returns the label of `data`, empty if none could be determined.
    pub fn label(&self, data: &T) -> String {
        (self.select)(data).unwrap_or_default()
    }
}

impl<T: FieldAccess + 'static> LabelSelector<T> {
    /// Labels payloads with the text of a named field.
    ///
    /// Any field value is shown as its display text; payloads without the
    /// field get an empty label.
    pub fn field(name: &str) -> Self {
        let name = name.to_string();
        LabelSelector::with(move |data: &T| data.field(&name).map(|value| value.to_string()))
    }
}

impl<T> Clone for LabelSelector<T> {
    fn clone(&self) -> Self {
        LabelSelector {
            select: Arc::clone(&self.select),
        }
    }
}

impl<T> fmt::Debug for LabelSelector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LabelSelector(..)")
    }
}

// =#========================================================================#=
// FORMAT OPTIONS
// =#========================================================================#=
/// Configuration for [format_tree](crate::display::format_tree).
///
/// # Example
/// ```
/// use arborist::display::{FormatOptions, Icons};
///
/// struct Category {
///     name: String,
/// }
///
/// let options = FormatOptions::new(|c: &Category| Some(c.name.clone()))
///     .with_indent("  ")
///     .with_icons(Icons::new(["|", "+-", "`-"]));
/// assert_eq!(options.indent(), "  ");
/// ```
pub struct FormatOptions<T> {
    label: LabelSelector<T>,
    indent: String,
    icons: Icons,
}

impl<T> FormatOptions<T> {
    /// Creates options labelling nodes with `label`, default indent and icons.
    pub fn new<F>(label: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        Self::with_selector(LabelSelector::with(label))
    }

    /// Creates options from a prepared [LabelSelector], default indent and icons.
    pub fn with_selector(label: LabelSelector<T>) -> Self {
        FormatOptions {
            label,
            indent: DEFAULT_INDENT.to_string(),
            icons: Icons::default(),
        }
    }

    /// Sets the indent unit added per level. An empty string restores the
    /// default ([DEFAULT_INDENT]).
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = if indent.is_empty() {
            DEFAULT_INDENT.to_string()
        } else {
            indent.to_string()
        };
        self
    }

    /// Sets the [Icons].
    pub fn with_icons(mut self, icons: impl Into<Icons>) -> Self {
        self.icons = icons.into();
        self
    }

    /// Replaces the label selector.
    pub fn with_label(mut self, label: LabelSelector<T>) -> Self {
        self.label = label;
        self
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn icons(&self) -> &Icons {
        &self.icons
    }

    pub fn label(&self) -> &LabelSelector<T> {
        &self.label
    }
}

impl<T> Clone for FormatOptions<T> {
    fn clone(&self) -> Self {
        FormatOptions {
            label: self.label.clone(),
            indent: self.indent.clone(),
            icons: self.icons.clone(),
        }
    }
}

impl<T> fmt::Debug for FormatOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("indent", &self.indent)
            .field("icons", &self.icons)
            .finish_non_exhaustive()
    }
}

impl<T: FieldAccess + 'static> FormatOptions<T> {
    /// Creates options labelling nodes with the named field.
    pub fn for_field(name: &str) -> Self {
        Self::with_selector(LabelSelector::field(name))
    }
}

impl<T: FieldAccess + 'static> Default for FormatOptions<T> {
    /// Labels from the [DEFAULT_LABEL_FIELD] field, default indent and icons.
    fn default() -> Self {
        Self::for_field(DEFAULT_LABEL_FIELD)
    }
}
