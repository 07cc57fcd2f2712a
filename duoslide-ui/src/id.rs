//! Widget identity.
//!
//! Every interactive widget is identified by a [`WidgetId`] hashed from its
//! label and the ids pushed by enclosing scopes. Two widgets with the same
//! visible text can be told apart with a `##suffix` that is hashed but never
//! displayed.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

/// Separator between the visible part of a label and its hidden id suffix.
pub const LABEL_ID_SEPARATOR: &str = "##";

/// Stable identity of a widget across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// The root scope every id stack starts from.
    pub const ROOT: WidgetId = WidgetId(0x9e37_79b9_7f4a_7c15);

    /// Derives a child id from this scope and a hashable key.
    pub fn child(self, key: impl Hash) -> WidgetId {
        let mut hasher = FxHasher::default();
        self.0.hash(&mut hasher);
        key.hash(&mut hasher);
        WidgetId(hasher.finish())
    }

    /// Raw hash value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Returns the part of `label` shown on screen.
///
/// ```
/// use duoslide_ui::id::visible_label;
///
/// assert_eq!(visible_label("Range##lights"), "Range");
/// assert_eq!(visible_label("##hidden"), "");
/// assert_eq!(visible_label("Plain"), "Plain");
/// ```
pub fn visible_label(label: &str) -> &str {
    match label.find(LABEL_ID_SEPARATOR) {
        Some(end) => &label[..end],
        None => label,
    }
}

/// Stack of id scopes, innermost last.
#[derive(Debug, Clone)]
pub struct IdStack {
    scopes: SmallVec<[WidgetId; 8]>,
}

impl Default for IdStack {
    fn default() -> Self {
        let mut scopes = SmallVec::new();
        scopes.push(WidgetId::ROOT);
        Self { scopes }
    }
}

impl IdStack {
    /// Innermost scope.
    pub fn current(&self) -> WidgetId {
        self.scopes.last().copied().unwrap_or(WidgetId::ROOT)
    }

    /// Id of a widget with `label` inside the current scope.
    pub fn id_for(&self, label: &str) -> WidgetId {
        self.current().child(label)
    }

    /// Enters a scope keyed by `key`.
    pub fn push(&mut self, key: impl Hash) {
        let id = self.current().child(key);
        self.scopes.push(id);
    }

    /// Leaves the innermost scope. Returns `false` if only the root remained.
    pub fn pop(&mut self) -> bool {
        if self.scopes.len() > 1 {
            self.scopes.pop();
            true
        } else {
            false
        }
    }

    /// Number of scopes above the root.
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Drops every scope except the root.
    pub fn reset(&mut self) {
        self.scopes.truncate(1);
    }
}
