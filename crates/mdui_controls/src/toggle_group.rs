//! Single-selection toggle group
//!
//! State model for a toggle navigation bar: an ordered set of items
//! with at most one selected at a time.

use smallvec::SmallVec;
use std::sync::Arc;
use tracing::trace;

type ChangeCallback = Arc<dyn Fn(Option<usize>) + Send + Sync>;

/// Ordered items with at-most-one selection.
///
/// Selecting an item deselects the previous one; selecting the current
/// item again deselects it only when deselection is allowed. Change
/// callbacks fire on every effective selection change.
pub struct ToggleGroup {
    items: Vec<String>,
    selected: Option<usize>,
    allow_deselect: bool,
    on_change: SmallVec<[ChangeCallback; 2]>,
}

impl ToggleGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            allow_deselect: false,
            on_change: SmallVec::new(),
        }
    }

    /// Create a group from item labels
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self::new();
        group.items = items.into_iter().map(Into::into).collect();
        group
    }

    /// Builder: allow clicking the selected item to deselect it
    pub fn allow_deselect(mut self, allow: bool) -> Self {
        self.allow_deselect = allow;
        self
    }

    /// Append an item, returning its index
    pub fn push(&mut self, label: impl Into<String>) -> usize {
        self.items.push(label.into());
        self.items.len() - 1
    }

    /// The item labels in order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// The selected index, if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Register a callback fired on every selection change
    pub fn on_change<F: Fn(Option<usize>) + Send + Sync + 'static>(&mut self, callback: F) {
        self.on_change.push(Arc::new(callback));
    }

    /// Select an item by index.
    ///
    /// Out-of-range indices are ignored. Re-selecting the current item
    /// deselects it when deselection is allowed and is a no-op
    /// otherwise.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        if self.selected == Some(index) {
            if self.allow_deselect {
                self.deselect();
            }
            return;
        }
        self.selected = Some(index);
        trace!(index, "toggle item selected");
        self.notify();
    }

    /// Clear the selection, if deselection is allowed
    pub fn deselect(&mut self) {
        if !self.allow_deselect || self.selected.is_none() {
            return;
        }
        self.selected = None;
        trace!("toggle selection cleared");
        self.notify();
    }

    fn notify(&self) {
        for callback in &self.on_change {
            callback(self.selected);
        }
    }
}

impl Default for ToggleGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ToggleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleGroup")
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("allow_deselect", &self.allow_deselect)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_at_most_one_selected() {
        let mut group = ToggleGroup::with_items(["home", "search", "settings"]);

        group.select(0);
        assert_eq!(group.selected(), Some(0));

        group.select(2);
        assert_eq!(group.selected(), Some(2));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut group = ToggleGroup::with_items(["a", "b"]);
        group.select(5);
        assert_eq!(group.selected(), None);
    }

    #[test]
    fn test_reselect_is_noop_by_default() {
        let changes = Arc::new(Mutex::new(0));
        let mut group = ToggleGroup::with_items(["a", "b"]);

        let count = changes.clone();
        group.on_change(move |_| *count.lock().unwrap() += 1);

        group.select(1);
        group.select(1);
        assert_eq!(group.selected(), Some(1));
        assert_eq!(*changes.lock().unwrap(), 1);
    }

    #[test]
    fn test_reselect_deselects_when_allowed() {
        let last: Arc<Mutex<Option<Option<usize>>>> = Arc::new(Mutex::new(None));
        let mut group = ToggleGroup::with_items(["a", "b"]).allow_deselect(true);

        let seen = last.clone();
        group.on_change(move |selected| *seen.lock().unwrap() = Some(selected));

        group.select(0);
        assert_eq!(*last.lock().unwrap(), Some(Some(0)));

        group.select(0);
        assert_eq!(group.selected(), None);
        assert_eq!(*last.lock().unwrap(), Some(None));
    }

    #[test]
    fn test_deselect_blocked_by_default() {
        let mut group = ToggleGroup::with_items(["a"]);
        group.select(0);
        group.deselect();
        assert_eq!(group.selected(), Some(0));
    }
}
