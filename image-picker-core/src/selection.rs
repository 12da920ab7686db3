//! Selection policy of the picker grid.
//!
//! Tapping a selected item deselects it. In single mode a new item replaces
//! the current one; in multiple mode it is appended unless the cap is reached,
//! in which case the tap is ignored. Order is the order of selection.

use crate::models::{MaxSelection, NativeRequest};

#[derive(Debug, Clone)]
pub struct SelectionState<T> {
    allow_multiple: bool,
    max_selection: MaxSelection,
    selected: Vec<T>,
}

impl<T: PartialEq> SelectionState<T> {
    pub fn new(request: &NativeRequest) -> Self {
        Self {
            allow_multiple: request.allow_multiple,
            max_selection: request.max_selection,
            selected: Vec::new(),
        }
    }

    /// Toggle `item` and report whether it is selected afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        if let Some(index) = self.selected.iter().position(|s| *s == item) {
            self.selected.remove(index);
            return false;
        }
        self.select(item)
    }

    /// Select `item` without ever deselecting it.
    ///
    /// Returns whether the item is selected afterwards.
    pub fn select(&mut self, item: T) -> bool {
        if self.selected.contains(&item) {
            return true;
        }

        if !self.allow_multiple {
            self.selected.clear();
            self.selected.push(item);
            return true;
        }

        if !self.max_selection.has_room(self.selected.len()) {
            return false;
        }
        self.selected.push(item);
        true
    }

    pub fn is_selected(&self, item: &T) -> bool {
        self.selected.contains(item)
    }

    /// Whether further taps on unselected items will be ignored.
    pub fn is_full(&self) -> bool {
        self.allow_multiple && !self.max_selection.has_room(self.selected.len())
    }

    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn into_selected(self) -> Vec<T> {
        self.selected
    }
}
