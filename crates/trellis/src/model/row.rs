//! Row identity and the host-facing row model boundary.
//!
//! The selection controller never owns row data. It addresses rows by
//! [`RowId`] and reaches them through the [`RowModel`] trait, which the host
//! grid implements over whatever row representation it already has. The only
//! per-row state the controller touches is the boolean selected flag,
//! abstracted by [`Selectable`].
//!
//! [`RowListModel`] is a ready-made `RowModel` for hosts that keep rows in a
//! flat ordered list, and for tests.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable identity of a host-owned row.
    ///
    /// IDs are handed out by the row store and compare by identity, not by
    /// row content. An ID is never reused while its row is alive, so a
    /// selection can hold IDs across inserts, removals, and reorders and
    /// detect stale entries via [`RowModel::index_of`].
    pub struct RowId;
}

/// Capability interface for rows that carry a selected flag.
///
/// The flag lives on the host's row object; the selection controller only
/// ever reads and writes it through this trait, keeping the controller
/// independent of the concrete row type.
pub trait Selectable {
    /// Returns whether this row is currently marked selected.
    fn is_selected(&self) -> bool;

    /// Sets the selected flag.
    fn set_selected(&mut self, selected: bool);
}

/// The ordered row sequence a selection controller operates over.
///
/// Implemented by the host grid's row storage. The sequence may change
/// between controller calls; the controller re-resolves indices on every
/// operation and never caches lookups across calls.
///
/// Rows that are not (or no longer) part of the sequence are treated
/// defensively: lookups return `None`/`false` and flag writes are ignored.
pub trait RowModel {
    /// Number of rows currently in the sequence.
    fn row_count(&self) -> usize;

    /// The row at `index` in display order, or `None` when out of range.
    fn row_at(&self, index: usize) -> Option<RowId>;

    /// The display index of `row`, or `None` when the row is not in the
    /// sequence. Linear identity lookup.
    fn index_of(&self, row: RowId) -> Option<usize>;

    /// Whether `row` is marked selected. `false` for unknown rows.
    fn is_selected(&self, row: RowId) -> bool;

    /// Sets the selected flag on `row`. Ignored for unknown rows.
    fn set_selected(&mut self, row: RowId, selected: bool);
}

/// A flat, ordered row store implementing [`RowModel`].
///
/// Rows live in a slot map keyed by [`RowId`]; a separate order vector
/// defines display adjacency for range and arrow-key operations. Removal
/// invalidates the removed row's ID without disturbing the others.
///
/// # Example
///
/// ```
/// use trellis::model::{RowListModel, Selectable};
///
/// struct Track {
///     title: String,
///     selected: bool,
/// }
///
/// impl Selectable for Track {
///     fn is_selected(&self) -> bool {
///         self.selected
///     }
///     fn set_selected(&mut self, selected: bool) {
///         self.selected = selected;
///     }
/// }
///
/// let mut rows = RowListModel::new();
/// let id = rows.push(Track { title: "Intro".into(), selected: false });
/// assert_eq!(rows.get(id).unwrap().title, "Intro");
/// ```
pub struct RowListModel<T> {
    rows: SlotMap<RowId, T>,
    order: Vec<RowId>,
}

impl<T> Default for RowListModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowListModel<T> {
    /// Creates an empty row store.
    pub fn new() -> Self {
        Self {
            rows: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Creates a row store from rows in display order.
    pub fn from_rows(items: impl IntoIterator<Item = T>) -> Self {
        let mut model = Self::new();
        for item in items {
            model.push(item);
        }
        model
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Appends a row, returning its identity.
    pub fn push(&mut self, item: T) -> RowId {
        let id = self.rows.insert(item);
        self.order.push(id);
        id
    }

    /// Inserts a row at `index` in display order, returning its identity.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) -> RowId {
        let id = self.rows.insert(item);
        self.order.insert(index, id);
        id
    }

    /// Removes a row by identity, returning its data.
    ///
    /// Returns `None` when the row is not in the store.
    pub fn remove(&mut self, row: RowId) -> Option<T> {
        let item = self.rows.remove(row)?;
        self.order.retain(|id| *id != row);
        Some(item)
    }

    /// Removes all rows.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.order.clear();
    }

    /// Borrows a row's data.
    pub fn get(&self, row: RowId) -> Option<&T> {
        self.rows.get(row)
    }

    /// Mutably borrows a row's data.
    pub fn get_mut(&mut self, row: RowId) -> Option<&mut T> {
        self.rows.get_mut(row)
    }

    /// Row identities in display order.
    pub fn row_ids(&self) -> &[RowId] {
        &self.order
    }

    /// Iterates rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RowId, &T)> {
        self.order.iter().map(|id| (*id, &self.rows[*id]))
    }

    /// Swaps two rows in display order.
    pub fn swap(&mut self, a: usize, b: usize) {
        if a >= self.order.len() || b >= self.order.len() {
            return;
        }
        self.order.swap(a, b);
    }
}

impl<T: Selectable> RowModel for RowListModel<T> {
    fn row_count(&self) -> usize {
        self.order.len()
    }

    fn row_at(&self, index: usize) -> Option<RowId> {
        self.order.get(index).copied()
    }

    fn index_of(&self, row: RowId) -> Option<usize> {
        self.order.iter().position(|id| *id == row)
    }

    fn is_selected(&self, row: RowId) -> bool {
        self.rows.get(row).is_some_and(Selectable::is_selected)
    }

    fn set_selected(&mut self, row: RowId, selected: bool) {
        if let Some(item) = self.rows.get_mut(row) {
            item.set_selected(selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        label: &'static str,
        selected: bool,
    }

    impl Item {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                selected: false,
            }
        }
    }

    impl Selectable for Item {
        fn is_selected(&self) -> bool {
            self.selected
        }

        fn set_selected(&mut self, selected: bool) {
            self.selected = selected;
        }
    }

    #[test]
    fn test_push_and_order() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));
        let b = model.push(Item::new("b"));

        assert_eq!(model.len(), 2);
        assert_eq!(model.row_at(0), Some(a));
        assert_eq!(model.row_at(1), Some(b));
        assert_eq!(model.index_of(b), Some(1));
        assert_eq!(model.row_at(2), None);
    }

    #[test]
    fn test_insert_shifts_order() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));
        let c = model.push(Item::new("c"));
        let b = model.insert(1, Item::new("b"));

        assert_eq!(model.row_ids(), &[a, b, c]);
        assert_eq!(model.get(b).unwrap().label, "b");
    }

    #[test]
    fn test_remove_invalidates_id() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));
        let b = model.push(Item::new("b"));

        let removed = model.remove(a).unwrap();
        assert_eq!(removed.label, "a");
        assert_eq!(model.index_of(a), None);
        assert_eq!(model.index_of(b), Some(0));
        assert!(model.remove(a).is_none());
    }

    #[test]
    fn test_selected_flag_roundtrip() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));

        assert!(!RowModel::is_selected(&model, a));
        model.set_selected(a, true);
        assert!(RowModel::is_selected(&model, a));
        assert!(model.get(a).unwrap().selected);
    }

    #[test]
    fn test_unknown_row_is_defensive() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));
        model.remove(a).unwrap();

        assert!(!RowModel::is_selected(&model, a));
        model.set_selected(a, true); // ignored
        assert_eq!(model.index_of(a), None);
    }

    #[test]
    fn test_swap_changes_adjacency() {
        let mut model = RowListModel::new();
        let a = model.push(Item::new("a"));
        let b = model.push(Item::new("b"));

        model.swap(0, 1);
        assert_eq!(model.row_ids(), &[b, a]);

        model.swap(0, 5); // out of range, ignored
        assert_eq!(model.row_ids(), &[b, a]);
    }

    #[test]
    fn test_iter_display_order() {
        let mut model = RowListModel::new();
        model.push(Item::new("x"));
        model.push(Item::new("y"));

        let labels: Vec<_> = model.iter().map(|(_, item)| item.label).collect();
        assert_eq!(labels, vec!["x", "y"]);
    }
}
