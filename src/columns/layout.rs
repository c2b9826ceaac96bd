//! Column visibility and ordering.
//!
//! The layout is a single ordered sequence of `(key, visible)` slots holding every catalog key
//! exactly once. The visibility set and the display order are both read from it, so they
//! cannot drift apart and no key can appear twice.
//!
//! Invariants held after every operation:
//! - every essential key is visible;
//! - the display order contains exactly the visible keys, each once.

use crate::columns::{ColumnDescriptor, ColumnError, ColumnKey};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    pub key: ColumnKey,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    slots: Vec<ColumnSlot>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    /// The default layout: essential columns plus physician, room and admission date.
    pub fn new() -> Self {
        Self::from_catalog(ColumnKey::is_default)
    }

    fn from_catalog(visible: impl Fn(ColumnKey) -> bool) -> Self {
        Self {
            slots: ColumnKey::all()
                .map(|key| ColumnSlot {
                    key,
                    visible: visible(key),
                })
                .collect(),
        }
    }

    /// Show or hide a non-essential column.
    ///
    /// Hiding removes the column from the display order; showing appends it at the end.
    /// Essential columns are left untouched. Returns whether the layout changed.
    pub fn toggle(&mut self, key: ColumnKey) -> bool {
        if key.is_essential() {
            return false;
        }

        let Some(position) = self.slots.iter().position(|slot| slot.key == key) else {
            return false;
        };

        if self.slots[position].visible {
            self.slots[position].visible = false;
        } else {
            self.slots.remove(position);
            self.slots.push(ColumnSlot { key, visible: true });
        }
        true
    }

    /// [`toggle`](Self::toggle) addressed by field name, e.g. `"doctor"`.
    pub fn toggle_named(&mut self, name: &str) -> Result<bool, ColumnError> {
        let key = name.parse::<ColumnKey>()?;
        Ok(self.toggle(key))
    }

    /// Show every column in canonical order.
    pub fn select_all(&mut self) {
        *self = Self::from_catalog(|_| true);
    }

    /// Show only the essential columns, in canonical order.
    pub fn deselect_all(&mut self) {
        *self = Self::from_catalog(ColumnKey::is_essential);
    }

    pub fn reset_to_default(&mut self) {
        *self = Self::new();
    }

    /// Deselect everything when every column is shown, otherwise select everything.
    pub fn toggle_all(&mut self) {
        if self.all_visible() {
            self.deselect_all();
        } else {
            self.select_all();
        }
    }

    /// Move the visible column at `from` to position `to` of the display order.
    ///
    /// Both indices refer to the display order, not the catalog. `from == to` is a no-op,
    /// an out-of-range `from` is ignored and `to` is clamped to the last position.
    /// Returns whether the order changed.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let mut order = self.order();
        if from >= order.len() {
            return false;
        }
        let to = to.min(order.len() - 1);
        if from == to {
            return false;
        }

        let key = order.remove(from);
        order.insert(to, key);

        let hidden = self.slots.iter().filter(|slot| !slot.visible).copied();
        self.slots = order
            .into_iter()
            .map(|key| ColumnSlot { key, visible: true })
            .chain(hidden)
            .collect();
        true
    }

    /// Visible keys in display order.
    pub fn order(&self) -> Vec<ColumnKey> {
        self.visible_slots().map(|slot| slot.key).collect()
    }

    pub fn visible_set(&self) -> BTreeSet<ColumnKey> {
        self.visible_slots().map(|slot| slot.key).collect()
    }

    /// Columns to render, left to right.
    pub fn visible_columns(&self) -> Vec<&'static ColumnDescriptor> {
        self.visible_slots().map(|slot| slot.key.descriptor()).collect()
    }

    pub fn is_visible(&self, key: ColumnKey) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.key == key && slot.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_slots().count()
    }

    pub fn all_visible(&self) -> bool {
        self.slots.iter().all(|slot| slot.visible)
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }

    fn visible_slots(&self) -> impl Iterator<Item = &ColumnSlot> {
        self.slots.iter().filter(|slot| slot.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::CATALOG;

    fn keys(names: &[&str]) -> Vec<ColumnKey> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn default_layout() {
        let layout = ColumnLayout::new();
        assert_eq!(
            layout.order(),
            keys(&[
                "patientId",
                "patientName",
                "department",
                "doctor",
                "roomNumber",
                "status",
                "priority",
                "admissionDate",
            ])
        );
        assert_eq!(layout.visible_count(), 8);
        assert!(!layout.all_visible());
    }

    #[test]
    fn toggling_essential_column_is_ignored() {
        let mut layout = ColumnLayout::new();
        let before = layout.visible_set();
        assert!(!layout.toggle(ColumnKey::PatientId));
        assert_eq!(layout.visible_set(), before);
        assert_eq!(layout, ColumnLayout::new());
    }

    #[test]
    fn toggling_doctor_hides_then_appends() {
        let mut layout = ColumnLayout::new();

        assert_eq!(layout.toggle_named("doctor"), Ok(true));
        assert!(!layout.is_visible(ColumnKey::Doctor));
        assert!(!layout.order().contains(&ColumnKey::Doctor));

        assert_eq!(layout.toggle_named("doctor"), Ok(true));
        assert!(layout.is_visible(ColumnKey::Doctor));
        assert_eq!(layout.order().last(), Some(&ColumnKey::Doctor));
        assert_eq!(layout.visible_count(), 8);
    }

    #[test]
    fn toggle_named_rejects_unknown_columns() {
        let mut layout = ColumnLayout::new();
        assert!(layout.toggle_named("bedSide").is_err());
        assert_eq!(layout, ColumnLayout::new());
    }

    #[test]
    fn select_and_deselect_all() {
        let mut layout = ColumnLayout::new();

        layout.deselect_all();
        assert_eq!(
            layout.order(),
            keys(&["patientId", "patientName", "department", "status", "priority"])
        );

        layout.select_all();
        assert!(layout.all_visible());
        let catalog: Vec<_> = CATALOG.iter().map(|c| c.key).collect();
        assert_eq!(layout.order(), catalog);
    }

    #[test]
    fn toggle_all_flips_between_full_and_minimal() {
        let mut layout = ColumnLayout::new();
        layout.toggle_all();
        assert!(layout.all_visible());
        layout.toggle_all();
        assert_eq!(layout.visible_count(), 5);
    }

    #[test]
    fn reset_restores_default_after_reorder() {
        let mut layout = ColumnLayout::new();
        layout.select_all();
        layout.reorder(0, 5);
        layout.reset_to_default();
        assert_eq!(layout, ColumnLayout::new());
    }

    #[test]
    fn reorder_moves_within_visible_order() {
        let mut layout = ColumnLayout::new();
        // hide roomNumber so visible indices differ from slot indices
        layout.toggle(ColumnKey::RoomNumber);

        assert!(layout.reorder(0, 3));
        assert_eq!(
            layout.order(),
            keys(&[
                "patientName",
                "department",
                "doctor",
                "patientId",
                "status",
                "priority",
                "admissionDate",
            ])
        );
        assert!(!layout.is_visible(ColumnKey::RoomNumber));

        assert!(layout.reorder(3, 0));
        assert_eq!(
            layout.order(),
            keys(&[
                "patientId",
                "patientName",
                "department",
                "doctor",
                "status",
                "priority",
                "admissionDate",
            ])
        );
    }

    #[test]
    fn reorder_edge_cases() {
        let mut layout = ColumnLayout::new();
        let before = layout.clone();

        assert!(!layout.reorder(2, 2));
        assert!(!layout.reorder(40, 0));
        assert_eq!(layout, before);

        assert!(layout.reorder(0, 99));
        assert_eq!(layout.order().last(), Some(&ColumnKey::PatientId));
        assert_eq!(layout.visible_count(), before.visible_count());
    }

    #[test]
    fn projection_follows_order() {
        let mut layout = ColumnLayout::new();
        layout.reorder(7, 0);
        let labels: Vec<_> = layout.visible_columns().iter().map(|c| c.label).collect();
        assert_eq!(labels[0], "Admission Date");
        assert_eq!(labels.len(), layout.visible_count());
    }
}
