//! Ordered, in-memory list of palette rows.
//!
//! Mutating operations take a row index and return whether they applied.
//! An index past the end leaves the collection untouched and returns `false`.

use tracing::debug;

use crate::color::Hsb;
use crate::reference::{ColorConfiguration, Reference, update_reference};

#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    rows: Vec<ColorConfiguration>,
}

impl Default for Collection {
    /// One default row.
    fn default() -> Self {
        Self {
            rows: vec![ColorConfiguration::default()],
        }
    }
}

impl Collection {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<ColorConfiguration>) -> Self {
        Self { rows }
    }

    /// Append the default row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.push(ColorConfiguration::default())
    }

    pub fn push(&mut self, row: ColorConfiguration) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    pub fn remove_row(&mut self, index: usize) -> bool {
        if !self.in_range(index, "remove_row") {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Insert a copy of `index` directly after it.
    pub fn duplicate_row(&mut self, index: usize) -> bool {
        if !self.in_range(index, "duplicate_row") {
            return false;
        }
        let copy = self.rows[index];
        self.rows.insert(index + 1, copy);
        true
    }

    pub fn set_hue_sync(&mut self, index: usize, value: bool) -> bool {
        if !self.in_range(index, "set_hue_sync") {
            return false;
        }
        self.rows[index].is_hue_sync = value;
        true
    }

    /// Edit one reference color of a row, applying the row's hue-sync rule.
    pub fn set_reference(&mut self, index: usize, which: Reference, color: Hsb) -> bool {
        if !self.in_range(index, "set_reference") {
            return false;
        }
        self.rows[index] = update_reference(&self.rows[index], which, color);
        true
    }

    pub fn get(&self, index: usize) -> Option<&ColorConfiguration> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorConfiguration> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[ColorConfiguration] {
        &self.rows
    }

    fn in_range(&self, index: usize, op: &str) -> bool {
        let ok = index < self.rows.len();
        if !ok {
            debug!(op, index, len = self.rows.len(), "row index out of range, ignoring");
        }
        ok
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a ColorConfiguration;
    type IntoIter = std::slice::Iter<'a, ColorConfiguration>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_default_row() {
        let collection = Collection::default();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get(0), Some(&ColorConfiguration::default()));
    }

    #[test]
    fn add_row_returns_new_index() {
        let mut collection = Collection::empty();
        assert_eq!(collection.add_row(), 0);
        assert_eq!(collection.add_row(), 1);
    }
}
