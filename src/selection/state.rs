//! Selection set state

use crate::model::Artwork;

/// The ordered set of currently selected records.
///
/// Row identity is the record id. The set lives in process memory for
/// the duration of the session and persists across page navigation; it
/// is never synchronized with the remote source.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    records: Vec<Artwork>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected records in selection order
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Number of selected records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing is selected
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the record with this id is selected
    pub fn contains(&self, id: i64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    /// Toggle one record in or out of the selection.
    ///
    /// Returns true if the record is selected afterwards.
    pub fn toggle(&mut self, record: Artwork) -> bool {
        if let Some(pos) = self.records.iter().position(|r| r.id == record.id) {
            self.records.remove(pos);
            false
        } else {
            self.records.push(record);
            true
        }
    }

    /// Replace the whole selection with a bulk result.
    ///
    /// Prior contents are discarded, not merged.
    pub fn assign(&mut self, records: Vec<Artwork>) {
        self.records = records;
    }

    /// Empty the selection
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
