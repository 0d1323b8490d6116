use crate::models::RecordId;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RowMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowOp {
    Save,
    Delete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct RowState {
    pub mode: RowMode,
    pub in_flight: Option<RowOp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RowError {
    /// A save or delete for this row has not resolved yet.
    Busy(RowOp),
    /// The row was deleted.
    Gone,
    NotEditing,
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::Busy(op) => write!(f, "{op:?} already in flight"),
            RowError::Gone => write!(f, "row was removed"),
            RowError::NotEditing => write!(f, "row is not in edit mode"),
        }
    }
}

/// View state of every row the user has touched.
///
/// Rows that never appear here are viewing and idle. The DOM still holds the
/// record values; this only tracks mode and in-flight requests so that a row
/// never runs two requests at once and late responses for deleted rows are
/// dropped.
#[derive(Clone, Debug, Default)]
pub(crate) struct RowBook {
    rows: HashMap<RecordId, RowState>,
    removed: HashSet<RecordId>,
}

impl RowBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: &RecordId) -> Option<RowState> {
        if self.removed.contains(id) {
            return None;
        }
        Some(self.rows.get(id).copied().unwrap_or_default())
    }

    pub fn mode(&self, id: &RecordId) -> Option<RowMode> {
        self.state(id).map(|s| s.mode)
    }

    pub fn is_busy(&self, id: &RecordId) -> bool {
        self.state(id).and_then(|s| s.in_flight).is_some()
    }

    fn idle_entry(&mut self, id: &RecordId) -> Result<&mut RowState, RowError> {
        if self.removed.contains(id) {
            return Err(RowError::Gone);
        }
        let entry = self.rows.entry(id.clone()).or_default();
        match entry.in_flight {
            Some(op) => Err(RowError::Busy(op)),
            None => Ok(entry),
        }
    }

    /// Viewing → editing. Entering edit mode twice is harmless.
    pub fn begin_edit(&mut self, id: &RecordId) -> Result<(), RowError> {
        let entry = self.idle_entry(id)?;
        entry.mode = RowMode::Editing;
        Ok(())
    }

    /// Editing → viewing without a request.
    pub fn cancel_edit(&mut self, id: &RecordId) -> Result<(), RowError> {
        let entry = self.idle_entry(id)?;
        entry.mode = RowMode::Viewing;
        Ok(())
    }

    pub fn begin_save(&mut self, id: &RecordId) -> Result<(), RowError> {
        let entry = self.idle_entry(id)?;
        if entry.mode != RowMode::Editing {
            return Err(RowError::NotEditing);
        }
        entry.in_flight = Some(RowOp::Save);
        Ok(())
    }

    /// Settles a save. Only a successful save leaves edit mode.
    pub fn finish_save(&mut self, id: &RecordId, ok: bool) -> Result<RowMode, RowError> {
        if self.removed.contains(id) {
            return Err(RowError::Gone);
        }
        let entry = self.rows.entry(id.clone()).or_default();
        entry.in_flight = None;
        if ok {
            entry.mode = RowMode::Viewing;
        }
        Ok(entry.mode)
    }

    /// Deleting is allowed from either mode once the row is idle.
    pub fn begin_delete(&mut self, id: &RecordId) -> Result<(), RowError> {
        let entry = self.idle_entry(id)?;
        entry.in_flight = Some(RowOp::Delete);
        Ok(())
    }

    pub fn finish_delete(&mut self, id: &RecordId, ok: bool) -> Result<(), RowError> {
        if self.removed.contains(id) {
            return Err(RowError::Gone);
        }
        if ok {
            self.rows.remove(id);
            self.removed.insert(id.clone());
        } else if let Some(entry) = self.rows.get_mut(id) {
            entry.in_flight = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RecordId {
        RecordId(s.to_string())
    }

    #[test]
    fn test_untouched_row_is_viewing_and_idle() {
        let book = RowBook::new();
        assert_eq!(book.mode(&id("1")), Some(RowMode::Viewing));
        assert!(!book.is_busy(&id("1")));
    }

    #[test]
    fn test_edit_then_cancel_returns_to_viewing() {
        let mut book = RowBook::new();
        book.begin_edit(&id("1")).expect("edit");
        assert_eq!(book.mode(&id("1")), Some(RowMode::Editing));
        book.cancel_edit(&id("1")).expect("cancel");
        assert_eq!(book.mode(&id("1")), Some(RowMode::Viewing));
        // Cancel again is a no-op.
        book.cancel_edit(&id("1")).expect("cancel twice");
        assert_eq!(book.mode(&id("1")), Some(RowMode::Viewing));
    }

    #[test]
    fn test_save_success_exits_edit_mode() {
        let mut book = RowBook::new();
        book.begin_edit(&id("1")).expect("edit");
        book.begin_save(&id("1")).expect("save");
        assert!(book.is_busy(&id("1")));
        assert_eq!(book.finish_save(&id("1"), true), Ok(RowMode::Viewing));
        assert!(!book.is_busy(&id("1")));
    }

    #[test]
    fn test_save_failure_stays_in_edit_mode() {
        let mut book = RowBook::new();
        book.begin_edit(&id("1")).expect("edit");
        book.begin_save(&id("1")).expect("save");
        assert_eq!(book.finish_save(&id("1"), false), Ok(RowMode::Editing));
        assert!(!book.is_busy(&id("1")));
        // The user can retry by hand.
        book.begin_save(&id("1")).expect("retry");
    }

    #[test]
    fn test_save_requires_edit_mode() {
        let mut book = RowBook::new();
        assert_eq!(book.begin_save(&id("1")), Err(RowError::NotEditing));
    }

    #[test]
    fn test_in_flight_save_blocks_other_operations() {
        let mut book = RowBook::new();
        book.begin_edit(&id("1")).expect("edit");
        book.begin_save(&id("1")).expect("save");
        assert_eq!(book.begin_delete(&id("1")), Err(RowError::Busy(RowOp::Save)));
        assert_eq!(book.cancel_edit(&id("1")), Err(RowError::Busy(RowOp::Save)));
        assert_eq!(book.begin_save(&id("1")), Err(RowError::Busy(RowOp::Save)));
        // Other rows are unaffected.
        book.begin_delete(&id("2")).expect("delete other row");
    }

    #[test]
    fn test_delete_success_forgets_row_and_drops_late_save() {
        let mut book = RowBook::new();
        book.begin_delete(&id("1")).expect("delete");
        assert_eq!(book.begin_edit(&id("1")), Err(RowError::Busy(RowOp::Delete)));
        book.finish_delete(&id("1"), true).expect("settle");
        assert_eq!(book.state(&id("1")), None);
        assert_eq!(book.begin_edit(&id("1")), Err(RowError::Gone));
        assert_eq!(book.finish_save(&id("1"), true), Err(RowError::Gone));
    }

    #[test]
    fn test_delete_failure_keeps_mode() {
        let mut book = RowBook::new();
        book.begin_edit(&id("1")).expect("edit");
        book.begin_delete(&id("1")).expect("delete");
        book.finish_delete(&id("1"), false).expect("settle");
        assert_eq!(
            book.state(&id("1")),
            Some(RowState {
                mode: RowMode::Editing,
                in_flight: None
            })
        );
    }
}
