use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::GradesClient;
use crate::error::RosterError;

use super::student::{format_score, parse_score, Student};

/// Identifies one roster load. Only the most recently issued, uncancelled
/// ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Client-side roster state: the loaded students and which one is selected.
///
/// The record list is shared copy-on-write, so a snapshot taken with
/// [`RosterSession::snapshot`] never observes later edits.
#[derive(Debug, Clone, Default)]
pub struct RosterSession {
    records: Arc<Vec<Student>>,
    selected: Option<usize>,
    generation: u64,
    pending: Option<u64>,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already fetched roster. Nothing is selected.
    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            records: Arc::new(records),
            ..Self::default()
        }
    }

    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn snapshot(&self) -> Arc<Vec<Student>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw selection, which may point past the end of the list.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_student(&self) -> Option<&Student> {
        self.selected.and_then(|index| self.records.get(index))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Point the selection at `index`. Bounds are checked when the selection
    /// is read or edited, not here.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Overwrite the selected student's score with `value` read as an integer.
    /// Unreadable input is stored as NaN. Returns false, leaving every record
    /// untouched, when no student is selected.
    pub fn set_score(&mut self, value: &str) -> bool {
        let Some(index) = self.selected.filter(|&index| index < self.records.len()) else {
            debug!(selected = ?self.selected, "score edit ignored, no student selected");
            return false;
        };

        let score = parse_score(value);
        if score.is_nan() {
            debug!(input = value, "score input is not a number");
        }
        Arc::make_mut(&mut self.records)[index].score = score;
        true
    }

    /// Selected student's score as display text, empty without a selection.
    pub fn current_score(&self) -> String {
        self.selected_student()
            .map(Student::score_text)
            .unwrap_or_default()
    }

    /// Mean of every loaded score as display text, empty for an empty roster.
    pub fn average_score(&self) -> String {
        if self.records.is_empty() {
            return String::new();
        }
        let sum: f64 = self.records.iter().map(|s| s.score).sum();
        format_score(sum / self.records.len() as f64)
    }

    /// Issue a ticket for a new load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.pending = Some(self.generation);
        LoadTicket(self.generation)
    }

    /// Drop the outstanding load, if any. Its result will be discarded.
    pub fn cancel_load(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the outcome of the load identified by `ticket`.
    ///
    /// A fetched roster replaces the current list and selects the first
    /// student. Errors are logged and leave the session as it was. Returns
    /// whether the records were replaced.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Student>, RosterError>,
    ) -> bool {
        if self.pending != Some(ticket.0) {
            debug!(ticket = ticket.0, "discarding result of a superseded roster load");
            return false;
        }
        self.pending = None;

        match result {
            Ok(records) => {
                info!(count = records.len(), "roster loaded");
                self.records = Arc::new(records);
                if !self.records.is_empty() {
                    self.select(0);
                }
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to load roster");
                false
            }
        }
    }

    /// Fetch the roster and apply it. Failures are logged, never returned.
    pub async fn load(&mut self, client: &GradesClient) -> bool {
        let ticket = self.begin_load();
        let result = client.fetch_grades().await;
        self.finish_load(ticket, result)
    }
}
