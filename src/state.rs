use crate::error::ResolveError;
use crate::item::Item;

/// A search attempt handed out by [`SearchState::begin_search`].
///
/// Only the ticket with the latest generation may settle the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The query text, lowercased for matching
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Local state of one search field.
///
/// Invariants:
/// - `is_loading` is true only while the latest search attempt is unsettled.
/// - `last_error` is set only by a failed settle and cleared by the next attempt.
/// - `selected` being set means the query shows the selected name and is locked.
#[derive(Debug, Default)]
pub struct SearchState {
    query: String,
    is_loading: bool,
    last_error: Option<ResolveError>,
    selected: Option<Item>,
    rows: Vec<Item>,
    panel_open: bool,
    generation: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&ResolveError> {
        self.last_error.as_ref()
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    /// Rows of the most recently applied resolution
    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Edits are blocked while a selection is held
    pub fn is_locked(&self) -> bool {
        self.selected.is_some()
    }

    /// Replace the query text. Returns false (and changes nothing) while locked.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        if self.is_locked() {
            return false;
        }
        self.query = text.into();
        true
    }

    /// Start a new attempt for the current query: loading on, error cleared.
    /// Any attempt still in flight becomes stale.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.last_error = None;
        SearchTicket {
            generation: self.generation,
            query: self.query.to_lowercase(),
        }
    }

    /// Apply the outcome of an attempt.
    ///
    /// Returns false when the attempt has been superseded; its outcome is dropped
    /// and the state is left untouched.
    pub fn settle(&mut self, generation: u64, result: Result<Vec<Item>, ResolveError>) -> bool {
        if generation != self.generation || !self.is_loading {
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(items) => self.rows = items,
            Err(e) => {
                self.rows.clear();
                self.last_error = Some(e);
            }
        }
        self.panel_open = !self.rows.is_empty();
        true
    }

    /// Commit to a rendered row. Returns the selected item, or `None` if the
    /// index is not a current row.
    pub fn select(&mut self, index: usize) -> Option<&Item> {
        let item = self.rows.get(index)?.clone();
        self.invalidate();
        self.query = item.name.clone();
        self.panel_open = false;
        self.selected = Some(item);
        self.selected.as_ref()
    }

    /// Drop the selection and unlock the query.
    pub fn clear(&mut self) {
        self.invalidate();
        self.query.clear();
        self.panel_open = false;
        self.selected = None;
    }

    /// Hide the results panel, leaving everything else as is.
    pub fn dismiss(&mut self) {
        self.panel_open = false;
    }

    /// Make any in-flight attempt stale.
    fn invalidate(&mut self) {
        self.generation += 1;
        self.is_loading = false;
    }
}
