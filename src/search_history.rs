//! Bounded, de-duplicated search history, most recent first.

use crate::app_response::AppResponse;
use crate::store_state::{AppStoreState, KEY_SEARCH_HISTORY};

/// Upper bound on retained queries; the oldest entry is dropped beyond this.
pub const HISTORY_LIMIT: usize = 10;

impl AppStoreState {
    /// Returns the persisted search history, most recent first.
    pub fn search_history(&self) -> Result<Vec<String>, AppResponse> {
        self.load_collection(KEY_SEARCH_HISTORY)
    }

    /// Records a query at the front of the history and truncates to
    /// [`HISTORY_LIMIT`]. A blank query is ignored. A query already present
    /// anywhere in the list is left exactly where it is, without reordering
    /// or duplication.
    pub fn record_search(&self, query: &str) -> Result<Vec<String>, AppResponse> {
        let query = query.trim();
        let mut history = self.search_history()?;
        if query.is_empty() || history.iter().any(|q| q == query) {
            return Ok(history);
        }
        history.insert(0, query.to_string());
        history.truncate(HISTORY_LIMIT);
        self.store_collection(KEY_SEARCH_HISTORY, &history)?;
        Ok(history)
    }
}
