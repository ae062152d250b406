//! Toggle-save semantics for the saved-signals collection.
//!
//! Saved signals are keyed by the backend-assigned `id` and kept unique.
//! Saving prepends, so the collection reads most-recently-saved first, and
//! every mutation is written through before the new collection is returned.

use crate::app_response::AppResponse;
use crate::models::{Signal, ToggleOutcome};
use crate::store_state::{AppStoreState, KEY_SAVED_SIGNALS};

impl AppStoreState {
    /// Returns the persisted saved-signals collection, newest first.
    pub fn saved_signals(&self) -> Result<Vec<Signal>, AppResponse> {
        self.load_collection(KEY_SAVED_SIGNALS)
    }

    /// Membership test by signal id against the persisted collection.
    pub fn is_signal_saved(&self, id: &str) -> Result<bool, AppResponse> {
        Ok(self.saved_signals()?.iter().any(|s| s.id == id))
    }

    /// Saves the signal if it is absent, removes it if it is present.
    ///
    /// The returned [`ToggleOutcome`] carries the net effect so the view can
    /// pick the right notification, plus the updated collection for
    /// re-rendering.
    pub fn toggle_signal(&self, signal: Signal) -> Result<ToggleOutcome, AppResponse> {
        let mut signals = self.saved_signals()?;
        let saved = match signals.iter().position(|s| s.id == signal.id) {
            Some(index) => {
                signals.remove(index);
                false
            }
            None => {
                signals.insert(0, signal);
                true
            }
        };
        self.store_collection(KEY_SAVED_SIGNALS, &signals)?;
        Ok(ToggleOutcome { saved, signals })
    }

    /// Unconditional removal by id, used by the dedicated unsave affordance.
    /// Removing an id that is not saved leaves the collection unchanged.
    pub fn unsave_signal(&self, id: &str) -> Result<Vec<Signal>, AppResponse> {
        let mut signals = self.saved_signals()?;
        signals.retain(|s| s.id != id);
        self.store_collection(KEY_SAVED_SIGNALS, &signals)?;
        Ok(signals)
    }
}
