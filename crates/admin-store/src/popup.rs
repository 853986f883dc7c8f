//! Confirmation popup
//!
//! One side asks (`call_popup`) and waits; the other side shows the text and
//! answers (`answer_popup`). Waiters wake on any change of `is_returned`,
//! so every caller attached to the same popup resolves on the same flip.

use std::future::Future;
use std::sync::Arc;

use crate::state::PopupState;
use crate::store::AdminStore;

impl AdminStore {
    /// Show `text` and wait for the answer
    ///
    /// The popup text and visibility are set before this returns; the
    /// returned future resolves to `is_returned && answer` once
    /// `is_returned` changes. There is no timeout.
    pub fn call_popup(
        &self,
        text: impl Into<String>,
    ) -> impl Future<Output = bool> + Send + 'static {
        let text = text.into();
        self.update_popup(|popup| {
            popup.text = text;
            popup.is_active = true;
        });

        let mut flag = self.popup_flag.subscribe();
        let initial = *flag.borrow_and_update();
        let state = Arc::clone(&self.state);

        async move {
            if flag.wait_for(|returned| *returned != initial).await.is_err() {
                return false;
            }
            let resolution = match state.read() {
                Ok(state) => state.popup.resolution(),
                Err(poisoned) => poisoned.into_inner().popup.resolution(),
            };
            resolution
        }
    }

    /// Record the user's answer and wake the waiters
    pub fn answer_popup(&self, answer: bool) {
        self.update_popup(|popup| {
            popup.answer = answer;
            popup.is_returned = true;
        });
    }

    /// Reset the popup to its hidden, unanswered state
    pub fn clear_popup(&self) {
        self.update_popup(|popup| *popup = PopupState::default());
    }

    pub fn popup(&self) -> PopupState {
        self.read(|state| state.popup.clone())
    }

    fn update_popup(&self, f: impl FnOnce(&mut PopupState)) {
        let returned = {
            let mut state = self.write_state();
            f(&mut state.popup);
            state.popup.is_returned
        };
        self.popup_flag.send_if_modified(|flag| {
            let changed = *flag != returned;
            *flag = returned;
            changed
        });
    }
}
