//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use citas::{Session, User};

use crate::api::GlooApi;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Backend client, built once from local storage
    pub api: GlooApi,
    /// Current session; written only by login and logout
    pub session: RwSignal<Session>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Create and provide global state
pub fn provide_global_state() {
    let state = GlobalState {
        api: GlooApi::from_storage(),
        session: create_rw_signal(Session::new()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Signed-in user, tracked
    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.user().cloned())
    }

    /// Local calendar date
    pub fn today(&self) -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        }).forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        }).forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
