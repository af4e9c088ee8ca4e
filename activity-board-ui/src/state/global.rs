//! Global Application State
//!
//! Reactive state management using Leptos signals. The activity list and
//! filter values live in one [`ViewState`]; cards and dropdown options are
//! memos over it, so a fetch or filter change redraws the list wholesale.

use gloo_timers::callback::Timeout;
use leptos::*;

use activity_board::status::{DEFAULT_DISMISS_MS, LOAD_FAILED_MESSAGE, MISSING_SIGNUP_FIELDS_MESSAGE};
use activity_board::{ActivityCard, MutationKind, RemovalTarget, SelectOption, StatusMessage, ViewState};

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Full activity list plus filter controls
    pub view: RwSignal<ViewState>,
    /// Static message shown instead of the list after a failed load
    pub load_error: RwSignal<Option<String>>,
    /// A list request is in flight
    pub loading: RwSignal<bool>,
    /// Status banner message; `None` when hidden
    pub status: RwSignal<Option<StatusMessage>>,
    /// Pending auto-hide for the status banner
    hide_timer: StoredValue<Option<Timeout>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        view: create_rw_signal(ViewState::new()),
        load_error: create_rw_signal(None),
        loading: create_rw_signal(false),
        status: create_rw_signal(None),
        hide_timer: store_value(None),
    };

    provide_context(state);
    state
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

impl GlobalState {
    /// Cards for the current filters
    pub fn cards(&self) -> Memo<Vec<ActivityCard>> {
        let view = self.view;
        create_memo(move |_| view.with(|v| v.cards()))
    }

    pub fn category_options(&self) -> Memo<Vec<SelectOption>> {
        let view = self.view;
        create_memo(move |_| view.with(|v| v.category_options()))
    }

    pub fn activity_options(&self) -> Memo<Vec<SelectOption>> {
        let view = self.view;
        create_memo(move |_| view.with(|v| v.activity_options()))
    }

    /// Fetch the full list and replace the view state's copy
    pub async fn fetch_activities(self) {
        self.loading.set(true);

        match api::fetch_activities().await {
            Ok(activities) => {
                self.view.update(|v| v.replace_activities(activities));
                self.load_error.set(None);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error fetching activities: {}", e).into());
                self.load_error.set(Some(LOAD_FAILED_MESSAGE.to_string()));
            }
        }

        self.loading.set(false);
    }

    /// Start a fetch without waiting for it
    pub fn refresh(self) {
        spawn_local(self.fetch_activities());
    }

    /// Submit the signup form. On success `reset_form` runs before the
    /// list is fetched again.
    pub async fn signup(self, activity: String, email: String, reset_form: impl FnOnce()) {
        if activity.trim().is_empty() || email.trim().is_empty() {
            self.show_status(StatusMessage::error(MISSING_SIGNUP_FIELDS_MESSAGE));
            return;
        }

        let outcome = api::signup(&activity, &email).await;
        self.show_status(outcome.status_message(MutationKind::Signup));

        if outcome.is_success() {
            reset_form();
            self.fetch_activities().await;
        }
    }

    /// Handle a click on a participant's removal control
    pub async fn unregister(self, target: RemovalTarget) {
        let outcome = api::unregister(&target.activity, &target.email).await;
        self.show_status(outcome.status_message(MutationKind::Unregister));

        if outcome.is_success() {
            self.fetch_activities().await;
        }
    }

    /// Show a status message and restart the auto-hide countdown
    pub fn show_status(&self, message: StatusMessage) {
        self.status.set(Some(message));

        let status = self.status;
        self.hide_timer.update_value(|timer| {
            if let Some(previous) = timer.take() {
                previous.cancel();
            }
            *timer = Some(Timeout::new(DEFAULT_DISMISS_MS as u32, move || {
                status.set(None);
            }));
        });
    }

    /// Dismiss the banner now
    pub fn clear_status(&self) {
        self.hide_timer.update_value(|timer| {
            if let Some(previous) = timer.take() {
                previous.cancel();
            }
        });
        self.status.set(None);
    }
}
