//! Status Banner Component
//!
//! Shows the outcome of the last signup or unregister.

use leptos::*;

use activity_board::{Severity, StatusMessage};

use crate::state::use_global_state;

/// Banner for the current status message
#[component]
pub fn StatusBanner() -> impl IntoView {
    let state = use_global_state();

    view! {
        {move || {
            state.status.get().map(|message| view! {
                <StatusMessageView message=message on_close=move || state.clear_status() />
            })
        }}
    }
}

fn banner_style(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Error => ("✕", "bg-red-600"),
    }
}

#[component]
fn StatusMessageView(
    message: StatusMessage,
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let (icon, bg_class) = banner_style(message.severity);

    view! {
        <div
            id="message"
            role="status"
            class=format!(
                "{} fixed bottom-6 right-4 z-50 flex items-center space-x-3 {} text-white \
                 px-4 py-3 rounded-lg shadow-lg animate-slide-in",
                message.severity.css_class(),
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message.text}</span>
            <button
                type="button"
                on:click=move |_| on_close()
                class="text-white/70 hover:text-white"
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_style() {
        assert_eq!(banner_style(Severity::Success).1, "bg-green-600");
        assert_eq!(banner_style(Severity::Error).0, "✕");
    }
}
