//! Activity List Component
//!
//! Renders one card per visible activity. Removal buttons carry their
//! activity and email as data attributes and are handled by a single click
//! listener on the list container, so redrawing the cards never leaves
//! stale handlers behind.

use leptos::*;
use wasm_bindgen::JsCast;

use activity_board::view::{DATA_ACTIVITY, DATA_EMAIL, NO_PARTICIPANTS};
use activity_board::{ActivityCard, RemovalTarget};

use crate::components::CardSkeleton;
use crate::state::use_global_state;

const REMOVE_BUTTON_SELECTOR: &str = ".delete-btn";

#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_global_state();
    let cards = state.cards();

    let on_click = move |ev: ev::MouseEvent| {
        if let Some(target) = removal_target(&ev) {
            spawn_local(state.unregister(target));
        }
    };

    view! {
        <div id="activities-list" class="space-y-4" on:click=on_click>
            {move || {
                if let Some(message) = state.load_error.get() {
                    return view! { <p class="text-red-400">{message}</p> }.into_view();
                }

                let cards = cards.get();
                if cards.is_empty() && state.loading.get() {
                    return view! { <CardSkeleton /> }.into_view();
                }

                cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view()
            }}
        </div>
    }
}

/// Find the removal button under a click and read its data attributes
fn removal_target(ev: &ev::MouseEvent) -> Option<RemovalTarget> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = element.closest(REMOVE_BUTTON_SELECTOR).ok()??;

    RemovalTarget::from_attributes(
        button.get_attribute(DATA_ACTIVITY),
        button.get_attribute(DATA_EMAIL),
    )
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability();
    let has_participants = card.has_participants();

    view! {
        <div class="activity-card bg-gray-800 rounded-lg p-4">
            <div class="flex items-center justify-between mb-2">
                <h4 class="text-lg font-semibold">{card.name}</h4>
                <span class="text-xs text-gray-400 uppercase">{card.category}</span>
            </div>
            <p class="text-gray-300 mb-2">{card.description}</p>
            <p class="text-sm">
                <strong>"Schedule: "</strong>
                {card.schedule}
            </p>
            <p class="text-sm">
                <strong>"Availability: "</strong>
                {availability}
            </p>

            <div class="participants-container mt-3">
                <h5 class="text-sm font-medium text-gray-400 mb-1">"Participants:"</h5>
                {if has_participants {
                    view! {
                        <ul class="participants-list space-y-1">
                            {card.participants.into_iter().map(|row| view! {
                                <li class="flex items-center justify-between">
                                    <span class="participant-email">{row.email}</span>
                                    <button
                                        type="button"
                                        class="delete-btn text-red-400 hover:text-red-300"
                                        data-activity=row.removal.activity
                                        data-email=row.removal.email
                                        aria-label="Unregister"
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_view()
                } else {
                    view! {
                        <p class="text-sm text-gray-500 italic">{NO_PARTICIPANTS}</p>
                    }.into_view()
                }}
            </div>
        </div>
    }
}
