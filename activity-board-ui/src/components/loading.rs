//! Loading Component
//!
//! Skeleton shown while the activity list loads.

use leptos::*;

/// Skeleton loader for activity cards
#[component]
pub fn CardSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-lg p-4">
                    <div class="h-5 bg-gray-700 rounded w-1/3 mb-3" />
                    <div class="h-4 bg-gray-700 rounded w-2/3 mb-2" />
                    <div class="h-4 bg-gray-700 rounded w-1/2" />
                </div>
            }).collect_view()}
        </div>
    }
}
