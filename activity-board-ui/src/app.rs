//! App Root Component
//!
//! Single-page layout: filters and the activity list on one side, the
//! signup form on the other, and the status banner on top.

use leptos::*;

use crate::components::{ActivityList, FilterBar, SignupForm, StatusBanner};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();

    // Initial load
    state.refresh();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700">
                <div class="container mx-auto px-4 py-6">
                    <h1 class="text-2xl font-bold">"Activity Board"</h1>
                    <h2 class="text-gray-400">"Browse activities and sign up"</h2>
                </div>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 pb-24 grid lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2 space-y-6">
                    <h3 class="text-xl font-semibold">"Available Activities"</h3>
                    <FilterBar />
                    <ActivityList />
                </section>

                <section>
                    <SignupForm />
                </section>
            </main>

            <StatusBanner />
        </div>
    }
}
