//! Signup Form Component
//!
//! Activity dropdown plus email field. The form clears once the service
//! accepts the signup, before the list is fetched again.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_global_state();
    let activities = state.activity_options();

    let (activity, set_activity) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);

        let activity = activity.get_untracked();
        let email = email.get_untracked();

        spawn_local(async move {
            state
                .signup(activity, email, move || {
                    set_activity.set(String::new());
                    set_email.set(String::new());
                })
                .await;
            set_submitting.set(false);
        });
    };

    view! {
        <form id="signup-form" class="bg-gray-800 rounded-xl p-6 space-y-4" on:submit=on_submit>
            <h3 class="text-lg font-semibold">"Sign Up for an Activity"</h3>

            <div>
                <label for="activity" class="block text-sm text-gray-400 mb-2">"Activity"</label>
                <select
                    id="activity"
                    on:change=move |ev| set_activity.set(event_target_value(&ev))
                    prop:value=activity
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                >
                    <For
                        each=move || activities.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let value = option.value.clone();
                            view! {
                                <option
                                    value=option.value.clone()
                                    selected=move || activity.get() == value
                                >
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <div>
                <label for="email" class="block text-sm text-gray-400 mb-2">"Student Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=submitting
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed py-3 rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Signing up..." } else { "Sign Up" }}
            </button>
        </form>
    }
}
