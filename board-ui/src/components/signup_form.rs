//! Sign-up Form Component
//!
//! Email input plus activity selector.

use activity_board::board::SELECT_PLACEHOLDER;
use leptos::*;
use std::rc::Rc;

use crate::state::use_controller;

/// Sign-up form; options follow the rendered cards
#[component]
pub fn SignupForm() -> impl IntoView {
    let controller = use_controller();
    let state = *controller.view();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email = state.email.get_untracked();
        let activity = state.selected_activity.get_untracked();

        let controller = Rc::clone(&controller);
        spawn_local(async move {
            controller.signup(&email, &activity).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="your-email@mergington.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    prop:value=move || state.selected_activity.get()
                    on:change=move |ev| state.selected_activity.set(event_target_value(&ev))
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    <For
                        each=move || state.cards.get()
                        key=|card| card.name.clone()
                        children=move |card| {
                            let value = card.name.clone();
                            view! { <option value=value>{card.name}</option> }
                        }
                    />
                </select>
            </div>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
