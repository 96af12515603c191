//! Activity List Component
//!
//! The card list with its loading and error placeholders.

use activity_board::board::{LOADING_TEXT, LOAD_ERROR_TEXT};
use activity_board::ListStatus;
use leptos::*;

use crate::components::ActivityCard;
use crate::state::use_controller;

/// All activity cards, keyed by activity name
#[component]
pub fn ActivityList() -> impl IntoView {
    let state = *use_controller().view();

    view! {
        <div id="activities-list">
            {move || match state.status.get() {
                ListStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
                ListStatus::Failed => view! { <p class="error">{LOAD_ERROR_TEXT}</p> }.into_view(),
                ListStatus::Ready => view! {
                    <For
                        each=move || state.cards.get()
                        key=|card| card.name.clone()
                        children=move |card| view! { <ActivityCard card=card /> }
                    />
                }.into_view(),
            }}
        </div>
    }
}
