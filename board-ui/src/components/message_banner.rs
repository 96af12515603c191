//! Message Banner Component
//!
//! Shows the current status message until its timer hides it.

use leptos::*;

use crate::state::use_controller;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let state = *use_controller().view();

    view! {
        {move || {
            state.banner.with(|banner| banner.current().cloned()).map(|message| view! {
                <div id="message" class=format!("message {}", message.kind.as_str())>
                    {message.text}
                </div>
            })
        }}
    }
}
