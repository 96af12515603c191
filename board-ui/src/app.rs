//! App Root Component
//!
//! Page layout and the initial activity load.

use leptos::*;
use std::rc::Rc;

use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::state::provide_controller;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let controller = provide_controller();

    let loader = Rc::clone(&controller);
    spawn_local(async move {
        loader.load_activities().await;
    });

    view! {
        <header>
            <h1>"Activity Board"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageBanner />
            </section>
        </main>
    }
}
