//! Activity Card Component
//!
//! One activity with its spots indicator and participant roster.

use activity_board::board::{participants_heading, spots_text, NO_PARTICIPANTS_TEXT};
use activity_board::ParticipantsSection;
use leptos::*;
use std::rc::Rc;

use crate::state::{use_controller, CardHandle};

/// Activity card. Tagged with `data-activity` so it can be found by name;
/// spots, heading and roster follow the card's signals.
#[component]
pub fn ActivityCard(card: CardHandle) -> impl IntoView {
    let CardHandle {
        name,
        description,
        schedule,
        max_participants,
        participants,
    } = card;

    let spots = move || spots_text(participants.with(|p| p.len()), max_participants.get());
    let heading = move || participants_heading(participants.with(|p| p.len()));

    let activity = name.clone();
    let roster = move || {
        participants.with(|list| match ParticipantsSection::of(list) {
            ParticipantsSection::Empty => view! {
                <p class="no-participants">{NO_PARTICIPANTS_TEXT}</p>
            }
            .into_view(),
            ParticipantsSection::List(emails) => view! {
                <ul class="participants-list">
                    {emails
                        .iter()
                        .map(|email| view! {
                            <ParticipantItem activity=activity.clone() email=email.clone() />
                        })
                        .collect_view()}
                </ul>
            }
            .into_view(),
        })
    };

    view! {
        <div class="activity-card" data-activity=name.clone()>
            <h4>{name}</h4>
            <p>{description}</p>
            <p><strong>"Schedule:"</strong>" "{schedule}</p>
            <p class="spots"><strong>"Spots:"</strong>" "{spots}</p>
            <div class="participants">
                <h5>{heading}</h5>
                {roster}
            </div>
        </div>
    }
}

/// Roster entry with its removal control
#[component]
fn ParticipantItem(activity: String, email: String) -> impl IntoView {
    let controller = use_controller();
    let label = email.clone();

    let on_remove = move |_: ev::MouseEvent| {
        let controller = Rc::clone(&controller);
        let activity = activity.clone();
        let email = email.clone();
        spawn_local(async move {
            controller.unregister(&activity, &email).await;
        });
    };

    view! {
        <li class="participant-item">
            <span class="participant-email">{label}</span>
            <button
                type="button"
                class="remove-participant"
                title="Unregister"
                on:click=on_remove
            >
                "✕"
            </button>
        </li>
    }
}
