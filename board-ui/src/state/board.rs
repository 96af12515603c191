//! Board Page State
//!
//! Reactive state of the page and its [`BoardView`] implementation.

use activity_board::{
    Activity, ActivityDetails, ActivityMap, ApiError, Banner, BoardView, ListStatus, Message,
};
use leptos::*;

/// A rendered card. Name, description and schedule never change for the
/// lifetime of a card; roster and capacity are signals so an in-place update
/// only re-renders the pieces that show them.
#[derive(Clone)]
pub struct CardHandle {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: RwSignal<u32>,
    pub participants: RwSignal<Vec<String>>,
}

impl CardHandle {
    fn new(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            max_participants: create_rw_signal(activity.details.max_participants),
            participants: create_rw_signal(activity.details.participants.clone()),
        }
    }

    fn dispose(self) {
        self.max_participants.dispose();
        self.participants.dispose();
    }
}

/// Page state provided to all components through the controller
#[derive(Clone, Copy)]
pub struct BoardState {
    /// Loading / ready / failed
    pub status: RwSignal<ListStatus>,
    /// Cards in server order; also feeds the selector options
    pub cards: RwSignal<Vec<CardHandle>>,
    /// Status message area
    pub banner: RwSignal<Banner>,
    /// Sign-up form: email input
    pub email: RwSignal<String>,
    /// Sign-up form: selected activity (empty = placeholder option)
    pub selected_activity: RwSignal<String>,
    owner: Option<Owner>,
    message_duration_ms: u32,
}

impl BoardState {
    pub fn new(message_duration_ms: u32) -> Self {
        Self {
            status: create_rw_signal(ListStatus::Loading),
            cards: create_rw_signal(Vec::new()),
            banner: create_rw_signal(Banner::new()),
            email: create_rw_signal(String::new()),
            selected_activity: create_rw_signal(String::new()),
            owner: Owner::current(),
            message_duration_ms,
        }
    }

    fn find_card(&self, name: &str) -> Option<CardHandle> {
        self.cards
            .with_untracked(|cards| cards.iter().find(|c| c.name == name).cloned())
    }

    /// Swap in a new card list and free the signals of the old one. The page
    /// owner outlives every reload, so dropped cards would otherwise keep
    /// their signals alive until the page is torn down.
    fn replace_cards(&self, cards: Vec<CardHandle>) {
        let old = self.cards.get_untracked();
        self.cards.set(cards);
        old.into_iter().for_each(CardHandle::dispose);
    }

    /// Put `message` in the banner and return its ticket
    fn post_message(&self, message: Message) -> u64 {
        let mut ticket = 0;
        self.banner.update(|banner| ticket = banner.show(message));
        ticket
    }

    /// Hide the banner if `ticket` still belongs to the visible message
    fn expire_message(&self, ticket: u64) {
        self.banner.update(|banner| {
            banner.expire(ticket);
        });
    }
}

impl BoardView for BoardState {
    fn show_loading(&self) {
        // Unmount the keyed list before its card signals go away
        self.status.set(ListStatus::Loading);
        self.replace_cards(Vec::new());
        self.selected_activity.set(String::new());
    }

    fn render_activities(&self, activities: &ActivityMap) {
        if self.status.get_untracked() != ListStatus::Loading {
            self.status.set(ListStatus::Loading);
        }

        // Handlers run from spawned tasks; parent the new card signals to the page
        let build = || activities.iter().map(CardHandle::new).collect::<Vec<_>>();
        let cards = match self.owner {
            Some(owner) => with_owner(owner, build),
            None => build(),
        };

        self.replace_cards(cards);
        self.status.set(ListStatus::Ready);
    }

    fn show_load_error(&self, error: &ApiError) {
        web_sys::console::error_1(&format!("Failed to load activities: {}", error).into());
        self.status.set(ListStatus::Failed);
        self.replace_cards(Vec::new());
    }

    fn update_card(&self, name: &str, details: &ActivityDetails) -> bool {
        match self.find_card(name) {
            Some(card) => {
                card.max_participants.set(details.max_participants);
                card.participants.set(details.participants.clone());
                true
            }
            None => false,
        }
    }

    fn show_message(&self, message: Message) {
        if message.kind == activity_board::MessageKind::Error {
            web_sys::console::log_1(&format!("[board] {}", message.text).into());
        }

        let ticket = self.post_message(message);
        let state = *self;
        gloo_timers::callback::Timeout::new(self.message_duration_ms, move || {
            state.expire_message(ticket);
        })
        .forget();
    }

    fn reset_form(&self) {
        self.email.set(String::new());
        self.selected_activity.set(String::new());
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use activity_board::MessageKind;

    fn details(max: u32, participants: &[&str]) -> ActivityDetails {
        ActivityDetails {
            description: "An activity".to_string(),
            schedule: "Fridays".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn sample() -> ActivityMap {
        let mut map = ActivityMap::new();
        map.insert("Chess Club", details(12, &["michael@mergington.edu"]));
        map.insert("Programming Class", details(20, &[]));
        map
    }

    fn card(state: &BoardState, name: &str) -> CardHandle {
        state.find_card(name).unwrap()
    }

    #[test]
    fn test_update_card_touches_only_matching_card() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);
        state.render_activities(&sample());

        let updated = details(14, &["michael@mergington.edu", "new@mergington.edu"]);
        assert!(state.update_card("Chess Club", &updated));

        let chess = card(&state, "Chess Club");
        assert_eq!(chess.max_participants.get_untracked(), 14);
        assert_eq!(chess.participants.get_untracked().len(), 2);

        let programming = card(&state, "Programming Class");
        assert_eq!(programming.max_participants.get_untracked(), 20);
        assert!(programming.participants.get_untracked().is_empty());

        assert!(!state.update_card("Art Club", &updated));
        assert_eq!(state.cards.with_untracked(|cards| cards.len()), 2);

        runtime.dispose();
    }

    #[test]
    fn test_render_keeps_server_order() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);
        state.render_activities(&sample());

        let names: Vec<String> =
            state.cards.with_untracked(|cards| cards.iter().map(|c| c.name.clone()).collect());
        assert_eq!(names, vec!["Chess Club", "Programming Class"]);
        assert_eq!(state.status.get_untracked(), ListStatus::Ready);

        runtime.dispose();
    }

    #[test]
    fn test_show_loading_clears_cards_and_selection() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);
        state.render_activities(&sample());
        state.selected_activity.set("Chess Club".to_string());
        state.email.set("a@mergington.edu".to_string());

        state.show_loading();
        assert_eq!(state.status.get_untracked(), ListStatus::Loading);
        assert!(state.cards.with_untracked(|cards| cards.is_empty()));
        assert!(state.selected_activity.get_untracked().is_empty());
        // The typed email survives a reload
        assert_eq!(state.email.get_untracked(), "a@mergington.edu");

        runtime.dispose();
    }

    #[test]
    fn test_reset_form() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);
        state.email.set("a@mergington.edu".to_string());
        state.selected_activity.set("Chess Club".to_string());

        state.reset_form();
        assert!(state.email.get_untracked().is_empty());
        assert!(state.selected_activity.get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_stale_ticket_keeps_newer_message() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);

        let first = state.post_message(Message::success("Signed up"));
        let second = state.post_message(Message::error("Failed to unregister"));

        state.expire_message(first);
        let shown = state.banner.with_untracked(|b| b.current().cloned()).unwrap();
        assert_eq!(shown.kind, MessageKind::Error);
        assert_eq!(shown.text, "Failed to unregister");

        state.expire_message(second);
        assert!(state.banner.with_untracked(|b| b.current().is_none()));

        runtime.dispose();
    }

    #[test]
    fn test_reload_disposes_old_card_signals() {
        let runtime = create_runtime();
        let state = BoardState::new(3000);
        state.render_activities(&sample());
        let old = card(&state, "Chess Club");

        state.show_loading();
        state.render_activities(&sample());

        assert!(old.participants.try_get_untracked().is_none());
        assert!(old.max_participants.try_get_untracked().is_none());

        let fresh = card(&state, "Chess Club");
        assert_eq!(
            fresh.participants.get_untracked(),
            vec!["michael@mergington.edu".to_string()]
        );

        runtime.dispose();
    }
}
