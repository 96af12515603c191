//! State Management
//!
//! The page controller and the reactive state it renders into.

pub mod board;

pub use board::{BoardState, CardHandle};

use activity_board::{BoardController, UiConfig};
use leptos::*;
use std::rc::Rc;

use crate::api::{get_api_base, GlooApi};

/// The controller type of this page
pub type PageController = BoardController<GlooApi, BoardState>;

/// Build the page controller once and provide it to the component tree
pub fn provide_controller() -> Rc<PageController> {
    let state = BoardState::new(UiConfig::default().message_duration_ms);
    let controller = Rc::new(BoardController::new(GlooApi::new(get_api_base()), state));

    provide_context(Rc::clone(&controller));
    controller
}

/// The controller provided by [`provide_controller`]
pub fn use_controller() -> Rc<PageController> {
    use_context::<Rc<PageController>>().expect("PageController not found")
}
