//! UI Components
//!
//! Leptos components of the board page.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_form;

pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use message_banner::MessageBanner;
pub use signup_form::SignupForm;
