//! UI Components
//!
//! Reusable Leptos components.

mod status;
mod stars;
mod pagination;
mod confirm_button;
mod favorite_button;
mod recipe_card;
mod feedback_summary;
mod feedback_list;
mod feedback_form;
mod nav;
mod footer;

pub use status::{ErrorNotice, Spinner};
pub use stars::StarRating;
pub use pagination::{shows_controls, Pagination};
pub use confirm_button::ConfirmButton;
pub use favorite_button::FavoriteButton;
pub use recipe_card::RecipeCard;
pub use feedback_summary::FeedbackSummaryPanel;
pub use feedback_list::FeedbackList;
pub use feedback_form::FeedbackForm;
pub use nav::NavBar;
pub use footer::Footer;
