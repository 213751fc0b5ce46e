//! Application State Stores
//!
//! Auth and favorites persist across reloads; recipe and survey state live
//! only for the session and use reactive_stores for field-level updates.

mod auth;
mod favorites;
mod recipes;
mod survey;

pub use auth::{restore_session, session_expiry_handler, AuthStore};
pub use favorites::FavoritesStore;
pub use recipes::{RecipeState, RecipeStore};
pub use survey::{SurveyState, SurveyStore};
