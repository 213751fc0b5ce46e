//! Routed Pages

mod favorites;
mod home;
mod login;
mod profile;
mod recipe_detail;
mod recipe_list;
mod register;
mod survey_results;
mod survey_form;

pub use favorites::FavoritesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use recipe_detail::RecipeDetailPage;
pub use recipe_list::RecipeListPage;
pub use register::RegisterPage;
pub use survey_form::SurveyFormPage;
pub use survey_results::SurveyResultsPage;
