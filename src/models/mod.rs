//! Frontend Models
//!
//! Client-side representations of backend entities. The backend owns the
//! authoritative copies; these only carry what the pages read or submit.

mod feedback;
mod recipe;
mod survey;
mod user;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use feedback::{
    Feedback, FeedbackQuery, FeedbackReceipt, FeedbackSummary, FeedbackType, NewFeedback, FEEDBACK_CATEGORIES, MAX_RATING,
    MIN_RATING,
};
pub use recipe::{Difficulty, Recipe, RecipeQuery};
pub use survey::{HealthCategory, ListField, ScalarField, SurveyDraft, SurveyResponse, WellnessResult};
pub use user::{AuthResponse, Credentials, ProfileUpdate, RegisterRequest, Session, UserProfile};

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub pages: u32,
}

impl<T> Paginated<T> {
    /// Pagination controls are only rendered for multi-page results
    pub fn has_multiple_pages(&self) -> bool {
        self.pages > 1
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

fn first_page() -> u32 {
    1
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy" | "up")
    }
}

/// `2024-03-01` from a backend timestamp, with or without an offset.
/// Unparseable input is shown as-is.
pub fn display_date(raw: &str) -> String {
    if let Ok(timestamp) = raw.parse::<DateTime<Utc>>() {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    match raw.parse::<NaiveDateTime>() {
        Ok(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-03-01T09:30:00Z"), "2024-03-01");
        assert_eq!(display_date("2024-03-01T09:30:00.123456"), "2024-03-01");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_pagination_flags() {
        let single: Paginated<u32> = serde_json::from_value(json!({ "items": [1], "pages": 1 })).unwrap();
        assert!(!single.has_multiple_pages());
        assert!(!single.has_previous());

        let middle: Paginated<u32> = serde_json::from_value(json!({ "items": [], "page": 2, "pages": 3 })).unwrap();
        assert!(middle.has_multiple_pages());
        assert!(middle.has_previous());
        assert!(middle.has_next());
    }

    #[test]
    fn test_health_status() {
        assert!(HealthStatus { status: "healthy".to_string() }.is_healthy());
        assert!(!HealthStatus { status: "degraded".to_string() }.is_healthy());
    }
}
