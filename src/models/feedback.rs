use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::display_date;
use crate::error::ValidationError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// `(value, label)` pairs for the feedback category select
pub const FEEDBACK_CATEGORIES: &[(&str, &str)] = &[
    ("suggestion", "제안"),
    ("compliment", "칭찬"),
    ("complaint", "불만"),
    ("bug", "버그 신고"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackType {
    Recipe,
    Survey,
    General,
}

impl FeedbackType {
    /// Recipe feedback wins over survey feedback when both ids are known
    pub fn infer(recipe_id: Option<&str>, survey_id: Option<&str>) -> Self {
        match (recipe_id, survey_id) {
            (Some(_), _) => FeedbackType::Recipe,
            (None, Some(_)) => FeedbackType::Survey,
            (None, None) => FeedbackType::General,
        }
    }
}

/// Feedback record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub survey_response_id: Option<String>,
    pub feedback_type: FeedbackType,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub difficulty_rating: Option<u8>,
    #[serde(default)]
    pub taste_rating: Option<u8>,
    #[serde(default)]
    pub health_rating: Option<u8>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub improvements: Option<String>,
    #[serde(default)]
    pub made_recipe: bool,
    #[serde(default)]
    pub would_make_again: Option<bool>,
    #[serde(default)]
    pub cooking_time_accurate: Option<bool>,
    #[serde(default)]
    pub instructions_clear: Option<bool>,
    #[serde(default)]
    pub ingredients_available: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub admin_response: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Feedback {
    /// Name shown next to a review; e-mail local part when no name is set
    pub fn author(&self) -> String {
        match self.user_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => name.to_string(),
            None => self
                .user_email
                .split('@')
                .next()
                .filter(|local| !local.is_empty())
                .unwrap_or("익명")
                .to_string(),
        }
    }

    /// Badge label and class for the feedback category
    pub fn category_badge(&self) -> Option<(&'static str, &'static str)> {
        let badge = match self.category.as_deref()? {
            "suggestion" => ("제안", "bg-blue-100 text-blue-800"),
            "compliment" => ("칭찬", "bg-green-100 text-green-800"),
            "complaint" => ("불만", "bg-red-100 text-red-800"),
            "bug" => ("버그", "bg-orange-100 text-orange-800"),
            _ => return None,
        };
        Some(badge)
    }

    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_deref().map(display_date)
    }
}

/// Feedback form contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewFeedback {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub survey_response_id: Option<String>,
    pub feedback_type: FeedbackType,
    pub rating: u8,
    pub difficulty_rating: u8,
    pub taste_rating: u8,
    pub health_rating: u8,
    pub comment: String,
    pub improvements: String,
    pub made_recipe: bool,
    pub would_make_again: bool,
    pub cooking_time_accurate: bool,
    pub instructions_clear: bool,
    pub ingredients_available: bool,
    pub user_email: String,
    pub user_name: String,
    pub category: String,
}

impl NewFeedback {
    pub fn new(recipe_id: Option<String>, survey_response_id: Option<String>) -> Self {
        Self {
            feedback_type: FeedbackType::infer(recipe_id.as_deref(), survey_response_id.as_deref()),
            recipe_id,
            survey_response_id,
            rating: 5,
            difficulty_rating: 3,
            taste_rating: 5,
            health_rating: 5,
            comment: String::new(),
            improvements: String::new(),
            made_recipe: false,
            would_make_again: false,
            cooking_time_accurate: true,
            instructions_clear: true,
            ingredients_available: true,
            user_email: String::new(),
            user_name: String::new(),
            category: "suggestion".to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_email.trim().is_empty() {
            return Err(ValidationError::MissingFields(vec!["user_email"]));
        }
        let ratings = [
            ("rating", self.rating),
            ("difficulty_rating", self.difficulty_rating),
            ("taste_rating", self.taste_rating),
            ("health_rating", self.health_rating),
        ];
        for (field, value) in ratings {
            if !(MIN_RATING..=MAX_RATING).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field,
                    min: MIN_RATING,
                    max: MAX_RATING,
                });
            }
        }
        Ok(())
    }

    /// Clear the free-text answers after a successful submission
    pub fn reset_after_submit(&mut self) {
        self.comment.clear();
        self.improvements.clear();
        self.rating = 5;
    }
}

/// `POST /feedback/submit` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackReceipt {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

/// `GET /feedback` filters
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackQuery {
    pub page: u32,
    pub size: u32,
    pub recipe_id: Option<String>,
}

impl FeedbackQuery {
    pub fn for_recipe(recipe_id: impl Into<String>) -> Self {
        Self {
            page: 1,
            size: 10,
            recipe_id: Some(recipe_id.into()),
        }
    }

    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some(recipe_id) = &self.recipe_id {
            pairs.push(("recipe_id".to_string(), recipe_id.clone()));
        }
        pairs
    }
}

/// `GET /feedback/recipe/:id/summary` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedbackSummary {
    #[serde(default)]
    pub average_rating: f64,
    #[serde(default)]
    pub total_feedbacks: u32,
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u32>,
    #[serde(default)]
    pub made_recipe_count: u32,
    #[serde(default)]
    pub would_make_again_percentage: f64,
}

impl FeedbackSummary {
    pub fn count_for(&self, stars: u8) -> u32 {
        self.rating_distribution
            .get(&stars.to_string())
            .copied()
            .unwrap_or(0)
    }

    /// Share of reviews with exactly `stars`, in percent
    pub fn percentage_for(&self, stars: u8) -> f64 {
        if self.total_feedbacks == 0 {
            return 0.0;
        }
        f64::from(self.count_for(stars)) / f64::from(self.total_feedbacks) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feedback_type_inference() {
        assert_eq!(FeedbackType::infer(Some("r1"), Some("s1")), FeedbackType::Recipe);
        assert_eq!(FeedbackType::infer(None, Some("s1")), FeedbackType::Survey);
        assert_eq!(FeedbackType::infer(None, None), FeedbackType::General);
    }

    #[test]
    fn test_email_is_required() {
        let form = NewFeedback::new(Some("r1".to_string()), None);
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec!["user_email"]))
        );
    }

    #[test]
    fn test_ratings_must_be_in_range() {
        let mut form = NewFeedback::new(Some("r1".to_string()), None);
        form.user_email = "a@b.com".to_string();
        assert_eq!(form.validate(), Ok(()));

        form.taste_rating = 6;
        assert!(matches!(
            form.validate(),
            Err(ValidationError::OutOfRange { field: "taste_rating", .. })
        ));
    }

    #[test]
    fn test_reset_keeps_identity_fields() {
        let mut form = NewFeedback::new(Some("r1".to_string()), None);
        form.user_email = "a@b.com".to_string();
        form.comment = "짜요".to_string();
        form.rating = 2;
        form.reset_after_submit();

        assert_eq!(form.comment, "");
        assert_eq!(form.rating, 5);
        assert_eq!(form.user_email, "a@b.com");
    }

    #[test]
    fn test_body_serializes_lowercase_type() {
        let form = NewFeedback::new(None, Some("s1".to_string()));
        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["feedback_type"], "survey");
        assert_eq!(body["survey_response_id"], "s1");
        assert!(body.get("recipe_id").is_none());
    }

    #[test]
    fn test_summary_distribution() {
        let summary: FeedbackSummary = serde_json::from_value(json!({
            "average_rating": 4.5,
            "total_feedbacks": 4,
            "rating_distribution": { "5": 3, "4": 1 },
            "made_recipe_count": 2,
            "would_make_again_percentage": 75.0
        }))
        .unwrap();

        assert_eq!(summary.percentage_for(5), 75.0);
        assert_eq!(summary.percentage_for(1), 0.0);
    }

    #[test]
    fn test_author_and_date() {
        let feedback: Feedback = serde_json::from_value(json!({
            "id": "f1",
            "feedback_type": "recipe",
            "user_email": "cook@example.com",
            "created_at": "2024-03-01T09:30:00Z"
        }))
        .unwrap();
        assert_eq!(feedback.author(), "cook");
        assert_eq!(feedback.created_date().as_deref(), Some("2024-03-01"));
        assert_eq!(feedback.category_badge(), None);
    }

    #[test]
    fn test_category_badge() {
        let feedback: Feedback = serde_json::from_value(json!({
            "id": "f2",
            "feedback_type": "general",
            "category": "bug",
            "instructions_clear": false
        }))
        .unwrap();
        assert_eq!(feedback.category_badge().map(|(label, _)| label), Some("버그"));
        assert_eq!(feedback.instructions_clear, Some(false));
    }
}
