//! Feedback Endpoints

use super::{segment, ApiClient};
use crate::error::ApiError;
use crate::models::{Feedback, FeedbackQuery, FeedbackReceipt, FeedbackSummary, NewFeedback, Paginated};

impl ApiClient {
    pub async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<FeedbackReceipt, ApiError> {
        self.post("/feedback/submit", feedback).await
    }

    pub async fn list_feedback(&self, query: &FeedbackQuery) -> Result<Paginated<Feedback>, ApiError> {
        self.get("/feedback", query.to_pairs()).await
    }

    pub async fn recipe_feedback_summary(&self, recipe_id: &str) -> Result<FeedbackSummary, ApiError> {
        self.get(&format!("/feedback/recipe/{}/summary", segment(recipe_id)), Vec::new())
            .await
    }
}
