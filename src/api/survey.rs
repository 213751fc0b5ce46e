//! Survey Endpoints

use serde::Serialize;

use super::{segment, ApiClient};
use crate::error::ApiError;
use crate::models::{SurveyDraft, SurveyResponse, WellnessResult};

#[derive(Serialize)]
struct WellnessArgs<'a> {
    survey_id: &'a str,
}

impl ApiClient {
    pub async fn submit_survey(&self, draft: &SurveyDraft) -> Result<SurveyResponse, ApiError> {
        self.post("/survey/submit", draft).await
    }

    pub async fn survey_results(&self, id: &str) -> Result<SurveyResponse, ApiError> {
        self.get(&format!("/survey/results/{}", segment(id)), Vec::new()).await
    }

    pub async fn wellness(&self, survey_id: &str) -> Result<WellnessResult, ApiError> {
        self.post("/survey/wellness", &WellnessArgs { survey_id }).await
    }

    pub async fn recent_surveys(&self, limit: Option<u32>) -> Result<Vec<SurveyResponse>, ApiError> {
        let query = limit
            .map(|limit| vec![("limit".to_string(), limit.to_string())])
            .unwrap_or_default();
        self.get("/survey/recent", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::client;
    use super::super::{ApiResponse, Method, MockHttpTransport};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_results_page_requests() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == Method::Get && request.path == "/survey/results/S1")
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::json(200, json!({
                    "id": "S1",
                    "wellness_score": 75,
                    "age": "30-39",
                    "email": "a@b.com"
                })))
            });
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::Post
                    && request.path == "/survey/wellness"
                    && request.body == Some(json!({ "survey_id": "S1" }))
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::json(200, json!({
                    "survey_id": "S1",
                    "wellness_score": 75,
                    "health_category": "Good",
                    "recommendations": ["운동을 늘리세요", "채소를 더 드세요"]
                })))
            });
        let (client, _) = client(transport);

        let survey = client.survey_results("S1").await.unwrap();
        let wellness = client.wellness("S1").await.unwrap();

        assert_eq!(survey.answers.age.as_deref(), Some("30-39"));
        assert_eq!(wellness.wellness_score, 75.0);
        assert_eq!(wellness.recommendations.len(), 2);
        assert!(wellness.risk_factors.is_empty());
    }

    #[tokio::test]
    async fn test_recent_limit_is_optional() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.path == "/survey/recent" && request.query.is_empty())
            .times(1)
            .returning(|_| Ok(ApiResponse::json(200, json!([]))));
        let (client, _) = client(transport);

        assert!(client.recent_surveys(None).await.unwrap().is_empty());
    }
}
