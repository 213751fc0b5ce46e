//! Survey Store
//!
//! Latest submitted survey plus the user's recent history.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{SurveyDraft, SurveyResponse};

const SUBMIT_FAILED: &str = "설문 제출에 실패했습니다.";
const HISTORY_FAILED: &str = "설문 기록을 불러오는데 실패했습니다.";

#[derive(Clone, Debug, Default, Store)]
pub struct SurveyState {
    /// Most recent successful submission
    pub current_survey: Option<SurveyResponse>,
    pub survey_history: Vec<SurveyResponse>,
    pub is_submitting: bool,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct SurveyStore {
    state: Store<SurveyState>,
    api: ApiClient,
}

impl SurveyStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Store::new(SurveyState::default()),
            api,
        }
    }

    pub fn current_survey(&self) -> Option<SurveyResponse> {
        self.state.current_survey().get()
    }

    pub fn survey_history(&self) -> Vec<SurveyResponse> {
        self.state.survey_history().get()
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting().get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error().get()
    }

    /// Submit answers and return the new survey id.
    ///
    /// Unlike the other store actions, failure is also returned so the
    /// wizard can keep the draft.
    pub async fn submit_survey(&self, draft: &SurveyDraft) -> Result<String, ApiError> {
        *self.state.is_submitting().write() = true;
        *self.state.error().write() = None;

        match self.api.submit_survey(draft).await {
            Ok(response) => {
                log::info!("[SURVEY] Submitted survey {}", response.id);
                let id = response.id.clone();
                *self.state.current_survey().write() = Some(response);
                *self.state.is_submitting().write() = false;
                Ok(id)
            }
            Err(e) => {
                log::error!("[SURVEY] Submit error: {}", e);
                *self.state.error().write() = Some(e.user_message(SUBMIT_FAILED));
                *self.state.is_submitting().write() = false;
                Err(e)
            }
        }
    }

    pub async fn fetch_survey_history(&self) {
        *self.state.error().write() = None;
        match self.api.recent_surveys(None).await {
            Ok(history) => *self.state.survey_history().write() = history,
            Err(e) => {
                log::error!("[SURVEY] History error: {}", e);
                *self.state.error().write() = Some(e.user_message(HISTORY_FAILED));
            }
        }
    }

    pub fn clear_current_survey(&self) {
        *self.state.current_survey().write() = None;
    }

    pub fn clear_error(&self) {
        *self.state.error().write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{always, client};
    use crate::api::{Method, MockHttpTransport};
    use crate::models::ScalarField;
    use serde_json::json;

    fn store(transport: MockHttpTransport) -> (Owner, SurveyStore) {
        let owner = Owner::new();
        owner.set();
        let (api, _) = client(transport);
        (owner, SurveyStore::new(api))
    }

    fn draft() -> SurveyDraft {
        let mut draft = SurveyDraft::default();
        draft.set_field(ScalarField::Age, "30");
        draft.set_field(ScalarField::Email, "a@b.com");
        draft
    }

    #[tokio::test]
    async fn test_submit_records_current_survey() {
        let (_owner, store) = store(always(200, json!({ "id": "S1", "age": "30", "email": "a@b.com" })));

        let id = store.submit_survey(&draft()).await.unwrap();

        assert_eq!(id, "S1");
        assert_eq!(store.current_survey().map(|s| s.id), Some("S1".to_string()));
        assert!(!store.is_submitting());
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_submit_failure_is_recorded_and_returned() {
        let (_owner, store) = store(always(500, json!({})));

        let result = store.submit_survey(&draft()).await;

        assert!(result.is_err());
        assert_eq!(store.current_survey(), None);
        assert_eq!(store.error().as_deref(), Some(SUBMIT_FAILED));
        assert!(!store.is_submitting());
    }

    #[tokio::test]
    async fn test_history_load() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| request.method == Method::Get && request.path == "/survey/recent")
            .returning(|_| {
                Ok(crate::api::ApiResponse::json(200, json!([
                    { "id": "S2", "wellness_score": 80.0 },
                    { "id": "S1", "wellness_score": 75.0 }
                ])))
            });
        let (_owner, store) = store(transport);

        store.fetch_survey_history().await;

        let ids: Vec<_> = store.survey_history().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["S2", "S1"]);
    }

    #[tokio::test]
    async fn test_history_failure_sets_error() {
        let (_owner, store) = store(always(503, json!({})));
        store.fetch_survey_history().await;
        assert_eq!(store.error().as_deref(), Some(HISTORY_FAILED));
        assert!(store.survey_history().is_empty());

        store.clear_error();
        assert_eq!(store.error(), None);
    }

    #[tokio::test]
    async fn test_clear_current_survey() {
        let (_owner, store) = store(always(200, json!({ "id": "S1" })));
        store.submit_survey(&draft()).await.unwrap();
        store.clear_current_survey();
        assert_eq!(store.current_survey(), None);
    }
}
