//! Auth Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, Credentials, ProfileUpdate, RegisterRequest, UserProfile};

impl ApiClient {
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", credentials).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.put("/auth/profile", update).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::client;
    use super::super::{ApiResponse, Method, MockHttpTransport};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::Post
                    && request.path == "/auth/login"
                    && request.body == Some(json!({ "email": "a@b.com", "password": "pw" }))
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse::json(200, json!({
                    "user": { "id": "u1", "email": "a@b.com", "name": "A" },
                    "token": "jwt"
                })))
            });
        let (client, _) = client(transport);

        let response = client
            .login(&Credentials { email: "a@b.com".to_string(), password: "pw".to_string() })
            .await
            .unwrap();

        assert_eq!(response.token, "jwt");
        assert_eq!(response.user.name, "A");
    }

    #[tokio::test]
    async fn test_profile_update_uses_put() {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_send()
            .withf(|request| {
                request.method == Method::Put
                    && request.path == "/auth/profile"
                    && request.body == Some(json!({ "name": "X" }))
            })
            .times(1)
            .returning(|_| Ok(ApiResponse::json(200, json!({ "id": "u1", "email": "a@b.com", "name": "X" }))));
        let (client, _) = client(transport);

        let update = ProfileUpdate { name: Some("X".to_string()), ..Default::default() };
        let user = client.update_profile(&update).await.unwrap();
        assert_eq!(user.name, "X");
    }
}
