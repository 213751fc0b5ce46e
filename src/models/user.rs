use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account profile returned by the auth endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Fields this client does not interpret, kept so they survive persistence
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// Shallow merge: only supplied fields are overwritten
    pub fn merge(&mut self, update: &ProfileUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(gender) = &update.gender {
            self.gender = Some(gender.clone());
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Partial profile edit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// `POST /auth/login` and `POST /auth/register` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: UserProfile,
    #[serde(alias = "access_token")]
    pub token: String,
}

/// Client-side auth session.
///
/// `is_authenticated` holds exactly when both `user` and `token` are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    user: Option<UserProfile>,
    token: Option<String>,
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
}

impl Session {
    pub fn authenticated(user: UserProfile, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Re-derive the flag after loading from storage
    pub fn normalized(self) -> Self {
        match (self.user, self.token) {
            (Some(user), Some(token)) => Self::authenticated(user, token),
            _ => Self::default(),
        }
    }

    /// Apply a profile edit; no-op without a user
    pub fn merge_profile(&mut self, update: &ProfileUpdate) {
        if let Some(user) = self.user.as_mut() {
            user.merge(update);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_y() -> UserProfile {
        serde_json::from_value(json!({ "id": "1", "email": "y@example.com", "name": "Y" })).unwrap()
    }

    #[test]
    fn test_merge_preserves_unspecified_fields() {
        let mut user = user_y();
        user.merge(&ProfileUpdate {
            name: Some("X".to_string()),
            age: Some(30),
            gender: None,
        });

        assert_eq!(user.id, "1");
        assert_eq!(user.email, "y@example.com");
        assert_eq!(user.name, "X");
        assert_eq!(user.age, Some(30));
        assert_eq!(user.gender, None);
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let user: UserProfile = serde_json::from_value(json!({
            "id": "1",
            "email": "a@b.com",
            "username": "testuser"
        }))
        .unwrap();
        assert_eq!(user.extra.get("username"), Some(&json!("testuser")));

        let encoded = serde_json::to_value(&user).unwrap();
        assert_eq!(encoded["username"], "testuser");
    }

    #[test]
    fn test_normalized_requires_user_and_token() {
        let raw = json!({ "user": null, "token": "t", "isAuthenticated": true });
        let session: Session = serde_json::from_value(raw).unwrap();
        let session = session.normalized();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);

        let session = Session::authenticated(user_y(), "t".to_string()).normalized();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_access_token_alias() {
        let body = json!({ "user": { "id": "1", "email": "a@b.com" }, "access_token": "jwt" });
        let response: AuthResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.token, "jwt");
    }
}
