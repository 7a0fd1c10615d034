use serde::{Deserialize, Serialize};

/// Body of the password grant request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// What the admin keeps in local storage between visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    pub email: String,
}

impl From<SessionResponse> for StoredSession {
    fn from(response: SessionResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            email: response.user.email.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_token_response() {
        let json = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r1",
            "user": {"id": "u-1", "email": "admin@karamlibnan.com", "role": "authenticated"}
        }"#;
        let response: SessionResponse = serde_json::from_str(json).unwrap();
        let session = StoredSession::from(response);
        assert_eq!(session.access_token, "jwt");
        assert_eq!(session.email, "admin@karamlibnan.com");
    }
}
