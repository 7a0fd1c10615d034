use contracts::system::auth::{SessionResponse, SignInRequest};

use crate::shared::supabase;

/// Password sign-in against the backend auth endpoint
pub async fn sign_in(email: String, password: String) -> Result<SessionResponse, String> {
    let request = SignInRequest {
        email: email.trim().to_string(),
        password,
    };
    supabase::auth_post("token?grant_type=password", &request).await
}

/// Revoke the session on the backend
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    supabase::auth_logout(access_token).await
}
