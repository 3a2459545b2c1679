use contracts::system::auth::{LoginRequest, LoginResponse, SessionUser};
use serde_json::Value;

use crate::shared::api_error::ApiError;
use crate::shared::api_utils::ApiClient;

/// Sign in with e-mail and password
pub async fn login(
    client: &ApiClient,
    email: String,
    password: String,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    let body = client.post("/api/auth/login", &request).await?;
    parse_login_response(body)
}

/// Current user for the client's token
pub async fn current_user(client: &ApiClient) -> Result<SessionUser, ApiError> {
    if !client.has_token() {
        return Err(ApiError::NotAuthenticated);
    }
    client.get_record("/api/auth/me", &["user"]).await
}

/// Login answers come bare or wrapped in `data`
pub fn parse_login_response(body: Value) -> Result<LoginResponse, ApiError> {
    let body = match body {
        Value::Object(mut map) if !map.contains_key("user") && map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
