//! HTTP client for frontend-backend communication
//!
//! Every call carries the session's bearer token. Non-success responses are
//! turned into [`ApiError`] with the server's own message.

use async_trait::async_trait;
use contracts::domain::common::decode_record;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_error::ApiError;
use super::config::AppConfig;
use super::endpoint_resolver::JsonTransport;
use crate::system::auth::context::Session;

#[derive(Debug, Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Thin wrapper over `gloo_net` bound to one API origin and one token
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Client for calls made on behalf of a signed-in user
    pub fn for_session(config: &AppConfig, session: &Session) -> Self {
        Self::new(config.api_base(), Some(session.token.clone()))
    }

    /// Client without credentials, used by the login form
    pub fn anonymous(config: &AppConfig) -> Self {
        Self::new(config.api_base(), None)
    }

    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn url(&self, target: &str) -> String {
        format!("{}{}", self.base_url, target)
    }

    fn builder(&self, verb: Verb, target: &str, headers: &[(String, String)]) -> RequestBuilder {
        let url = self.url(target);
        let mut builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn send(&self, verb: Verb, target: &str, headers: &[(String, String)]) -> Result<Value, ApiError> {
        let response = self
            .builder(verb, target, headers)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }

    async fn send_json<B: Serialize>(&self, verb: Verb, target: &str, body: &B) -> Result<Value, ApiError> {
        let response = self
            .builder(verb, target, &[])
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_body(response).await
    }

    pub async fn get_value(&self, target: &str) -> Result<Value, ApiError> {
        self.send(Verb::Get, target, &[]).await
    }

    /// GET one record, unwrapping `data` / `envelope_keys` envelopes
    pub async fn get_record<T: DeserializeOwned>(
        &self,
        target: &str,
        envelope_keys: &[&str],
    ) -> Result<T, ApiError> {
        let body = self.get_value(target).await?;
        decode_record(body, envelope_keys).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post<B: Serialize>(&self, target: &str, body: &B) -> Result<Value, ApiError> {
        self.send_json(Verb::Post, target, body).await
    }

    pub async fn put<B: Serialize>(&self, target: &str, body: &B) -> Result<Value, ApiError> {
        self.send_json(Verb::Put, target, body).await
    }

    pub async fn delete(&self, target: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, target, &[]).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl JsonTransport for ApiClient {
    async fn get_json(
        &self,
        target: &str,
        headers: &[(String, String)],
    ) -> Result<Value, ApiError> {
        self.send(Verb::Get, target, headers).await
    }
}

async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_status(status, &response.status_text(), &text));
    }
    parse_body(&text)
}

/// Empty success bodies become `null`
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// The record a write returned, if the body carries one. `None` tells the
/// caller to refetch instead of patching.
pub fn returned_record<T: DeserializeOwned>(body: Value, envelope_keys: &[&str]) -> Option<T> {
    if body.is_null() {
        return None;
    }
    match decode_record(body, envelope_keys) {
        Ok(record) => Some(record),
        Err(e) => {
            log::warn!("write response did not contain a record: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Rec {
        id: String,
        #[serde(default)]
        stock: i64,
    }

    #[test]
    fn test_url_joins_base() {
        let client = ApiClient::new("http://localhost:3000", Some("t".into()));
        assert_eq!(client.url("/api/products"), "http://localhost:3000/api/products");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body("  ").unwrap(), Value::Null);
        assert_eq!(parse_body(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
        assert!(matches!(parse_body("not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_returned_record() {
        let direct: Option<Rec> = returned_record(json!({"_id": "p1", "stock": 4}), &["product"]);
        assert_eq!(direct, Some(Rec { id: "p1".into(), stock: 4 }));

        let wrapped: Option<Rec> =
            returned_record(json!({"message": "ok", "product": {"id": "p2"}}), &["product"]);
        assert_eq!(wrapped, Some(Rec { id: "p2".into(), stock: 0 }));

        let none: Option<Rec> = returned_record(json!({"message": "updated"}), &["product"]);
        assert_eq!(none, None);
        assert_eq!(returned_record::<Rec>(Value::Null, &[]), None);
    }
}
