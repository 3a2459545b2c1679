//! Sequential fallback over candidate endpoints of one logical resource.
//!
//! The backend exposes the same data under several routes and shapes
//! (`/api/clients/{id}/inventory`, `/api/inventory?clientId=`, ...). A page
//! lists its candidates in priority order and `resolve_list` tries them one
//! at a time, accepting the first success whose body holds an array.

use async_trait::async_trait;
use contracts::shared::list_response::decode_list;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api_error::ApiError;

/// Something that can GET a JSON document. `ApiClient` in the browser, a
/// canned map in tests.
#[async_trait(?Send)]
pub trait JsonTransport {
    async fn get_json(&self, target: &str, headers: &[(String, String)])
        -> Result<Value, ApiError>;
}

/// One endpoint + parameter combination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointCandidate {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl EndpointCandidate {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Path with the encoded query string
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

/// Outcome of a resolver pass
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<T> {
    pub items: Vec<T>,
    /// Target of the candidate that produced `items`
    pub source: Option<String>,
    /// Aggregated failure description when every candidate failed
    pub error: Option<String>,
    /// At least one candidate answered 401/403
    pub auth_failed: bool,
}

impl<T> Resolved<T> {
    pub fn is_success(&self) -> bool {
        self.source.is_some()
    }
}

/// Try `candidates` in order; first success with a list wins.
///
/// An empty array is a valid answer. A success without any array counts as
/// a miss. When every candidate misses the result is an empty list with the
/// joined per-candidate errors.
pub async fn resolve_list<T, Tr>(
    transport: &Tr,
    resource: &str,
    candidates: &[EndpointCandidate],
) -> Resolved<T>
where
    T: DeserializeOwned,
    Tr: JsonTransport + ?Sized,
{
    let mut failures: Vec<String> = Vec::new();
    let mut auth_failed = false;

    for (index, candidate) in candidates.iter().enumerate() {
        let target = candidate.target();
        log::debug!(
            "{}: trying candidate {}/{} {}",
            resource,
            index + 1,
            candidates.len(),
            target
        );

        let body = match transport.get_json(&target, &candidate.headers).await {
            Ok(body) => body,
            Err(err) => {
                if err.is_auth_failure() {
                    auth_failed = true;
                }
                log::warn!("{}: {} failed: {}", resource, target, err);
                failures.push(format!("{}: {}", target, err));
                continue;
            }
        };

        match decode_list::<T>(&body) {
            Some(list) => {
                if list.skipped > 0 {
                    log::warn!(
                        "{}: {} skipped {} malformed record(s)",
                        resource,
                        target,
                        list.skipped
                    );
                }
                log::debug!("{}: {} returned {} record(s)", resource, target, list.items.len());
                return Resolved {
                    items: list.items,
                    source: Some(target),
                    error: None,
                    auth_failed,
                };
            }
            None => {
                log::warn!("{}: {} returned no list", resource, target);
                failures.push(format!("{}: no list in response", target));
            }
        }
    }

    let error = if failures.is_empty() {
        format!("{}: no endpoints to try", resource)
    } else {
        format!("Unable to load {}. {}", resource, failures.join("; "))
    };
    log::warn!("{}", error);

    Resolved {
        items: Vec::new(),
        source: None,
        error: Some(error),
        auth_failed,
    }
}

/// Canned transport for resolver and API tests
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub(crate) struct FakeTransport {
        pub responses: HashMap<String, Result<Value, ApiError>>,
        pub calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeTransport {
        pub fn with(mut self, target: &str, response: Result<Value, ApiError>) -> Self {
            self.responses.insert(target.to_string(), response);
            self
        }

        pub fn called(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(t, _)| t.clone()).collect()
        }
    }

    #[async_trait(?Send)]
    impl JsonTransport for FakeTransport {
        async fn get_json(
            &self,
            target: &str,
            headers: &[(String, String)],
        ) -> Result<Value, ApiError> {
            self.calls
                .borrow_mut()
                .push((target.to_string(), headers.to_vec()));
            self.responses.get(target).cloned().unwrap_or_else(|| {
                Err(ApiError::Server {
                    status: 404,
                    message: "Not Found".into(),
                })
            })
        }
    }
}
