use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::{
    NotifyUsersRequest, NotifyUsersResponse, Property, PropertyFilter, ServiceError, SessionUser,
};

use crate::query_cache::QueryCache;

/// Attempts for idempotent fetches (initial call + one retry on transient
/// failure). Mutations are never retried — the service does not guarantee
/// idempotence for delete.
const FETCH_ATTEMPTS: u32 = 2;

/// How long a property list result stays fresh in the query cache.
const LIST_CACHE_TTL_SECS: i64 = 30;

/// Every service response wraps its payload as `{ "data": … }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Error responses carry `{ "message": … }` when the service produced them.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Typed HTTP client for the remote property service.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct PropertyServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PartialEq for PropertyServiceClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl PropertyServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch properties matching `filter`. Defaulted filter fields are omitted
    /// from the query string entirely. Retried once on network errors / 5xx.
    pub async fn list_properties(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, ServiceError> {
        let params = filter.to_query_params();
        let mut last_err = ServiceError::network("property list fetch failed");
        for attempt in 1..=FETCH_ATTEMPTS {
            tracing::debug!(?params, attempt, "GET /properties");
            let result = self
                .http
                .get(self.endpoint("properties"))
                .query(&params)
                .send()
                .await;
            match Self::read_json::<Vec<Property>>(result).await {
                Ok(list) => return Ok(list),
                Err(err) if err.is_retryable() && attempt < FETCH_ATTEMPTS => {
                    tracing::warn!(%err, attempt, "property list fetch failed, retrying");
                    last_err = err;
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err)
    }

    /// Like [`list_properties`], but consults the injected query cache first
    /// and stores fresh results under the filter's cache key.
    ///
    /// [`list_properties`]: Self::list_properties
    pub async fn list_properties_cached(
        &self,
        cache: &QueryCache,
        filter: &PropertyFilter,
    ) -> Result<Vec<Property>, ServiceError> {
        let key = filter.cache_key();
        if let Some(value) = cache.get(&key) {
            match serde_json::from_value::<Vec<Property>>(value) {
                Ok(list) => {
                    tracing::debug!(%key, "property list served from cache");
                    return Ok(list);
                }
                // An undecodable entry is stale garbage; drop it and refetch.
                Err(_) => cache.invalidate(&key),
            }
        }

        let list = self.list_properties(filter).await?;
        if let Ok(value) = serde_json::to_value(&list) {
            cache.set(&key, value, Some(chrono::Duration::seconds(LIST_CACHE_TTL_SECS)));
        }
        Ok(list)
    }

    /// Fetch a single property by id.
    pub async fn get_property(&self, id: &str) -> Result<Property, ServiceError> {
        let result = self
            .http
            .get(self.endpoint(&format!("properties/{id}")))
            .send()
            .await;
        Self::read_json(result).await
    }

    /// Delete a property. Deleting an id the service does not know is a
    /// `NotFound` error, never a silent success.
    pub async fn delete_property(&self, id: &str) -> Result<(), ServiceError> {
        tracing::debug!(%id, "DELETE /properties/{{id}}");
        let result = self
            .http
            .delete(self.endpoint(&format!("properties/{id}")))
            .send()
            .await;
        Self::read_ok(result).await
    }

    /// Notify interested users about the given properties.
    ///
    /// Calling with no ids is a caller precondition violation; the request is
    /// rejected locally and never reaches the service.
    pub async fn notify_users(
        &self,
        property_ids: &[String],
    ) -> Result<NotifyUsersResponse, ServiceError> {
        if property_ids.is_empty() {
            return Err(ServiceError::bad_request(
                "notify requires at least one selected property",
            ));
        }
        tracing::debug!(count = property_ids.len(), "POST /properties/notify");
        let body = NotifyUsersRequest {
            property_ids: property_ids.to_vec(),
        };
        let result = self
            .http
            .post(self.endpoint("properties/notify"))
            .json(&body)
            .send()
            .await;
        Self::read_json(result).await
    }

    /// Fetch the current session identity. Retried once on transient failure;
    /// a 401 surfaces immediately as `Unauthorized`.
    pub async fn get_current_user(&self) -> Result<SessionUser, ServiceError> {
        let mut last_err = ServiceError::network("identity fetch failed");
        for attempt in 1..=FETCH_ATTEMPTS {
            tracing::debug!(attempt, "GET /auth/me");
            let result = self.http.get(self.endpoint("auth/me")).send().await;
            match Self::read_json::<SessionUser>(result).await {
                Ok(user) => return Ok(user),
                Err(err) if err.is_retryable() && attempt < FETCH_ATTEMPTS => {
                    tracing::warn!(%err, attempt, "identity fetch failed, retrying");
                    last_err = err;
                }
                Err(err) => return Err(err),
            }
        }
        Err(last_err)
    }

    /// Exchange credentials for a session. The service sets the session
    /// cookie; the returned identity seeds client-side auth state.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, ServiceError> {
        let body = shared_types::LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let result = self
            .http
            .post(self.endpoint("auth/login"))
            .json(&body)
            .send()
            .await;
        Self::read_json(result).await
    }

    /// End the current session.
    pub async fn logout(&self) -> Result<(), ServiceError> {
        let result = self.http.post(self.endpoint("auth/logout")).send().await;
        Self::read_ok(result).await
    }

    /// Unwrap a response into the enveloped payload, mapping transport and
    /// status failures onto `ServiceError`.
    async fn read_json<T: DeserializeOwned>(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, ServiceError> {
        let response = result.map_err(|e| ServiceError::network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::from_status(
                status.as_u16(),
                error_message(status.as_u16(), &body),
            ));
        }

        serde_json::from_str::<Envelope<T>>(&body)
            .map(|env| env.data)
            .map_err(|e| ServiceError::decode(format!("unexpected response body: {e}")))
    }

    /// Like [`read_json`] but discards the payload — for endpoints whose body
    /// is only an acknowledgement.
    ///
    /// [`read_json`]: Self::read_json
    async fn read_ok(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<(), ServiceError> {
        let response = result.map_err(|e| ServiceError::network(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ServiceError::from_status(
            status.as_u16(),
            error_message(status.as_u16(), &body),
        ))
    }
}

/// Best error message available: the service's `message` field when the body
/// parses, the raw body when short and non-empty, otherwise the status code.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ErrorBody>(body) {
        return err.message;
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && trimmed.len() <= 200 {
        return trimmed.to_string();
    }
    format!("service responded with status {status}")
}
