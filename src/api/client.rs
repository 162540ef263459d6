use log::{debug, warn};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::api::ApiError;
use crate::config::Config;
use crate::models::user::RefreshTokenResponse;
use crate::session::SharedSession;

const REFRESH_ENDPOINT: &str = "users/refresh-token/";

/// HTTP client for the booking backend. Attaches the session's bearer token,
/// and on a 401 makes exactly one refresh-token attempt followed by one
/// retry; a failed refresh clears the session and surfaces `SessionExpired`.
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    session: SharedSession,
}

impl ApiClient {
    pub fn new(config: Config, session: SharedSession) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_default();
        Self {
            http,
            config,
            session,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Full URL for an endpoint path, tolerating a leading slash
    fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match url::Url::parse(&self.config.api_url).and_then(|base| base.join(path)) {
            Ok(url) => url.to_string(),
            Err(_) => format!("{}{}", self.config.api_url, path),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.execute(Method::DELETE, path, None).await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// POST a multipart form (document/image uploads). The form cannot be
    /// cloned for the post-refresh retry, so the caller passes a builder.
    pub async fn post_multipart<T, F>(&self, path: &str, make_form: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::multipart::Form,
    {
        let url = self.endpoint(path);
        let response = self
            .send_multipart(&url, make_form())
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = if response.status() == StatusCode::UNAUTHORIZED {
            if !self.refresh_session().await {
                self.session.write().await.clear();
                return Err(ApiError::SessionExpired);
            }
            self.send_multipart(&url, make_form())
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?
        } else {
            response
        };

        Self::decode(Self::check_status(response).await?).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, body).await?;
        Self::decode(Self::check_status(response).await?).await
    }

    /// Send once; on a 401 (outside the refresh endpoint itself) refresh the
    /// token and retry once
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ApiError> {
        let url = self.endpoint(path);
        let response = self
            .send(method.clone(), &url, body.as_ref())
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() != StatusCode::UNAUTHORIZED || path.contains("refresh-token") {
            return Ok(response);
        }

        debug!("401 from {}, attempting token refresh", path);
        if !self.refresh_session().await {
            self.session.write().await.clear();
            return Err(ApiError::SessionExpired);
        }

        self.send(method, &url, body.as_ref())
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self.http.request(method, url);
        if let Some(token) = self.session.read().await.access_token.as_deref() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await
    }

    async fn send_multipart(
        &self,
        url: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Response, reqwest::Error> {
        let mut request = self.http.post(url).multipart(form);
        if let Some(token) = self.session.read().await.access_token.as_deref() {
            request = request.bearer_auth(token);
        }
        request.send().await
    }

    /// One refresh-token round trip; true when a new access token was stored
    async fn refresh_session(&self) -> bool {
        let refresh_token = self.session.read().await.refresh_token.clone();
        let Some(refresh_token) = refresh_token else {
            warn!("No refresh token available");
            return false;
        };

        let url = self.endpoint(REFRESH_ENDPOINT);
        let result = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                match response.json::<RefreshTokenResponse>().await {
                    Ok(refreshed) => {
                        self.session.write().await.apply_refresh(&refreshed);
                        true
                    }
                    Err(e) => {
                        warn!("Token refresh response unreadable: {}", e);
                        false
                    }
                }
            }
            Ok(response) => {
                warn!("Token refresh failed with status {}", response.status());
                false
            }
            Err(e) => {
                warn!("Token refresh request failed: {}", e);
                false
            }
        }
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::UNAUTHORIZED {
            // retry already happened by the time we get here
            return Err(ApiError::SessionExpired);
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            message: Self::error_message(response).await,
        })
    }

    /// Pull the human-readable message out of an error body, trying the
    /// field names the backend actually uses
    async fn error_message(response: Response) -> String {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if let Ok(body) = serde_json::from_str::<Value>(&text) {
            for key in ["message", "detail", "error"] {
                if let Some(message) = body.get(key).and_then(|v| v.as_str()) {
                    return message.to_string();
                }
            }
        }
        if text.is_empty() {
            format!("Request failed with status {}", status)
        } else {
            text
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        if text.is_empty() {
            // DELETEs and 204s have no body; let unit-like targets parse null
            return serde_json::from_value(Value::Null)
                .map_err(|_| ApiError::Decode(format!("empty body with status {}", status)));
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::shared_session;

    fn client() -> ApiClient {
        let config = Config {
            api_url: "http://localhost:8000/api/".to_string(),
            ..Default::default()
        };
        ApiClient::new(config, shared_session())
    }

    #[test]
    fn test_endpoint_join_tolerates_leading_slash() {
        let client = client();
        assert_eq!(
            client.endpoint("booking/bookings/"),
            "http://localhost:8000/api/booking/bookings/"
        );
        assert_eq!(
            client.endpoint("/booking/bookings/"),
            "http://localhost:8000/api/booking/bookings/"
        );
    }
}
