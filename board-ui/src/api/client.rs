//! HTTP API Client
//!
//! `gloo-net` implementation of [`ActivityApi`].

use activity_board::{interpret_response, ActivityApi, ActivityMap, ApiError, Endpoint, Method, MutationResponse};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Local storage key for a custom API base URL
const API_URL_KEY: &str = "activity_board_api_url";

/// Strip trailing slashes so endpoint paths can be appended
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get the API base URL from local storage, or same origin when unset
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_default();
    normalize_base(&url)
}

/// Activities API over `fetch`
#[derive(Debug, Clone)]
pub struct GlooApi {
    base: String,
}

impl GlooApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: normalize_base(&base.into()),
        }
    }

    async fn send<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, ApiError> {
        let url = endpoint.url(&self.base);
        let request = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        interpret_response(status, &body)
    }
}

#[async_trait(?Send)]
impl ActivityApi for GlooApi {
    async fn fetch_activities(&self) -> Result<ActivityMap, ApiError> {
        self.send(Endpoint::Activities).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        self.send(Endpoint::Signup { activity, email }).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationResponse, ApiError> {
        self.send(Endpoint::Unregister { activity, email }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base(" http://localhost:8000/ "), "http://localhost:8000");
        assert_eq!(GlooApi::new("http://host//").base, "http://host");
    }
}
