//! REST API client for the ShopWise backend.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses map onto `ApiError` by status class; backend error
//! bodies of the form `{"detail": "..."}` surface as the message. No
//! retries anywhere, every failure is terminal for that call.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde_json::Value;
use uuid::Uuid;

use super::types::{NewProduct, Product, User};
use crate::store::TokenStore;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unauthorized")]
    Unauthorized,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// Successful login payload: the token to persist plus the account it
/// belongs to.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
struct MeResponse {
    user: User,
}

#[derive(Debug, serde::Deserialize)]
struct CreateProductResponse {
    product: Product,
}

/// HTTP client bound to one backend base URL and one token store.
///
/// Every request consults the store: if a token is present it goes out as
/// `Authorization: Bearer <token>`, otherwise the request is anonymous.
/// The client never writes to the store; that is the session's job.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: impl Into<String>, store: Arc<dyn TokenStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    /// Authenticate with username (or email) and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(
                self.request(Method::POST, "/api/auth/login")
                    .json(&serde_json::json!({ "username": username, "password": password })),
            )
            .await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    /// Create an account. A successful registration does not log anyone in.
    pub async fn register(&self, email: &str, username: &str, password: &str) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/api/auth/register").json(
            &serde_json::json!({ "email": email, "username": username, "password": password }),
        ))
        .await?;
        Ok(())
    }

    /// Fetch the account the stored token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self.send(self.request(Method::GET, "/api/auth/me")).await?;
        let body = response.json::<MeResponse>().await?;
        Ok(body.user)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.send(self.request(Method::GET, "/api/products")).await?;
        Ok(response.json::<Vec<Product>>().await?)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product, ApiError> {
        let path = format!("/api/products/{id}");
        let response = self.send(self.request(Method::GET, &path)).await?;
        Ok(response.json::<Product>().await?)
    }

    /// Create a product. Admin-only by convention; the backend enforces it.
    ///
    /// An empty or whitespace name is rejected locally before any request
    /// goes out.
    pub async fn create_product(&self, new: &NewProduct) -> Result<Product, ApiError> {
        if new.name.trim().is_empty() {
            return Err(ApiError::Validation("product name must not be empty".to_owned()));
        }
        let response = self
            .send(self.request(Method::POST, "/api/products").json(new))
            .await?;
        let body = response.json::<CreateProductResponse>().await?;
        Ok(body.product)
    }

    /// Handle to the token store this client reads bearer credentials from.
    #[must_use]
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(&self.store)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut request = self.http.request(method, join_url(&self.base_url, path));
        if let Some(token) = self.store.get() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await?;
        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = detail_message(&body);
    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Err(ApiError::Validation(message)),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
        _ => Err(ApiError::Api {
            status: status.as_u16(),
            message,
        }),
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn detail_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return detail.to_owned();
        }
    }
    if body.is_empty() {
        "no response body".to_owned()
    } else {
        body.to_owned()
    }
}
