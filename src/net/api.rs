//! REST API client for the external prediction/chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation makes a single attempt — no retry, timeout, or backoff —
//! and maps failures onto the [`ApiError`] taxonomy. Callers obtain the
//! bearer token from the session store before invoking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::classify_status;
#[cfg(feature = "hydrate")]
use super::types::{ChatPrompt, ChatReply, ErrorBody, RegisterRequest, TokenResponse};
use super::types::{MaintenanceReading, MaintenanceVerdict, ProfileUpdate, SalesFeatures,
    SalesPrediction, UserProfile};

/// Base URL for all API calls; overridable at build time via `API_BASE_URL`.
#[cfg(any(test, feature = "hydrate"))]
fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or("http://localhost:8000")
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Form-encode login credentials for the OAuth2 password flow.
#[cfg(any(test, feature = "hydrate"))]
fn login_form_body(email: &str, password: &str) -> Result<String, ApiError> {
    serde_urlencoded::to_string([("username", email), ("password", password)])
        .map_err(|e| ApiError::Validation(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    classify_status(status, detail.as_deref())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(decode_error(resp).await);
    }
    resp.json::<T>().await.map_err(network)
}

/// Create an account via `POST /users/`.
///
/// # Errors
///
/// `Conflict` when the email is already registered, `Validation` when the
/// backend rejects the input, `Network` otherwise.
pub async fn register(
    email: &str,
    password: &str,
    full_name: &str,
    company: &str,
) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            full_name: full_name.to_owned(),
            company: company.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&endpoint("/users/"))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name, company);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Exchange credentials for a bearer token via `POST /token`.
///
/// # Errors
///
/// `Auth` on invalid credentials, `Network` otherwise.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = login_form_body(email, password)?;
        let resp = gloo_net::http::Request::post(&endpoint("/token"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let token: TokenResponse = read_json(resp).await?;
        Ok(token.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated user's profile via `GET /users/me/`.
///
/// # Errors
///
/// `Auth` when the token is missing, expired, or invalid.
pub async fn fetch_current_user(token: &str) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/users/me/"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Update the authenticated user's profile via `PUT /users/me/`.
///
/// # Errors
///
/// `Auth` on a rejected token, `Network` otherwise.
pub async fn update_current_user(
    token: &str,
    update: &ProfileUpdate,
) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&endpoint("/users/me/"))
            .header("Authorization", &bearer(token))
            .json(update)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, update);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Request a sales forecast via `POST /predict/sales`.
///
/// # Errors
///
/// `Auth` on a rejected token, `Validation` on a rejected feature record,
/// `Network` otherwise.
pub async fn predict_sales(
    token: &str,
    features: &SalesFeatures,
) -> Result<SalesPrediction, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/predict/sales"))
            .header("Authorization", &bearer(token))
            .json(features)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, features);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Request an equipment-failure verdict via `POST /predict/maintenance`.
///
/// # Errors
///
/// `Auth` on a rejected token, `Validation` on a rejected reading,
/// `Network` otherwise.
pub async fn predict_maintenance(
    token: &str,
    reading: &MaintenanceReading,
) -> Result<MaintenanceVerdict, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/predict/maintenance"))
            .header("Authorization", &bearer(token))
            .json(reading)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, reading);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Send a chat prompt via `POST /chat` and return the assistant's reply.
///
/// # Errors
///
/// `Auth` on a rejected token, `Network` otherwise.
pub async fn send_chat_message(token: &str, prompt: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatPrompt {
            prompt: prompt.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&endpoint("/chat"))
            .header("Authorization", &bearer(token))
            .json(&body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let reply: ChatReply = read_json(resp).await?;
        Ok(reply.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, prompt);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
