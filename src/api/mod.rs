//! Backend API Client
//!
//! All HTTP traffic to the todo backend goes through [`ApiClient`]. Every
//! request targets `base_url + path` with a JSON content type, and carries
//! `Authorization: Bearer <token>` whenever the injected token store holds
//! one. On wasm32 `reqwest` rides the browser fetch API.

mod auth;
mod items;
mod lists;


use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::session::SharedTokens;

/// What went wrong talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (network down, CORS, DNS, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status
    #[error("server responded with status {0}")]
    Status(StatusCode),
    /// The body was not the JSON shape we expected
    #[error("could not decode the response: {0}")]
    Decode(#[source] reqwest::Error),
    /// The response's `data` array was empty
    #[error("the response carried no data")]
    EmptyData,
}

impl ApiError {
    /// True when the backend explicitly rejected the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

/// HTTP client for the todo backend, with the session token injected at
/// construction.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: SharedTokens,
}

impl ApiClient {
    /// `base_url` must end with `/` (see `config::api_base_url`).
    pub fn new(base_url: String, tokens: SharedTokens) -> Self {
        Self {
            client: Client::new(),
            base_url,
            tokens,
        }
    }

    /// Current session token, if any.
    pub fn token(&self) -> Option<String> {
        self.tokens.get()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self
            .client
            .request(method, format!("{}{}", self.base_url, path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.tokens.get() {
            req = req.bearer_auth(token);
        }
        req
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn ok_status(response: Response) -> Result<Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        Self::ok_status(response)?
            .json::<T>()
            .await
            .map_err(ApiError::Decode)
    }

    /// Fire a mutating request; the body of a successful response is not
    /// interpreted.
    async fn send_and_check(req: RequestBuilder) -> Result<(), ApiError> {
        let response = req.send().await?;
        Self::ok_status(response)?;
        Ok(())
    }
}
