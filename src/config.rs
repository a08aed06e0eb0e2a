//! Client Configuration
//!
//! The backend base URL is baked in at compile time: `TICKED_API_URL`
//! overrides the localhost default.

const DEFAULT_API_URL: &str = "http://localhost:8000/api/";

/// Base URL for the todo backend, normalized to end with `/` so paths can
/// be appended directly.
pub fn api_base_url() -> String {
    normalize(option_env!("TICKED_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}
