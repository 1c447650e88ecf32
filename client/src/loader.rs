use std::fmt;

use poimap_shared::{ParsedPois, parse_pois};

#[derive(Debug)]
pub enum LoadError {
    /// The request never produced a response.
    Transport(String),
    Status(u16),
    /// The body was not JSON.
    Body(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(e) => write!(f, "fetch error: {e}"),
            LoadError::Status(status) => write!(f, "HTTP {status}"),
            LoadError::Body(e) => write!(f, "parse error: {e}"),
        }
    }
}

/// Fetch the POI file once. Any JSON that is not an array comes back empty.
pub async fn fetch_pois(url: &str) -> Result<ParsedPois, LoadError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = resp
        .json::<serde_json::Value>()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;
    Ok(parse_pois(body))
}
