//! Relays `/api` requests from the browser to the platform API.
//!
//! The console never answers API calls itself. Anything under `/api` is
//! forwarded verbatim (method, path, query, headers, body) so the UI can
//! be served from the same origin as the data it edits.

use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;

use crate::config::UpstreamSettings;

/// Headers that belong to a single connection rather than the request.
/// These never cross the proxy in either direction.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

fn is_hop_header(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| name.eq_ignore_ascii_case(h))
}

/// HTTP client bound to the platform API base URL
#[derive(Clone)]
pub struct UpstreamClient {
    base: String,
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;
        Ok(Self {
            base: settings.url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query)
    }
}

/// Forward one request to the platform API and relay its response
pub async fn forward(
    State(client): State<UpstreamClient>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let url = client.url_for(path_and_query);

    // axum and reqwest sit on different `http` major versions, so the
    // request pieces move across as strings and bytes.
    let upstream_method = match reqwest::Method::from_bytes(method.as_str().as_bytes()) {
        Ok(m) => m,
        Err(_) => return bad_gateway(format!("unsupported method {method}")),
    };

    let mut request = client.http.request(upstream_method, &url);
    for (name, value) in headers.iter() {
        if is_hop_header(name.as_str()) {
            continue;
        }
        request = request.header(name.as_str(), value.as_bytes());
    }
    if !body.is_empty() {
        request = request.body(body.to_vec());
    }

    let upstream_response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("Upstream request to {} failed: {}", url, err);
            return bad_gateway(format!("upstream request failed: {err}"));
        }
    };

    let status = StatusCode::from_u16(upstream_response.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);

    let mut response_headers = HeaderMap::new();
    for (name, value) in upstream_response.headers() {
        if is_hop_header(name.as_str()) {
            continue;
        }
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_str().as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        ) {
            // append, not insert: repeated names (Set-Cookie, Vary) must
            // survive the relay with every value intact
            response_headers.append(name, value);
        }
    }
    // hyper recomputes the length for the relayed body
    response_headers.remove(header::CONTENT_LENGTH);

    let body = match upstream_response.bytes().await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("Failed to read upstream response body: {}", err);
            return bad_gateway(format!("failed to read upstream response: {err}"));
        }
    };

    (status, response_headers, body).into_response()
}

/// Error shape the UI already understands: the platform's response envelope
fn bad_gateway(message: String) -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({
            "success": false,
            "data": null,
            "error": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_headers_are_filtered_case_insensitively() {
        assert!(is_hop_header("Connection"));
        assert!(is_hop_header("transfer-encoding"));
        assert!(is_hop_header("HOST"));
        assert!(!is_hop_header("authorization"));
        assert!(!is_hop_header("content-type"));
    }

    #[test]
    fn upstream_urls_join_without_double_slashes() {
        let client = UpstreamClient::new(&UpstreamSettings {
            url: "http://127.0.0.1:8080/".to_string(),
            timeout_seconds: 30,
        })
        .unwrap();
        assert_eq!(
            client.url_for("/api/courses?published=true"),
            "http://127.0.0.1:8080/api/courses?published=true"
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:8080");
    }
}
