//! API client for the platform backend
//!
//! Every call goes through the `/api` prefix served by the console host.
//! Authenticated calls take the session explicitly; nothing in here reads
//! ambient state.

use gloo_net::http::{Request, RequestBuilder};

use crate::session::AuthSession;
use crate::types::*;

const API_BASE: &str = "/api";

/// Why an API call failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Request(String),
    /// The response body was not a valid API envelope
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The backend reported success but sent no payload
    #[error("No data in response")]
    MissingData,
    /// The backend rejected the request; displays the backend's own text
    #[error("{0}")]
    Rejected(String),
}

// ============================================================================
// Courses and lessons
// ============================================================================

pub async fn list_courses() -> Result<Vec<Course>, ApiError> {
    let url = format!("{}/courses", API_BASE);
    fetch_json::<Vec<Course>>(&url, None).await
}

/// Fetch one course with its modules, used to build the module picker
pub async fn get_course(course_id: &str) -> Result<Course, ApiError> {
    let url = format!("{}/courses/{}", API_BASE, urlencoding_encode(course_id));
    fetch_json::<Course>(&url, None).await
}

pub async fn list_lessons(course_id: &str, module_code: &str) -> Result<Vec<Lesson>, ApiError> {
    let url = format!(
        "{}/courses/{}/modules/{}/lessons",
        API_BASE,
        urlencoding_encode(course_id),
        urlencoding_encode(module_code)
    );
    fetch_json::<Vec<Lesson>>(&url, None).await
}

pub async fn create_lesson(
    payload: &LessonPayload,
    session: &AuthSession,
) -> Result<Lesson, ApiError> {
    let url = format!("{}/lessons", API_BASE);
    post_json::<LessonPayload, Lesson>(&url, payload, Some(session)).await
}

// ============================================================================
// Users
// ============================================================================

pub async fn list_users(session: &AuthSession) -> Result<Vec<User>, ApiError> {
    let url = format!("{}/users", API_BASE);
    fetch_json::<Vec<User>>(&url, Some(session)).await
}

pub async fn get_user(user_id: &str, session: &AuthSession) -> Result<User, ApiError> {
    let url = format!("{}/users/{}", API_BASE, urlencoding_encode(user_id));
    fetch_json::<User>(&url, Some(session)).await
}

pub async fn update_user(
    user_id: &str,
    payload: &UserPayload,
    session: &AuthSession,
) -> Result<User, ApiError> {
    let url = format!("{}/users/{}", API_BASE, urlencoding_encode(user_id));
    put_json::<UserPayload, User>(&url, payload, Some(session)).await
}

// ============================================================================
// Helper functions
// ============================================================================

fn urlencoding_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn with_auth(request: RequestBuilder, session: Option<&AuthSession>) -> RequestBuilder {
    match session.and_then(AuthSession::bearer) {
        Some(value) => request.header("Authorization", &value),
        None => request,
    }
}

fn unwrap_envelope<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    if envelope.success {
        envelope.data.ok_or(ApiError::MissingData)
    } else {
        Err(ApiError::Rejected(
            envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
        ))
    }
}

async fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    session: Option<&AuthSession>,
) -> Result<T, ApiError> {
    let response = with_auth(Request::get(url), session)
        .send()
        .await
        .map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            ApiError::Request(e.to_string())
        })?;

    let envelope: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    unwrap_envelope(envelope)
}

async fn post_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
    session: Option<&AuthSession>,
) -> Result<R, ApiError> {
    let response = with_auth(Request::post(url), session)
        .json(body)
        .map_err(|e| ApiError::Request(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("POST {} failed: {}", url, e);
            ApiError::Request(e.to_string())
        })?;

    let envelope: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    unwrap_envelope(envelope)
}

async fn put_json<T: serde::Serialize, R: serde::de::DeserializeOwned>(
    url: &str,
    body: &T,
    session: Option<&AuthSession>,
) -> Result<R, ApiError> {
    let response = with_auth(Request::put(url), session)
        .json(body)
        .map_err(|e| ApiError::Request(format!("Failed to serialize body: {}", e)))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("PUT {} failed: {}", url, e);
            ApiError::Request(e.to_string())
        })?;

    let envelope: ApiResponse<R> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    unwrap_envelope(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn successful_envelope_yields_data() {
        let envelope: ApiResponse<User> = serde_json::from_value(json!({
            "success": true,
            "data": {"_id": "u1", "name": "Grace", "email": "g@example.com", "admin": false},
            "error": null
        }))
        .unwrap();
        let user = unwrap_envelope(envelope).unwrap();
        assert_eq!(user.name, "Grace");
    }

    #[test]
    fn rejection_text_is_preserved_verbatim() {
        let envelope: ApiResponse<User> = serde_json::from_value(json!({
            "success": false,
            "data": null,
            "error": "email already taken"
        }))
        .unwrap();
        let err = unwrap_envelope(envelope).unwrap_err();
        assert_eq!(err, ApiError::Rejected("email already taken".to_string()));
        assert_eq!(err.to_string(), "email already taken");
    }

    #[test]
    fn rejection_without_text_gets_a_fallback() {
        let envelope = ApiResponse::<User> {
            success: false,
            data: None,
            error: None,
        };
        assert_eq!(
            unwrap_envelope(envelope).unwrap_err(),
            ApiError::Rejected("Unknown error".to_string())
        );
    }

    #[test]
    fn success_without_data_is_an_error() {
        let envelope = ApiResponse::<User> {
            success: true,
            data: None,
            error: None,
        };
        assert_eq!(unwrap_envelope(envelope).unwrap_err(), ApiError::MissingData);
    }
}
