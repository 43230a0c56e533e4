use axum::{
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Compiled UI bundle, embedded at build time from `ui/dist`
#[derive(RustEmbed)]
#[folder = "ui/dist"]
struct UiDist;

/// Serve a file from the embedded bundle.
///
/// Unknown paths fall back to `index.html` so client-side routes like
/// `/admin/users/42/edit` load the app instead of a 404.
pub async fn serve_ui(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if !path.is_empty() && path != "index.html" {
        if let Some(asset) = UiDist::get(path) {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            return ([(header::CONTENT_TYPE, mime.as_ref())], asset.data).into_response();
        }
    }

    match UiDist::get("index.html") {
        Some(index) => Html(index.data).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            "UI bundle missing. Build it with `trunk build` in ui/.",
        )
            .into_response(),
    }
}
