use super::doh::plain;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

pub async fn landing(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let origin = match &state.public_origin {
        Some(origin) => origin.trim_end_matches('/').to_string(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("localhost");
            format!("http://{}", host)
        }
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Gaming DoH: {}/dns-query", origin),
    )
        .into_response()
}

pub async fn not_found() -> Response {
    plain(StatusCode::NOT_FOUND, "Not Found")
}
