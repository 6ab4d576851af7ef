use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use ferrous_doh_application::use_cases::DohPayload;
use ferrous_doh_domain::DohResponse;
use serde::Deserialize;

const DNS_MESSAGE: &str = "application/dns-message";
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";

#[derive(Debug, Deserialize)]
pub struct DnsQueryParams {
    pub dns: Option<String>,
}

pub async fn dns_query_get(
    State(state): State<AppState>,
    Query(params): Query<DnsQueryParams>,
) -> Response {
    let Some(dns) = params.dns.filter(|d| !d.is_empty()) else {
        return plain(StatusCode::BAD_REQUEST, "Missing ?dns=");
    };

    match state.handle_doh.execute(DohPayload::Encoded(dns)).await {
        Ok(answer) => doh_response(answer),
        Err(e) => ApiError(e).into_response(),
    }
}

pub async fn dns_query_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let is_dns_message = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().contains(DNS_MESSAGE))
        .unwrap_or(false);
    if !is_dns_message {
        return plain(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "POST requires application/dns-message",
        );
    }

    match state.handle_doh.execute(DohPayload::Raw(body)).await {
        Ok(answer) => doh_response(answer),
        Err(e) => ApiError(e).into_response(),
    }
}

/// Answers `OPTIONS` with 204 on every path, before routing.
pub async fn answer_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    next.run(request).await
}

pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        "Method not allowed",
    )
        .into_response()
}

/// Wraps an answer with the DoH content type, its cache lifetime, and the
/// gateway's diagnostic headers.
pub fn doh_response(answer: DohResponse) -> Response {
    let status = StatusCode::from_u16(answer.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut response = (status, answer.body).into_response();

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(DNS_MESSAGE));
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={}", answer.max_age)) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    headers.insert(
        "x-cache-status",
        HeaderValue::from_static(answer.cache_status.as_str()),
    );
    headers.insert(
        "x-gaming-query",
        HeaderValue::from_static(if answer.class.is_gaming() {
            "true"
        } else {
            "false"
        }),
    );
    response
}

pub(crate) fn plain(status: StatusCode, message: &'static str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        message,
    )
        .into_response()
}
