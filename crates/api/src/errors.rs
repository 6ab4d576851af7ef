use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use ferrous_doh_domain::DomainError;

/// DoH clients expect terse plain-text bodies on failure, not JSON.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::UpstreamExhausted | DomainError::NoProviders => {
                (StatusCode::BAD_GATEWAY, "Upstream failure".to_string())
            }

            DomainError::InvalidDomainName(_)
            | DomainError::InvalidDnsMessage(_)
            | DomainError::InvalidBase64(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
