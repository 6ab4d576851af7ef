use super::doh::{doh_response, plain};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub record_type: Option<String>,
}

pub async fn resolve_name(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Response {
    let Some(name) = params.name.filter(|n| !n.trim().is_empty()) else {
        return plain(StatusCode::BAD_REQUEST, "Missing ?name=");
    };

    match state
        .resolve_name
        .execute(&name, params.record_type.as_deref())
        .await
    {
        Ok(answer) => doh_response(answer),
        Err(e) => ApiError(e).into_response(),
    }
}
