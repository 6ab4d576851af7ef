use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/index.html", get(handlers::landing))
        .route(
            "/dns-query",
            get(handlers::dns_query_get)
                .post(handlers::dns_query_post)
                .fallback(handlers::method_not_allowed),
        )
        .route("/resolve", get(handlers::resolve_name))
        .route("/providers", get(handlers::get_providers))
        .route("/stats", get(handlers::get_stats))
        .route("/bench", get(handlers::run_bench))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(handlers::answer_options))
        .layer(cors_layer())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}
