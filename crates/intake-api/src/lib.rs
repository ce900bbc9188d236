//! intake-api
//!
//! Thin HTTP routes in front of the questionnaire engine and the dashboard
//! derivations. The router is built here so integration tests can drive it
//! without a listener.

pub mod error;
pub mod middleware;
pub mod routes;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire definitions are public schema data
        .route(
            "/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route(
            "/questionnaires/{id}/step",
            post(routes::questionnaires::step),
        )
        .route("/dashboard/patients", post(routes::dashboard::filter_patients))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
}
