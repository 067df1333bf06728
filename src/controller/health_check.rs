use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub fn router() -> Router {
    Router::new().route("/health", get(get_health_check))
}

/// Liveness probe for the hosting transport
async fn get_health_check() -> StatusCode {
    StatusCode::OK
}
