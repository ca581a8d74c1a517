use axum::Router;

use backend_application::AppState;

use crate::handlers::{admin_handlers, location_handlers, ops_handlers, participate_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/locations",
            axum::routing::get(location_handlers::list_locations),
        )
        .route(
            "/locations/:id",
            axum::routing::get(location_handlers::get_location),
        )
        .route(
            "/participate",
            axum::routing::post(participate_handlers::participate),
        )
        .route(
            "/admin/winners",
            axum::routing::get(admin_handlers::list_winners),
        )
        .route("/admin/logs", axum::routing::get(admin_handlers::list_logs))
        .route("/admin/stats", axum::routing::get(admin_handlers::get_stats))
        .route("/admin/reset", axum::routing::post(admin_handlers::reset))
        .route(
            "/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
