use std::collections::HashMap;

use axum::extract::State;
use axum::Json;

use backend_application::commands::admin_commands;
use backend_application::queries::report_queries;
use backend_application::AppState;
use backend_domain::{AttemptView, StatsReport};

use crate::error::HttpError;

#[derive(serde::Serialize)]
pub struct ResetResponse {
    message: String,
}

pub async fn list_winners(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, AttemptView>>, HttpError> {
    let winners = report_queries::winners(&state).await?;
    Ok(Json(winners))
}

pub async fn list_logs(State(state): State<AppState>) -> Result<Json<Vec<AttemptView>>, HttpError> {
    let logs = report_queries::recent_logs(&state).await?;
    Ok(Json(logs))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsReport>, HttpError> {
    let report = report_queries::stats(&state).await?;
    Ok(Json(report))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<ResetResponse>, HttpError> {
    admin_commands::reset_event(&state).await?;
    Ok(Json(ResetResponse {
        message: "event state cleared".to_string(),
    }))
}
