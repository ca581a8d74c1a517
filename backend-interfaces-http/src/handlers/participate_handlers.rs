use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::Json;

use backend_application::commands::participate_commands;
use backend_application::{AppError, AppState};
use backend_domain::{ParticipateRequest, ParticipationOutcome};

use crate::error::HttpError;

pub async fn participate(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(payload): Json<ParticipateRequest>,
) -> Result<Json<ParticipationOutcome>, HttpError> {
    let outcome = participate_commands::participate(&state, payload, peer.ip().to_string())
        .await
        .map_err(|err| match err {
            // an unknown id in a participation body is a client mistake, not a
            // missing resource
            AppError::UnknownLocation(id) => {
                HttpError::BadRequest(format!("unknown location: {}", id))
            }
            other => HttpError::from(other),
        })?;
    Ok(Json(outcome))
}
