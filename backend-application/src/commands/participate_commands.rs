use chrono::Utc;
use tracing::error;

use crate::{AppError, AppState};
use backend_domain::{ParticipateRequest, ParticipationOutcome, VisitAttempt};

/// Adjudicates one visit notification. For each location the first attempt to
/// pass the critical section becomes the winner; every later attempt loses and
/// sees the winning attempt's server time. The read-check-write against the
/// winners document happens entirely under the location's mutex, so two
/// adjudications for the same location can never interleave.
pub async fn participate(
    state: &AppState,
    request: ParticipateRequest,
    source_address: String,
) -> Result<ParticipationOutcome, AppError> {
    let location_id = request.location_id.trim().to_string();
    if location_id.is_empty() {
        return Err(AppError::Validation(
            "locationId must not be empty".to_string(),
        ));
    }
    let location = match state.catalog.get(&location_id) {
        Some(location) => location.clone(),
        None => {
            state.metrics.record_unknown_location();
            return Err(AppError::UnknownLocation(location_id));
        }
    };
    state.metrics.record_participation();

    let access_time = request.access_time.unwrap_or_default();
    let user_agent = request.user_agent.unwrap_or_default();

    // lock table is built from the catalog, so the entry exists for any id
    // that passed the lookup above
    let lock = state
        .location_locks
        .get(&location_id)
        .ok_or_else(|| AppError::UnknownLocation(location_id.clone()))?;
    let _guard = lock.lock().await;

    let mut winners = state.store.load_winners().await?;
    let server_time = Utc::now().timestamp_millis();
    let mut attempt = VisitAttempt {
        id: state.next_attempt_id(),
        location_id: location_id.clone(),
        access_time,
        source_address,
        user_agent,
        server_time,
        winner: false,
    };

    let existing_winner_time = winners.get(&location_id).map(|winner| winner.server_time);
    let winner_time = match existing_winner_time {
        Some(time) => time,
        None => {
            attempt.winner = true;
            winners.insert(location_id.clone(), attempt.clone());
            // the winner is durable before anyone hears about it
            state.store.save_winners(&winners).await?;
            state.metrics.record_winner();
            server_time
        }
    };

    if let Err(err) = state.audit_log.append(&attempt).await {
        state.metrics.record_audit_log_failure();
        error!("audit log append failed for visit {}: {:#}", attempt.id, err);
    }

    Ok(ParticipationOutcome {
        is_winner: attempt.winner,
        location_name: location.name,
        prize: location.prize,
        emoji: location.emoji,
        access_time: attempt.access_time,
        winner_time,
    })
}
