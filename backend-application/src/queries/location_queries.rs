use std::collections::HashMap;

use crate::{AppError, AppState};
use backend_domain::{LocationDetail, LocationSummary};

pub fn list_locations(state: &AppState) -> HashMap<String, LocationSummary> {
    state
        .catalog
        .iter()
        .map(|location| (location.id.clone(), LocationSummary::from(location)))
        .collect()
}

pub async fn location_detail(state: &AppState, id: &str) -> Result<LocationDetail, AppError> {
    let location = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::UnknownLocation(id.to_string()))?;
    let winners = state.store.load_winners().await?;
    let winner = winners.get(id);

    Ok(LocationDetail {
        id: location.id.clone(),
        name: location.name.clone(),
        prize: location.prize.clone(),
        emoji: location.emoji.clone(),
        has_winner: winner.is_some(),
        winner_time: winner.map(|attempt| attempt.server_time),
    })
}
