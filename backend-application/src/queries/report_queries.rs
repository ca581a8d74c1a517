use std::collections::HashMap;

use crate::{AppError, AppState};
use backend_domain::{AttemptView, LocationCatalog, LocationStats, StatsReport, VisitAttempt};

/// Newest entries served by the admin log view.
pub const RECENT_LOGS_LIMIT: usize = 100;

pub async fn stats(state: &AppState) -> Result<StatsReport, AppError> {
    let winners = state.store.load_winners().await?;
    let log = state.store.load_log().await?;

    let mut attempts_by_location: HashMap<&str, usize> = HashMap::new();
    for entry in &log {
        *attempts_by_location
            .entry(entry.location_id.as_str())
            .or_default() += 1;
    }

    let locations = state
        .catalog
        .iter()
        .map(|location| LocationStats {
            id: location.id.clone(),
            name: location.name.clone(),
            attempts: attempts_by_location
                .get(location.id.as_str())
                .copied()
                .unwrap_or(0),
            has_winner: winners.contains_key(&location.id),
        })
        .collect();

    Ok(StatsReport {
        total_locations: state.catalog.len(),
        winners_count: winners.len(),
        total_participants: log.len(),
        locations,
    })
}

pub async fn winners(state: &AppState) -> Result<HashMap<String, AttemptView>, AppError> {
    let winners = state.store.load_winners().await?;
    Ok(winners
        .into_iter()
        .map(|(id, attempt)| {
            let view = enrich(&state.catalog, attempt);
            (id, view)
        })
        .collect())
}

pub async fn recent_logs(state: &AppState) -> Result<Vec<AttemptView>, AppError> {
    let log = state.store.load_log().await?;
    Ok(log
        .into_iter()
        .rev()
        .take(RECENT_LOGS_LIMIT)
        .map(|attempt| enrich(&state.catalog, attempt))
        .collect())
}

fn enrich(catalog: &LocationCatalog, attempt: VisitAttempt) -> AttemptView {
    let location = catalog.get(&attempt.location_id).map(Into::into);
    AttemptView { attempt, location }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::participate_commands::participate;
    use crate::test_support::{attempt, request, test_state};

    #[tokio::test]
    async fn stats_aggregate_visits_and_winners() {
        let (state, _store) = test_state(&["a", "b"]);

        participate(&state, request("a", "t1"), "10.0.0.1".to_string())
            .await
            .expect("visit");
        participate(&state, request("b", "t1"), "10.0.0.2".to_string())
            .await
            .expect("visit");
        participate(&state, request("a", "t2"), "10.0.0.3".to_string())
            .await
            .expect("visit");

        let report = stats(&state).await.expect("stats");
        assert_eq!(report.total_locations, 2);
        assert_eq!(report.winners_count, 2);
        assert_eq!(report.total_participants, 3);

        let by_id: HashMap<&str, &LocationStats> = report
            .locations
            .iter()
            .map(|entry| (entry.id.as_str(), entry))
            .collect();
        assert_eq!(by_id["a"].attempts, 2);
        assert!(by_id["a"].has_winner);
        assert_eq!(by_id["b"].attempts, 1);
        assert!(by_id["b"].has_winner);
    }

    #[tokio::test]
    async fn recent_logs_are_newest_first_and_capped() {
        let (state, _store) = test_state(&["plaza"]);

        for id in 1..=120u64 {
            state
                .audit_log
                .append(&attempt(id, "plaza"))
                .await
                .expect("append");
        }

        let views = recent_logs(&state).await.expect("logs");
        assert_eq!(views.len(), RECENT_LOGS_LIMIT);
        assert_eq!(views.first().map(|view| view.attempt.id), Some(120));
        assert_eq!(views.last().map(|view| view.attempt.id), Some(21));
    }

    #[tokio::test]
    async fn log_views_tolerate_ids_missing_from_catalog() {
        let (state, _store) = test_state(&["plaza"]);

        state
            .audit_log
            .append(&attempt(1, "ghost"))
            .await
            .expect("append");

        let views = recent_logs(&state).await.expect("logs");
        assert_eq!(views.len(), 1);
        assert!(views[0].location.is_none());
    }

    #[tokio::test]
    async fn winners_view_is_enriched_with_catalog_metadata() {
        let (state, _store) = test_state(&["plaza"]);

        participate(&state, request("plaza", "t1"), "10.0.0.1".to_string())
            .await
            .expect("visit");

        let views = winners(&state).await.expect("winners");
        assert_eq!(views.len(), 1);
        let view = &views["plaza"];
        assert!(view.attempt.winner);
        let location = view.location.as_ref().expect("location metadata");
        assert_eq!(location.name, "Location plaza");
    }
}
