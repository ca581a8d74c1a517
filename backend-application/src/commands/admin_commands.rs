use std::collections::HashMap;

use tracing::info;

use crate::{AppError, AppState};

/// Clears all event state: the winners document and the visit log, durably.
/// This is the only operation allowed to undo a winner. It takes every
/// location lock (sorted id order, same subset order adjudication uses) so no
/// in-flight adjudication can interleave with the wipe.
pub async fn reset_event(state: &AppState) -> Result<(), AppError> {
    let mut ids: Vec<&String> = state.location_locks.keys().collect();
    ids.sort();

    let mut guards = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(lock) = state.location_locks.get(id) {
            guards.push(lock.lock().await);
        }
    }

    state.store.save_winners(&HashMap::new()).await?;
    state.audit_log.clear().await?;
    state.metrics.record_reset();
    info!("event state cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::participate_commands::participate;
    use crate::queries::location_queries::location_detail;
    use crate::test_support::{request, test_state};
    use backend_domain::ports::PromotionStore;

    #[tokio::test]
    async fn reset_clears_winners_and_log() {
        let (state, store) = test_state(&["plaza", "harbor"]);

        participate(&state, request("plaza", "t1"), "10.0.0.1".to_string())
            .await
            .expect("visit");
        participate(&state, request("harbor", "t1"), "10.0.0.2".to_string())
            .await
            .expect("visit");

        reset_event(&state).await.expect("reset");

        assert!(store.load_winners().await.expect("winners").is_empty());
        assert!(store.load_log().await.expect("log").is_empty());

        for id in ["plaza", "harbor"] {
            let detail = location_detail(&state, id).await.expect("detail");
            assert!(!detail.has_winner);
            assert_eq!(detail.winner_time, None);
        }
    }

    #[tokio::test]
    async fn location_can_be_won_again_after_reset() {
        let (state, _store) = test_state(&["plaza"]);

        let before = participate(&state, request("plaza", "t1"), "10.0.0.1".to_string())
            .await
            .expect("visit");
        assert!(before.is_winner);

        reset_event(&state).await.expect("reset");

        let after = participate(&state, request("plaza", "t2"), "10.0.0.2".to_string())
            .await
            .expect("visit");
        assert!(after.is_winner);
    }
}
