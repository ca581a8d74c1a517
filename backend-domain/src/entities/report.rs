// Reporting view types, recomputed on demand from the store

use serde::{Deserialize, Serialize};

use crate::entities::location::LocationSummary;
use crate::entities::visit::VisitAttempt;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    pub id: String,
    pub name: String,
    pub prize: String,
    pub emoji: String,
    pub has_winner: bool,
    pub winner_time: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationStats {
    pub id: String,
    pub name: String,
    pub attempts: usize,
    pub has_winner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub total_locations: usize,
    pub winners_count: usize,
    pub total_participants: usize,
    pub locations: Vec<LocationStats>,
}

/// A visit enriched with catalog display metadata; `location` is null when the
/// id has left the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptView {
    #[serde(flatten)]
    pub attempt: VisitAttempt,
    pub location: Option<LocationSummary>,
}
