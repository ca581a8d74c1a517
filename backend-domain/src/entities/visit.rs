// Visit entity
// One notification that a client reached a location, finalized at adjudication

use serde::{Deserialize, Serialize};

/// A fully adjudicated visit. Immutable once written; `winner` is assigned
/// exactly once inside the adjudication critical section. The winners document
/// maps location id to the winning attempt itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitAttempt {
    pub id: u64,
    pub location_id: String,
    /// Client-reported timestamp, display only. Never used for adjudication.
    pub access_time: String,
    pub source_address: String,
    pub user_agent: String,
    /// Authoritative receipt time, milliseconds since epoch.
    pub server_time: i64,
    pub winner: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipateRequest {
    pub location_id: String,
    #[serde(default)]
    pub access_time: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationOutcome {
    pub is_winner: bool,
    pub location_name: String,
    pub prize: String,
    pub emoji: String,
    pub access_time: String,
    /// Server time of the location's winning attempt (this one, if it won).
    pub winner_time: i64,
}
