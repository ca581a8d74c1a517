use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    participations: AtomicU64,
    winners: AtomicU64,
    unknown_locations: AtomicU64,
    audit_log_failures: AtomicU64,
    resets: AtomicU64,
}

impl Metrics {
    pub fn record_participation(&self) {
        self.participations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_winner(&self) {
        self.winners.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unknown_location(&self) {
        self.unknown_locations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_audit_log_failure(&self) {
        self.audit_log_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let participations = self.participations.load(Ordering::Relaxed);
        let winners = self.winners.load(Ordering::Relaxed);
        let unknown = self.unknown_locations.load(Ordering::Relaxed);
        let audit_failures = self.audit_log_failures.load(Ordering::Relaxed);
        let resets = self.resets.load(Ordering::Relaxed);

        format!(
            "# TYPE waypoint_participations_total counter\n\
waypoint_participations_total {}\n\
# TYPE waypoint_winners_total counter\n\
waypoint_winners_total {}\n\
# TYPE waypoint_unknown_locations_total counter\n\
waypoint_unknown_locations_total {}\n\
# TYPE waypoint_audit_log_failures_total counter\n\
waypoint_audit_log_failures_total {}\n\
# TYPE waypoint_resets_total counter\n\
waypoint_resets_total {}\n",
            participations, winners, unknown, audit_failures, resets
        )
    }
}
