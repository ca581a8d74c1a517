use std::path::Path;

use tokio::fs;
use tracing::warn;

use backend_domain::{Location, LocationCatalog};

/// Loads the location catalog from a YAML file. The catalog is configuration,
/// not event state: it is read once at startup and survives resets. A missing
/// file falls back to the built-in default set.
pub async fn load_catalog(path: &str) -> anyhow::Result<LocationCatalog> {
    let file_path = Path::new(path);
    if !file_path.exists() {
        warn!("location catalog {} not found, using built-in defaults", path);
        return LocationCatalog::from_entries(default_locations());
    }
    let content = fs::read_to_string(file_path).await?;
    let entries: Vec<Location> = serde_yaml::from_str(&content)?;
    LocationCatalog::from_entries(entries)
}

pub fn default_locations() -> Vec<Location> {
    [
        ("plaza", "Central Plaza", "Coffee voucher", "⛲"),
        ("harbor", "Old Harbor", "Boat tour for two", "⚓"),
        ("museum", "City Museum", "Annual pass", "🏛️"),
        ("park", "Riverside Park", "Picnic set", "🌳"),
        ("tower", "Clock Tower", "Rooftop dinner", "🕰️"),
        ("market", "Night Market", "Food stall crawl", "🏮"),
    ]
    .into_iter()
    .map(|(id, name, prize, emoji)| Location {
        id: id.to_string(),
        name: name.to_string(),
        prize: prize.to_string(),
        emoji: emoji.to_string(),
    })
    .collect()
}
