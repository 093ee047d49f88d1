pub mod folders;
pub mod notes;
pub mod tasks;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a JSON collection from disk. Missing or corrupt files yield an
/// empty collection; corruption is logged but never surfaced.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("Discarding corrupt data in {}: {}", path.display(), e);
                Vec::new()
            }
        },
        Err(_) => Vec::new(),
    }
}

/// Persist a JSON collection. Fire-and-forget: failures are logged, not returned.
pub fn save_collection<T: Serialize>(path: &Path, items: &[T]) {
    match serde_json::to_string_pretty(items) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, json) {
                log::error!("Failed to save {}: {}", path.display(), e);
            }
        }
        Err(e) => log::error!("Failed to serialize {}: {}", path.display(), e),
    }
}
