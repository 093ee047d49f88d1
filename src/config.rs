use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("workdesk")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DeskConfig {
    pub data_directory: PathBuf,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_dir(),
        }
    }
}

impl DeskConfig {
    pub fn tasks_path(&self) -> PathBuf {
        self.data_directory.join("tasks.json")
    }

    pub fn notes_path(&self) -> PathBuf {
        self.data_directory.join("calendar_notes.json")
    }

    pub fn folder_history_path(&self) -> PathBuf {
        self.data_directory.join("tracked_folders.json")
    }

    /// Ensure the data directory exists.
    pub fn ensure_files(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_paths_live_under_data_dir() {
        let config = DeskConfig {
            data_directory: PathBuf::from("/tmp/desk"),
        };
        assert_eq!(config.tasks_path(), PathBuf::from("/tmp/desk/tasks.json"));
        assert_eq!(
            config.notes_path(),
            PathBuf::from("/tmp/desk/calendar_notes.json")
        );
        assert_eq!(
            config.folder_history_path(),
            PathBuf::from("/tmp/desk/tracked_folders.json")
        );
    }
}
