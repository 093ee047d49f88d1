use std::path::PathBuf;

/// Most recently granted folder names, newest first.
///
/// Only display names survive a session; the folder grant itself cannot be
/// re-acquired without the user picking the folder again.
pub struct FolderHistory {
    names: Vec<String>,
    path: PathBuf,
}

pub const MAX_HISTORY: usize = 5;

impl FolderHistory {
    pub fn load(path: PathBuf) -> Self {
        let names = super::load_collection(&path);
        Self { names, path }
    }

    pub fn remember(&mut self, name: &str) {
        self.names.retain(|n| n != name);
        self.names.insert(0, name.to_string());
        self.names.truncate(MAX_HISTORY);
        super::save_collection(&self.path, &self.names);
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembering_moves_to_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = FolderHistory::load(dir.path().join("folders.json"));

        history.remember("notes");
        history.remember("papers");
        history.remember("notes");

        assert_eq!(history.names(), ["notes", "papers"]);
    }

    #[test]
    fn history_is_capped_at_five() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = FolderHistory::load(dir.path().join("folders.json"));

        for name in ["a", "b", "c", "d", "e", "f"] {
            history.remember(name);
        }

        assert_eq!(history.names(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn reload_roundtrips_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folders.json");

        let mut history = FolderHistory::load(path.clone());
        history.remember("notes");
        history.remember("papers");

        let reloaded = FolderHistory::load(path);
        assert_eq!(reloaded.names(), ["papers", "notes"]);
    }
}
