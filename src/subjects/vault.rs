use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("invalid file name: {0}")]
    InvalidName(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Session-scoped access to one user-granted folder of plain-text files.
///
/// Each operation is a single round trip with no retry; callers decide
/// the log/no-op policy on failure.
pub struct FolderVault {
    root: PathBuf,
    name: String,
}

impl FolderVault {
    /// Grant access to a folder. The session's "directory handle".
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, VaultError> {
        let root = path.as_ref().to_path_buf();
        let meta = tokio::fs::metadata(&root).await?;
        if !meta.is_dir() {
            return Err(VaultError::NotADirectory(root));
        }
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Ok(Self { root, name })
    }

    /// Display name of the granted folder.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the `.txt` entries in the folder, sorted.
    pub async fn list_text_files(&self) -> Result<Vec<String>, VaultError> {
        let mut files = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_file()
                && path.extension().is_some_and(|ext| ext == "txt")
            {
                if let Some(name) = path.file_name() {
                    files.push(name.to_string_lossy().into_owned());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Create `{name}.txt` with empty contents. An existing file of the
    /// same name is truncated.
    pub async fn create_file(&self, name: &str) -> Result<(), VaultError> {
        let file_name = format!("{}.txt", name.trim());
        tokio::fs::write(self.entry_path(&file_name)?, "").await?;
        Ok(())
    }

    /// Read a file's full contents.
    pub async fn read_file(&self, file_name: &str) -> Result<String, VaultError> {
        Ok(tokio::fs::read_to_string(self.entry_path(file_name)?).await?)
    }

    /// Replace a file's full contents.
    pub async fn write_file(&self, file_name: &str, contents: &str) -> Result<(), VaultError> {
        tokio::fs::write(self.entry_path(file_name)?, contents).await?;
        Ok(())
    }

    /// Remove an entry from the folder.
    pub async fn delete_file(&self, file_name: &str) -> Result<(), VaultError> {
        tokio::fs::remove_file(self.entry_path(file_name)?).await?;
        Ok(())
    }

    /// Resolve an entry name inside the granted folder, rejecting names
    /// that would escape it.
    fn entry_path(&self, file_name: &str) -> Result<PathBuf, VaultError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty()
            || trimmed == "."
            || trimmed == ".."
            || trimmed.contains('/')
            || trimmed.contains('\\')
        {
            return Err(VaultError::InvalidName(file_name.to_string()));
        }
        Ok(self.root.join(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn vault(dir: &tempfile::TempDir) -> FolderVault {
        FolderVault::open(dir.path()).await.unwrap()
    }

    #[tokio::test]
    async fn open_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        tokio::fs::write(&file, "x").await.unwrap();
        assert!(matches!(
            FolderVault::open(&file).await,
            Err(VaultError::NotADirectory(_))
        ));
    }

    #[tokio::test]
    async fn listing_only_returns_txt_entries() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(&dir).await;

        vault.create_file("maths").await.unwrap();
        vault.create_file("physics").await.unwrap();
        tokio::fs::write(dir.path().join("image.png"), "x")
            .await
            .unwrap();

        assert_eq!(
            vault.list_text_files().await.unwrap(),
            ["maths.txt", "physics.txt"]
        );
    }

    #[tokio::test]
    async fn write_then_read_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(&dir).await;

        vault.create_file("maths").await.unwrap();
        assert_eq!(vault.read_file("maths.txt").await.unwrap(), "");

        vault.write_file("maths.txt", "chapter one").await.unwrap();
        assert_eq!(vault.read_file("maths.txt").await.unwrap(), "chapter one");
    }

    #[tokio::test]
    async fn create_truncates_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(&dir).await;

        vault.create_file("maths").await.unwrap();
        vault.write_file("maths.txt", "old notes").await.unwrap();
        vault.create_file("maths").await.unwrap();
        assert_eq!(vault.read_file("maths.txt").await.unwrap(), "");
    }

    #[tokio::test]
    async fn delete_removes_the_entry() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(&dir).await;

        vault.create_file("maths").await.unwrap();
        vault.delete_file("maths.txt").await.unwrap();
        assert!(vault.list_text_files().await.unwrap().is_empty());
        assert!(vault.read_file("maths.txt").await.is_err());
    }

    #[tokio::test]
    async fn escaping_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let vault = vault(&dir).await;

        assert!(matches!(
            vault.read_file("../outside.txt").await,
            Err(VaultError::InvalidName(_))
        ));
        assert!(matches!(
            vault.write_file("", "x").await,
            Err(VaultError::InvalidName(_))
        ));
    }
}
