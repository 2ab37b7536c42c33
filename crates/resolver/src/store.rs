use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Read-only view of the storage holding media artifacts.
///
/// Paths handed to a store are already absolute.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn is_file(&self, path: &Path) -> bool;

    async fn is_dir(&self, path: &Path) -> bool;

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Names of the regular files directly inside `dir`. Subdirectories are not descended into
    /// and not reported. Order is unspecified.
    async fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// [`MediaStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[async_trait]
impl MediaStore for LocalStore {
    async fn is_file(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    async fn is_dir(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            // Follow symlinks: a link to a file counts as a file.
            let is_file = match tokio::fs::metadata(entry.path()).await {
                Ok(meta) => meta.is_file(),
                Err(err) => {
                    log::debug!("Skipping {}: {err}", entry.path().display());
                    false
                }
            };
            if !is_file {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("Skipping non UTF-8 file name {raw:?}"),
            }
        }

        Ok(names)
    }
}
