use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{} not found", path.display())]
    NotFound { path: PathBuf },

    #[error("no matching media files in {}", dir.display())]
    EmptyResult { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Path (file or directory) the failure is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Io { path, .. } => path,
            Self::EmptyResult { dir } => dir,
        }
    }
}
