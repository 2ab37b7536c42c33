use crate::classify::{classify_extension, extension_of};
use crate::error::{ResolveError, Result};
use crate::store::{LocalStore, MediaStore};
use local_media_protocol::{MediaBlock, MediaKind, ResolvedMedia};
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// What a directory scan does when one of its files cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// The first read failure fails the whole call.
    #[default]
    Abort,
    /// Unreadable files are logged and left out of the result.
    Skip,
}

impl BatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for BatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchPolicy {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown batch policy '{other}' (expected 'abort' or 'skip')"
            )),
        }
    }
}

/// Converts stored artifacts into [`ResolvedMedia`].
///
/// Stateless apart from its configuration; every call hits the store again, nothing is cached.
#[derive(Clone)]
pub struct MediaResolver {
    store: Arc<dyn MediaStore>,
    batch_policy: BatchPolicy,
}

impl MediaResolver {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self {
            store,
            batch_policy: BatchPolicy::default(),
        }
    }

    pub fn local() -> Self {
        Self::new(Arc::new(LocalStore))
    }

    pub fn with_batch_policy(mut self, batch_policy: BatchPolicy) -> Self {
        self.batch_policy = batch_policy;
        self
    }

    pub fn batch_policy(&self) -> BatchPolicy {
        self.batch_policy
    }

    /// Load one file as a single block of the given kind and MIME type.
    pub async fn resolve_single(
        &self,
        path: &Path,
        mime_type: &str,
        kind: MediaKind,
    ) -> Result<ResolvedMedia> {
        if !self.store.is_file(path).await {
            return Err(ResolveError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = self.store.read(path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ResolveError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ResolveError::io(path, err)
            }
        })?;
        log::debug!("Resolved {} ({} bytes)", path.display(), bytes.len());

        Ok(ResolvedMedia::single(MediaBlock::encode(
            kind, mime_type, &bytes,
        )))
    }

    /// Load every file of `kind` directly inside `dir`, ordered by file name.
    ///
    /// Files whose extension is not in the classification table, or maps to another kind, are
    /// skipped silently. Finding nothing is an [`ResolveError::EmptyResult`].
    pub async fn resolve_directory(&self, dir: &Path, kind: MediaKind) -> Result<ResolvedMedia> {
        if !self.store.is_dir(dir).await {
            return Err(ResolveError::NotFound {
                path: dir.to_path_buf(),
            });
        }

        let mut names = self.store.list_files(dir).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ResolveError::NotFound {
                    path: dir.to_path_buf(),
                }
            } else {
                ResolveError::io(dir, err)
            }
        })?;
        names.sort();

        let mut blocks = Vec::new();
        for name in &names {
            let Some(media_type) = extension_of(name).and_then(|ext| classify_extension(&ext))
            else {
                continue;
            };
            if media_type.kind != kind {
                continue;
            }

            let path = dir.join(name);
            match self.store.read(&path).await {
                Ok(bytes) => blocks.push(MediaBlock::encode(kind, media_type.mime_type, &bytes)),
                Err(err) => match self.batch_policy {
                    BatchPolicy::Abort => return Err(ResolveError::io(path, err)),
                    BatchPolicy::Skip => {
                        log::warn!("Skipping unreadable {}: {err}", path.display());
                    }
                },
            }
        }

        log::debug!(
            "Scanned {}: {} entries, {} {kind} blocks",
            dir.display(),
            names.len(),
            blocks.len()
        );

        ResolvedMedia::from_blocks(blocks).ok_or_else(|| ResolveError::EmptyResult {
            dir: dir.to_path_buf(),
        })
    }
}

impl fmt::Debug for MediaResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaResolver")
            .field("batch_policy", &self.batch_policy)
            .finish_non_exhaustive()
    }
}
