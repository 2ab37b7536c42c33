use super::catalog::{ToolDescriptor, GENERATE_IMAGE, GENERATE_MULTIPLE_IMAGES, GENERATE_MUSIC};
use super::registry::{MediaTool, ToolRegistry};
use crate::config::MediaConfig;
use anyhow::{Context as AnyhowContext, Result};
use async_trait::async_trait;
use local_media_resolver::{
    classify_path, MediaKind, MediaResolver, MediaType, ResolvedMedia, Result as ResolveResult,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Serves one fixed file as a single block.
#[derive(Debug, Clone)]
pub struct SingleFileTool {
    descriptor: ToolDescriptor,
    path: PathBuf,
    media_type: MediaType,
}

impl SingleFileTool {
    /// The MIME type comes from the classification table; the file's extension must map to
    /// `kind`.
    pub fn new(descriptor: ToolDescriptor, path: PathBuf, kind: MediaKind) -> Result<Self> {
        let media_type = classify_path(&path).with_context(|| {
            format!(
                "{}: {} has no recognized media extension",
                descriptor.name,
                path.display()
            )
        })?;
        anyhow::ensure!(
            media_type.kind == kind,
            "{}: {} is {} ({}), expected {kind}",
            descriptor.name,
            path.display(),
            media_type.kind,
            media_type.mime_type
        );
        Ok(Self {
            descriptor,
            path,
            media_type,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.media_type.mime_type
    }
}

#[async_trait]
impl MediaTool for SingleFileTool {
    fn descriptor(&self) -> ToolDescriptor {
        self.descriptor
    }

    async fn resolve(&self, resolver: &MediaResolver) -> ResolveResult<ResolvedMedia> {
        resolver
            .resolve_single(&self.path, self.media_type.mime_type, self.media_type.kind)
            .await
    }
}

/// Serves every file of one kind inside a directory.
#[derive(Debug, Clone)]
pub struct DirectoryTool {
    descriptor: ToolDescriptor,
    dir: PathBuf,
    kind: MediaKind,
}

impl DirectoryTool {
    pub fn new(descriptor: ToolDescriptor, dir: PathBuf, kind: MediaKind) -> Self {
        Self {
            descriptor,
            dir,
            kind,
        }
    }
}

#[async_trait]
impl MediaTool for DirectoryTool {
    fn descriptor(&self) -> ToolDescriptor {
        self.descriptor
    }

    async fn resolve(&self, resolver: &MediaResolver) -> ResolveResult<ResolvedMedia> {
        resolver.resolve_directory(&self.dir, self.kind).await
    }
}

impl ToolRegistry {
    /// The built-in tool set, wired to the configured locations.
    pub fn from_config(config: &MediaConfig) -> Result<Self> {
        let tools: Vec<Arc<dyn MediaTool>> = vec![
            Arc::new(SingleFileTool::new(
                GENERATE_IMAGE,
                config.image_file.clone(),
                MediaKind::Image,
            )?),
            Arc::new(SingleFileTool::new(
                GENERATE_MUSIC,
                config.audio_file.clone(),
                MediaKind::Audio,
            )?),
            Arc::new(DirectoryTool::new(
                GENERATE_MULTIPLE_IMAGES,
                config.images_dir.clone(),
                MediaKind::Image,
            )),
        ];

        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool)?;
        }
        Ok(registry)
    }
}
