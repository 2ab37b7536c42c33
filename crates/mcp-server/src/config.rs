use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use local_media_resolver::BatchPolicy;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_MEDIA_ROOT: &str = "output";
const DEFAULT_IMAGE_FILE: &str = "generated.png";
const DEFAULT_AUDIO_FILE: &str = "generated.mp3";
const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Clone, Parser)]
#[command(name = "local-media-mcp")]
#[command(about = "Serve locally generated images and audio over MCP (stdio)", long_about = None)]
#[command(version)]
pub struct ServerArgs {
    /// Directory holding the generated artifacts
    #[arg(long, env = "LOCAL_MEDIA_ROOT", default_value = DEFAULT_MEDIA_ROOT)]
    pub media_root: PathBuf,

    /// Image returned by `generate_image` (default: <media-root>/generated.png)
    #[arg(long, env = "LOCAL_MEDIA_IMAGE")]
    pub image_file: Option<PathBuf>,

    /// Audio returned by `generate_music` (default: <media-root>/generated.mp3)
    #[arg(long, env = "LOCAL_MEDIA_AUDIO")]
    pub audio_file: Option<PathBuf>,

    /// Directory scanned by `generate_multiple_images` (default: <media-root>/images)
    #[arg(long, env = "LOCAL_MEDIA_IMAGES_DIR")]
    pub images_dir: Option<PathBuf>,

    /// Per-call timeout in milliseconds (0 disables it)
    #[arg(long, env = "LOCAL_MEDIA_CALL_TIMEOUT_MS", default_value_t = 0)]
    pub call_timeout_ms: u64,

    /// What a directory scan does with unreadable files: abort|skip
    #[arg(long, env = "LOCAL_MEDIA_BATCH_POLICY", default_value = "abort")]
    pub batch_policy: BatchPolicy,
}

/// Resolved server configuration. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaConfig {
    pub image_file: PathBuf,
    pub audio_file: PathBuf,
    pub images_dir: PathBuf,
    pub call_timeout: Option<Duration>,
    pub batch_policy: BatchPolicy,
}

impl MediaConfig {
    /// Default layout under `root`, no timeout, abort-on-error batches.
    pub fn with_root(root: &Path) -> Self {
        Self {
            image_file: root.join(DEFAULT_IMAGE_FILE),
            audio_file: root.join(DEFAULT_AUDIO_FILE),
            images_dir: root.join(DEFAULT_IMAGES_DIR),
            call_timeout: None,
            batch_policy: BatchPolicy::default(),
        }
    }

    pub fn from_args(args: ServerArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Ok(Self::from_args_in(args, &cwd))
    }

    /// Relative paths in `args` are resolved against `cwd`.
    pub fn from_args_in(args: ServerArgs, cwd: &Path) -> Self {
        let root = absolutize(&args.media_root, cwd);
        let defaults = Self::with_root(&root);

        Self {
            image_file: args
                .image_file
                .map_or(defaults.image_file, |p| absolutize(&p, cwd)),
            audio_file: args
                .audio_file
                .map_or(defaults.audio_file, |p| absolutize(&p, cwd)),
            images_dir: args
                .images_dir
                .map_or(defaults.images_dir, |p| absolutize(&p, cwd)),
            call_timeout: (args.call_timeout_ms > 0)
                .then(|| Duration::from_millis(args.call_timeout_ms)),
            batch_policy: args.batch_policy,
        }
    }
}

fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
