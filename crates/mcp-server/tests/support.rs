use anyhow::{Context, Result};
use rmcp::{
    service::{RoleClient, RunningService, ServiceExt},
    transport::TokioChildProcess,
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub fn locate_local_media_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_local-media-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` -> `.../target/{debug|release}/local-media-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("local-media-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/local-media-mcp", "target/release/local-media-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!(
        "failed to locate local-media-mcp binary; build with: cargo build -p local-media-mcp"
    )
}

pub async fn start_service(
    media_root: &Path,
    extra_args: &[&str],
) -> Result<RunningService<RoleClient, ()>> {
    let bin = locate_local_media_mcp_bin()?;

    let mut cmd = Command::new(bin);
    for key in [
        "LOCAL_MEDIA_IMAGE",
        "LOCAL_MEDIA_AUDIO",
        "LOCAL_MEDIA_IMAGES_DIR",
        "LOCAL_MEDIA_CALL_TIMEOUT_MS",
        "LOCAL_MEDIA_BATCH_POLICY",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("LOCAL_MEDIA_ROOT", media_root);
    cmd.env("RUST_LOG", "warn");
    cmd.args(extra_args);

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;
    Ok(service)
}
