//! Local Media MCP Server
//!
//! Serves pre-generated media artifacts (images, audio) to an MCP host as base64 tool results.
//!
//! ## Tools
//!
//! - `generate_image` - the configured image file as one image block
//! - `generate_music` - the configured audio file as one audio block
//! - `generate_multiple_images` - every image directly inside the configured directory
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "local-media": {
//!       "command": "local-media-mcp",
//!       "args": ["--media-root", "/srv/generated"]
//!     }
//!   }
//! }
//! ```

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use rmcp::service::ServerInitializeError;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod config;
pub mod tools;

pub use config::{MediaConfig, ServerArgs};
pub use tools::{DispatchError, LocalMediaService, MediaDispatcher, MediaTool, ToolRegistry};

pub async fn main_entry() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = ServerArgs::parse();
    let config = MediaConfig::from_args(args).context("invalid configuration")?;
    log::info!(
        "Starting local media MCP server (image={}, audio={}, images_dir={}, batch_policy={})",
        config.image_file.display(),
        config.audio_file.display(),
        config.images_dir.display(),
        config.batch_policy
    );

    let service = LocalMediaService::from_config(&config)?;
    let server = match service.serve(stdio()).await {
        Ok(server) => server,
        // Host went away before the handshake finished.
        Err(ServerInitializeError::ConnectionClosed(stage)) => {
            log::info!("Host closed the channel during initialization ({stage})");
            return Ok(());
        }
        Err(err) => return Err(err).context("failed to start MCP session"),
    };

    // Ctrl-C cancels the session; a closed stdin ends it on its own.
    let cancel = server.cancellation_token();
    let signal = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupt received, shutting down");
            cancel.cancel();
        }
    });

    let reason = server.waiting().await?;
    signal.abort();

    log::info!("Local media MCP server stopped ({reason:?})");
    Ok(())
}
