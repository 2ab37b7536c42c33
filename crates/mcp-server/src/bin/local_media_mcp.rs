use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    local_media_mcp::main_entry().await
}
