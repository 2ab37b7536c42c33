use super::catalog;
use super::dispatch::MediaDispatcher;
use crate::config::MediaConfig;
use anyhow::Result;
use local_media_protocol::{MediaBlock, MediaKind};
use rmcp::model::{
    AnnotateAble, CallToolRequestParam, CallToolResult, Content, Implementation,
    ListToolsResult, PaginatedRequestParam, RawAudioContent, RawContent, ServerCapabilities,
    ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData as McpError, ServerHandler};

/// Local Media MCP Service
#[derive(Clone, Debug)]
pub struct LocalMediaService {
    dispatcher: MediaDispatcher,
}

impl LocalMediaService {
    pub fn new(dispatcher: MediaDispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn from_config(config: &MediaConfig) -> Result<Self> {
        Ok(Self::new(MediaDispatcher::from_config(config)?))
    }

    pub async fn call(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        if let Some(args) = request.arguments.as_ref().filter(|args| !args.is_empty()) {
            log::debug!(
                "Ignoring arguments for '{}': {:?}",
                request.name,
                args.keys().collect::<Vec<_>>()
            );
        }

        match self.dispatcher.call_tool(&request.name).await {
            Ok(media) => Ok(CallToolResult::success(
                media.into_blocks().into_iter().map(media_content).collect(),
            )),
            Err(err) => {
                log::warn!("Tool '{}' failed: {err}", request.name);
                Err(err.into())
            }
        }
    }
}

/// MCP content item for one media block.
pub fn media_content(block: MediaBlock) -> Content {
    match block.kind {
        MediaKind::Image => Content::image(block.data, block.mime_type),
        MediaKind::Audio => RawContent::Audio(RawAudioContent {
            data: block.data,
            mime_type: block.mime_type,
        })
        .no_annotation(),
    }
}

impl ServerHandler for LocalMediaService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<ListToolsResult, McpError>> + Send + '_
    {
        async move { Ok(ListToolsResult::with_all_items(self.dispatcher.list_tools())) }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> impl std::future::Future<Output = std::result::Result<CallToolResult, McpError>> + Send + '_
    {
        async move { self.call(request).await }
    }
}
