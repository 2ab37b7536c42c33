use super::catalog::ToolDescriptor;
use super::error::DispatchError;
use super::registry::ToolRegistry;
use crate::config::MediaConfig;
use anyhow::Result;
use local_media_resolver::{MediaResolver, ResolvedMedia};
use rmcp::model::Tool;
use std::sync::Arc;
use std::time::Duration;

/// Routes tool calls by name to their [`super::MediaTool`].
///
/// Holds no per-call state; concurrent calls share the registry and resolver read-only.
#[derive(Clone, Debug)]
pub struct MediaDispatcher {
    registry: Arc<ToolRegistry>,
    resolver: MediaResolver,
    call_timeout: Option<Duration>,
}

impl MediaDispatcher {
    pub fn new(registry: ToolRegistry, resolver: MediaResolver) -> Self {
        Self {
            registry: Arc::new(registry),
            resolver,
            call_timeout: None,
        }
    }

    pub fn from_config(config: &MediaConfig) -> Result<Self> {
        let registry = ToolRegistry::from_config(config)?;
        let resolver = MediaResolver::local().with_batch_policy(config.batch_policy);
        Ok(Self::new(registry, resolver).with_call_timeout(config.call_timeout))
    }

    pub fn with_call_timeout(mut self, call_timeout: Option<Duration>) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn list_tools(&self) -> Vec<Tool> {
        self.registry.list_all()
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.registry.descriptors()
    }

    pub async fn call_tool(&self, name: &str) -> Result<ResolvedMedia, DispatchError> {
        let Some(tool) = self.registry.get(name) else {
            return Err(DispatchError::UnknownTool {
                name: name.to_string(),
            });
        };

        let resolve = tool.resolve(&self.resolver);
        let media = match self.call_timeout {
            Some(timeout) => tokio::time::timeout(timeout, resolve)
                .await
                .map_err(|_| DispatchError::Timeout {
                    name: name.to_string(),
                    timeout,
                })??,
            None => resolve.await?,
        };

        log::debug!("{name}: {} media block(s)", media.len());
        Ok(media)
    }
}
