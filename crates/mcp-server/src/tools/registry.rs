use super::catalog::ToolDescriptor;
use super::error::DispatchError;
use async_trait::async_trait;
use local_media_resolver::{MediaResolver, ResolvedMedia, Result as ResolveResult};
use rmcp::model::Tool;
use std::collections::HashMap;
use std::sync::Arc;

/// One named operation exposed to the host.
#[async_trait]
pub trait MediaTool: Send + Sync {
    fn descriptor(&self) -> ToolDescriptor;

    async fn resolve(&self, resolver: &MediaResolver) -> ResolveResult<ResolvedMedia>;
}

/// Name -> tool routing table, plus registration order for `tools/list`.
///
/// Built once at startup and read-only afterwards.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn MediaTool>>,
    routes: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn MediaTool>) -> Result<(), DispatchError> {
        let name = tool.descriptor().name;
        if self.routes.contains_key(name) {
            return Err(DispatchError::DuplicateTool {
                name: name.to_string(),
            });
        }
        self.routes.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn MediaTool>> {
        self.routes.get(name).map(|&idx| &self.tools[idx])
    }

    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    pub fn list_all(&self) -> Vec<Tool> {
        self.tools
            .iter()
            .map(|tool| tool.descriptor().to_tool())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tools.iter().map(|tool| tool.descriptor().name))
            .finish()
    }
}
