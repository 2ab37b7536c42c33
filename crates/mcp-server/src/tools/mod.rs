//! Local media tool surface.
//!
//! `catalog` names the tools, `registry` maps names to [`MediaTool`] objects, `dispatch` routes a
//! call through the registry and `service` adapts all of it to the MCP server handler.

pub(crate) mod catalog;
mod dispatch;
mod error;
mod media_tools;
mod registry;
mod service;

pub use catalog::{ToolDescriptor, TOOL_CATALOG};
pub use dispatch::MediaDispatcher;
pub use error::DispatchError;
pub use media_tools::{DirectoryTool, SingleFileTool};
pub use registry::{MediaTool, ToolRegistry};
pub use service::{media_content, LocalMediaService};
