use rmcp::model::{JsonObject, Tool};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

impl ToolDescriptor {
    /// MCP tool definition. None of the tools take arguments.
    pub fn to_tool(&self) -> Tool {
        Tool::new(self.name, self.description, Arc::new(empty_input_schema()))
    }
}

pub const GENERATE_IMAGE: ToolDescriptor = ToolDescriptor {
    name: "generate_image",
    description: "Return the locally generated image as base64.",
};

pub const GENERATE_MUSIC: ToolDescriptor = ToolDescriptor {
    name: "generate_music",
    description: "Return the locally generated audio track as base64.",
};

pub const GENERATE_MULTIPLE_IMAGES: ToolDescriptor = ToolDescriptor {
    name: "generate_multiple_images",
    description: "Return every locally generated image in the images directory as base64, ordered by file name.",
};

pub const TOOL_CATALOG: &[ToolDescriptor] = &[GENERATE_IMAGE, GENERATE_MUSIC, GENERATE_MULTIPLE_IMAGES];

pub(crate) fn empty_input_schema() -> JsonObject {
    match json!({ "type": "object", "properties": {}, "required": [] }) {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

pub(crate) fn tool_instructions() -> String {
    let mut out = String::from(
        "Local media serves pre-generated artifacts; tools take no arguments and return base64 media blocks.\n",
    );
    for tool in TOOL_CATALOG {
        out.push_str(&format!("- {}: {}\n", tool.name, tool.description));
    }
    out
}
