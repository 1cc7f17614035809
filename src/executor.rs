use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ToolError;
use crate::registry::ToolRegistry;
use crate::types::{ToolCallRequest, ToolResult};

/// Name stamped on results that never reached a real tool (unknown
/// name, unparsable arguments). The model sees it like any other tool
/// reply and can self-correct.
pub const ERROR_HANDLER_NAME: &str = "error_handler";

/// Dispatches model-issued calls into registered tools. Every path
/// ends in a ToolResult; nothing a tool or the model does can break
/// the conversation loop.
pub struct ToolExecutor {
    registry: Arc<ToolRegistry>,
}

impl ToolExecutor {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, request: &ToolCallRequest) -> ToolResult {
        let Some(tool) = self.registry.lookup(&request.name) else {
            warn!(tool = %request.name, "model requested an unregistered tool");
            return ToolResult {
                tool_call_id: request.id.clone(),
                name: ERROR_HANDLER_NAME.to_string(),
                content: format!("Tool '{}' not found.", request.name),
            };
        };

        let args = match serde_json::from_str::<Value>(&request.raw_arguments) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                warn!(tool = %request.name, "arguments were valid JSON but not an object");
                return ToolResult {
                    tool_call_id: request.id.clone(),
                    name: ERROR_HANDLER_NAME.to_string(),
                    content: format!(
                        "Invalid arguments format for tool '{}': expected a JSON object, got {}",
                        request.name, other
                    ),
                };
            }
            Err(e) => {
                warn!(tool = %request.name, error = %e, "arguments were not valid JSON");
                return ToolResult {
                    tool_call_id: request.id.clone(),
                    name: ERROR_HANDLER_NAME.to_string(),
                    content: format!(
                        "Invalid arguments format for tool '{}': {}",
                        request.name, e
                    ),
                };
            }
        };

        debug!(tool = %request.name, id = %request.id, "invoking tool");
        let content = match (tool.invoker)(&args) {
            Ok(output) => output,
            Err(ToolError::InvalidArguments(detail)) => {
                format!("invalid arguments for tool '{}': {}", request.name, detail)
            }
            Err(ToolError::Runtime(detail)) => {
                format!("unexpected error: {}", detail)
            }
        };

        ToolResult {
            tool_call_id: request.id.clone(),
            name: request.name.clone(),
            content,
        }
    }
}
