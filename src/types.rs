use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String, // "function"
    pub function: FunctionCall,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String, // raw JSON string
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Message {
    pub role: String, // "user" | "assistant" | "tool" | "system"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self::text("system", content)
    }

    pub fn user(content: &str) -> Self {
        Self::text("user", content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::text("assistant", content)
    }

    fn text(role: &str, content: &str) -> Self {
        Message {
            role: role.to_string(),
            content: Some(content.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

/// A single call the model asked for, normalized at the adapter
/// boundary. `raw_arguments` comes straight off the wire and is not
/// guaranteed to be valid JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub raw_arguments: String,
}

/// What every provider adapter hands back, regardless of how the
/// vendor shaped its response.
#[derive(Clone, Debug)]
pub struct AssistantResponse {
    pub content: String,
    pub tool_calls: Option<Vec<ToolCallRequest>>,
}

impl AssistantResponse {
    pub fn text(content: impl Into<String>) -> Self {
        AssistantResponse {
            content: content.into(),
            tool_calls: None,
        }
    }

    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_ref().is_some_and(|tcs| !tcs.is_empty())
    }
}

/// Outcome of one tool call. Produced on every path, success or
/// failure, so each request gets exactly one tool message back.
#[derive(Clone, Debug)]
pub struct ToolResult {
    pub tool_call_id: String,
    pub name: String,
    pub content: String,
}

impl ToolResult {
    pub fn into_message(self) -> Message {
        Message {
            role: "tool".to_string(),
            content: Some(self.content),
            name: Some(self.name),
            tool_calls: None,
            tool_call_id: Some(self.tool_call_id),
        }
    }
}
