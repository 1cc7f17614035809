use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::provider::ProviderAdapter;
use crate::types::{AssistantResponse, Message, ToolCallRequest};

/// Scripted backend for tests: hands out pre-configured responses in
/// order and records every request it sees.
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<AssistantResponse>>>,
    call_history: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text_response(&mut self, content: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(AssistantResponse::text(content));
    }

    pub fn add_tool_call_response(&mut self, id: &str, tool_name: &str, args: &str) {
        self.responses.lock().unwrap().push(AssistantResponse {
            content: String::new(),
            tool_calls: Some(vec![ToolCallRequest {
                id: id.to_string(),
                name: tool_name.to_string(),
                raw_arguments: args.to_string(),
            }]),
        });
    }

    pub fn call_history(&self) -> Vec<Vec<Message>> {
        self.call_history.lock().unwrap().clone()
    }

    fn pop_response(&self) -> AssistantResponse {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            AssistantResponse::text("No more mock responses configured")
        } else {
            responses.remove(0)
        }
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    fn identify(&self) -> &str {
        "mock"
    }

    async fn complete(&self, history: &[Message], _tools: &[Value]) -> AssistantResponse {
        self.call_history.lock().unwrap().push(history.to_vec());
        self.pop_response()
    }
}
