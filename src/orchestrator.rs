use std::sync::Arc;

use tokio::time::{Duration, timeout};
use tracing::{debug, info, warn};

use crate::executor::ToolExecutor;
use crate::provider::ProviderAdapter;
use crate::registry::ToolRegistry;
use crate::session::Session;
use crate::types::{AssistantResponse, FunctionCall, Message, ToolCall, ToolCallRequest};
use crate::utils::clip;

pub const NOT_CONFIGURED: &str =
    "No language-model backend is configured. Set an API key and restart.";

#[derive(Clone)]
pub struct OrchestratorOptions {
    /// How many times one user turn may loop back through tool calls
    /// before we give up on the backend converging.
    pub max_tool_rounds: usize,
    /// Sole cancellation point: applied around the provider round trip
    /// and nowhere else.
    pub request_timeout: Duration,
    /// Chars of tool output kept per observation message.
    pub observation_clip: usize,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            max_tool_rounds: 5,
            request_timeout: Duration::from_secs(90),
            observation_clip: 4000,
        }
    }
}

/// Owns the conversation. One instance, one session: history is
/// created here and dies with the process.
pub struct Orchestrator {
    provider: Option<Box<dyn ProviderAdapter>>,
    registry: Arc<ToolRegistry>,
    executor: ToolExecutor,
    session: Session,
    opts: OrchestratorOptions,
}

impl Orchestrator {
    pub fn new(
        provider: Option<Box<dyn ProviderAdapter>>,
        registry: Arc<ToolRegistry>,
        opts: OrchestratorOptions,
    ) -> Self {
        let executor = ToolExecutor::new(registry.clone());
        let mut session = Session::new();
        session.add_message(Message::system(
            "You are the assistant built into a school-records manager. \
             Use the provided tools to answer questions about students, \
             grades and reports. Answer directly when no tool applies.",
        ));
        Self {
            provider,
            registry,
            executor,
            session,
            opts,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.session.messages
    }

    /// The one entry point the UI consumes. Appends the user message,
    /// drives the request/tool loop, and returns the assistant's final
    /// content. Never fails: every fault surfaces as content.
    pub async fn submit(&mut self, user_text: &str) -> String {
        self.session.add_message(Message::user(user_text));

        let Some(provider) = &self.provider else {
            return NOT_CONFIGURED.to_string();
        };

        let schemas = self.registry.schemas();

        for round in 0..=self.opts.max_tool_rounds {
            debug!(round, backend = provider.identify(), "requesting completion");
            let response = match timeout(
                self.opts.request_timeout,
                provider.complete(&self.session.messages, &schemas),
            )
            .await
            {
                Ok(resp) => resp,
                Err(_) => AssistantResponse::text(format!(
                    "[{}] request timed out after {:?}",
                    provider.identify(),
                    self.opts.request_timeout
                )),
            };

            if !response.has_tool_calls() {
                self.session.add_message(Message::assistant(&response.content));
                return response.content;
            }

            let calls = response.tool_calls.clone().unwrap_or_default();
            info!(count = calls.len(), round, "model requested tool calls");
            self.session
                .add_message(assistant_message_with_calls(&response.content, &calls));

            // One tool message per request, in the model's call order.
            for call in &calls {
                let result = self.executor.execute(call);
                let mut msg = result.into_message();
                if let Some(c) = &msg.content {
                    msg.content = Some(clip(c, self.opts.observation_clip));
                }
                self.session.add_message(msg);
            }
        }

        warn!(cap = self.opts.max_tool_rounds, "tool loop exceeded its round cap");
        let diagnostic = format!(
            "Stopped after {} tool rounds without a final answer.",
            self.opts.max_tool_rounds
        );
        self.session.add_message(Message::assistant(&diagnostic));
        diagnostic
    }
}

/// History form of an assistant turn that asked for tools: the calls
/// are preserved verbatim so the follow-up request replays them to the
/// backend exactly as issued.
fn assistant_message_with_calls(content: &str, calls: &[ToolCallRequest]) -> Message {
    let tool_calls = calls
        .iter()
        .map(|c| ToolCall {
            id: c.id.clone(),
            call_type: "function".to_string(),
            function: FunctionCall {
                name: c.name.clone(),
                arguments: c.raw_arguments.clone(),
            },
        })
        .collect();

    Message {
        role: "assistant".to_string(),
        content: if content.is_empty() {
            None
        } else {
            Some(content.to_string())
        },
        name: None,
        tool_calls: Some(tool_calls),
        tool_call_id: None,
    }
}
