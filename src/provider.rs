use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::time::Duration;
use tracing::{debug, warn};

use crate::types::{AssistantResponse, Message, ToolCallRequest};

/// One backend vendor. Every adapter speaks the same contract: full
/// history plus tool schemas in, a normalized AssistantResponse out.
/// Failures never cross this boundary; they come back as diagnostic
/// content.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn identify(&self) -> &str;

    async fn complete(&self, history: &[Message], tools: &[Value]) -> AssistantResponse;
}

/// Shared client for OpenAI-compatible chat-completion endpoints. The
/// concrete adapters differ only in base URL, credential, default
/// model, and whether the backend understands function calling.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    backend: String,
    base_url: String,
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl ChatCompletionsClient {
    pub fn new(backend: &str, base_url: String, api_key: String, model: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(8)
            .tcp_keepalive(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            backend: backend.to_string(),
            base_url,
            api_key,
            model,
            http,
        })
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// One chat-completion round trip. `tools` may be empty, in which
    /// case neither `tools` nor `tool_choice` is sent.
    pub async fn chat_once(&self, history: &[Message], tools: &[Value]) -> AssistantResponse {
        match self.try_chat_once(history, tools).await {
            Ok(resp) => resp,
            Err(e) => classify_failure(&self.backend, &self.base_url, &e),
        }
    }

    async fn try_chat_once(
        &self,
        history: &[Message],
        tools: &[Value],
    ) -> anyhow::Result<AssistantResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        let req = build_request(&self.model, history, tools);

        debug!(backend = %self.backend, tools = tools.len(), "requesting completion");
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await?;

        let body: Value = resp.json().await?;
        if let Some(error) = body.get("error") {
            anyhow::bail!("backend reported an error: {}", error);
        }

        Ok(normalize_response(&body))
    }
}

/// Request payload shared by every OpenAI-compatible backend. With an
/// empty tool list the backend is asked a plain question; otherwise it
/// decides for itself whether to call a tool.
pub fn build_request(model: &str, history: &[Message], tools: &[Value]) -> Value {
    let mut req = json!({
        "model": model,
        "messages": history,
        "stream": false,
    });
    if !tools.is_empty() {
        req["tools"] = Value::Array(tools.to_vec());
        req["tool_choice"] = Value::String("auto".to_string());
    }
    req
}

/// Collapses a vendor response body into the one shape the rest of the
/// runtime understands. Missing content becomes an empty string.
pub fn normalize_response(body: &Value) -> AssistantResponse {
    let message = &body["choices"][0]["message"];
    let content = message["content"].as_str().unwrap_or("").to_string();
    let tool_calls = message["tool_calls"].as_array().map(|calls| {
        calls.iter().map(normalize_tool_call).collect::<Vec<_>>()
    });

    AssistantResponse { content, tool_calls }
}

/// Vendors ship tool calls with the name/arguments either nested under
/// a `function` object or flat on the call itself, and arguments as
/// either a JSON-encoded string or an inline object. All four
/// combinations normalize to the same ToolCallRequest.
fn normalize_tool_call(call: &Value) -> ToolCallRequest {
    let body = call.get("function").unwrap_or(call);

    let raw_arguments = match &body["arguments"] {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };

    ToolCallRequest {
        id: call["id"].as_str().unwrap_or("").to_string(),
        name: body["name"].as_str().unwrap_or("").to_string(),
        raw_arguments,
    }
}

/// Turns a transport or backend fault into diagnostic assistant
/// content naming the backend and where it lives. The conversation
/// keeps going either way.
pub fn classify_failure(backend: &str, base_url: &str, error: &anyhow::Error) -> AssistantResponse {
    let diagnostic = match error.downcast_ref::<reqwest::Error>() {
        Some(e) if e.is_connect() => {
            format!("[{}] backend unreachable at {}: {}", backend, base_url, e)
        }
        Some(e) if e.is_timeout() => {
            format!("[{}] request to {} timed out: {}", backend, base_url, e)
        }
        _ => format!("[{}] request to {} failed: {}", backend, base_url, error),
    };
    warn!(backend = %backend, "{}", diagnostic);
    AssistantResponse::text(diagnostic)
}

/// OpenAI proper.
pub struct OpenAiAdapter {
    client: ChatCompletionsClient,
}

impl OpenAiAdapter {
    pub fn new(base_url: String, api_key: String, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: ChatCompletionsClient::new("openai", base_url, api_key, model)?,
        })
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn identify(&self) -> &str {
        self.client.backend()
    }

    async fn complete(&self, history: &[Message], tools: &[Value]) -> AssistantResponse {
        self.client.chat_once(history, tools).await
    }
}

/// DeepSeek: same wire shape as OpenAI, different host, credential and
/// default model.
pub struct DeepSeekAdapter {
    client: ChatCompletionsClient,
}

impl DeepSeekAdapter {
    pub fn new(base_url: String, api_key: String, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: ChatCompletionsClient::new("deepseek", base_url, api_key, model)?,
        })
    }
}

#[async_trait]
impl ProviderAdapter for DeepSeekAdapter {
    fn identify(&self) -> &str {
        self.client.backend()
    }

    async fn complete(&self, history: &[Message], tools: &[Value]) -> AssistantResponse {
        self.client.chat_once(history, tools).await
    }
}

/// Local llama.cpp-style server. The endpoint is OpenAI-compatible but
/// has no function calling, so schemas are withheld from the request
/// even when the registry has tools.
pub struct LocalAdapter {
    client: ChatCompletionsClient,
}

impl LocalAdapter {
    pub fn new(base_url: String, model: String) -> anyhow::Result<Self> {
        Ok(Self {
            client: ChatCompletionsClient::new("local", base_url, String::new(), model)?,
        })
    }
}

#[async_trait]
impl ProviderAdapter for LocalAdapter {
    fn identify(&self) -> &str {
        self.client.backend()
    }

    async fn complete(&self, history: &[Message], _tools: &[Value]) -> AssistantResponse {
        self.client.chat_once(history, &[]).await
    }
}
