use std::env;

use tracing::info;

use crate::provider::{DeepSeekAdapter, LocalAdapter, OpenAiAdapter, ProviderAdapter};

const OPENAI_DEFAULT_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEEPSEEK_DEFAULT_URL: &str = "https://api.deepseek.com/v1";
const DEEPSEEK_DEFAULT_MODEL: &str = "deepseek-chat";
const LOCAL_DEFAULT_URL: &str = "http://localhost:8080/v1";
const LOCAL_DEFAULT_MODEL: &str = "default";

/// Picks the active backend from the environment. `PROVIDER` selects
/// the vendor (default openai); a missing credential yields None and
/// the orchestrator runs unconfigured instead of crashing.
pub fn provider_from_env() -> anyhow::Result<Option<Box<dyn ProviderAdapter>>> {
    let selected = env::var("PROVIDER").unwrap_or_else(|_| "openai".to_string());

    let adapter: Option<Box<dyn ProviderAdapter>> = match selected.as_str() {
        "openai" => match env::var("OPENAI_API_KEY") {
            Ok(key) => {
                let base = env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| OPENAI_DEFAULT_URL.to_string());
                let model = env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| OPENAI_DEFAULT_MODEL.to_string());
                Some(Box::new(OpenAiAdapter::new(base, key, model)?))
            }
            Err(_) => None,
        },
        "deepseek" => match env::var("DEEPSEEK_API_KEY") {
            Ok(key) => {
                let base = env::var("DEEPSEEK_BASE_URL")
                    .unwrap_or_else(|_| DEEPSEEK_DEFAULT_URL.to_string());
                let model = env::var("DEEPSEEK_MODEL")
                    .unwrap_or_else(|_| DEEPSEEK_DEFAULT_MODEL.to_string());
                Some(Box::new(DeepSeekAdapter::new(base, key, model)?))
            }
            Err(_) => None,
        },
        // Local server needs no credential, only an address.
        "local" => {
            let base =
                env::var("LOCAL_BASE_URL").unwrap_or_else(|_| LOCAL_DEFAULT_URL.to_string());
            let model =
                env::var("LOCAL_MODEL").unwrap_or_else(|_| LOCAL_DEFAULT_MODEL.to_string());
            Some(Box::new(LocalAdapter::new(base, model)?))
        }
        other => {
            anyhow::bail!("unknown PROVIDER '{}': expected openai, deepseek or local", other)
        }
    };

    match &adapter {
        Some(a) => info!(backend = a.identify(), "backend configured"),
        None => info!(provider = %selected, "no credential found, running unconfigured"),
    }
    Ok(adapter)
}
