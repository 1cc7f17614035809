use std::io::{self, Write};
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod executor;
mod orchestrator;
mod provider;
mod registry;
mod schema;
mod session;
mod tools;
mod types;
mod utils;

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod tests;

use orchestrator::{Orchestrator, OrchestratorOptions};
use registry::ToolRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Tool registration happens once, before any conversation. A
    // duplicate name is a programming defect, so failing here is fine.
    let mut registry = ToolRegistry::new();
    tools::register_all(&mut registry)?;
    let registry = Arc::new(registry);

    let provider = config::provider_from_env()?;
    let mut orchestrator =
        Orchestrator::new(provider, registry, OrchestratorOptions::default());

    println!("\u{001b}[94mSchool-records assistant. Type 'quit' to exit.\u{001b}[0m");

    loop {
        print!("\u{001b}[93mYou:\u{001b}[0m ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" => continue,
            "quit" => break,
            "help" => {
                println!("Ask about students, grades or reports. 'quit' exits.")
            }
            text => {
                let reply = orchestrator.submit(text).await;
                println!("\u{001b}[96mAssistant:\u{001b}[0m {}", reply);
            }
        }
    }
    Ok(())
}
