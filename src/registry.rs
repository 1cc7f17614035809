use std::sync::Arc;

use serde_json::{Map, Value};

use crate::errors::{RegistryError, ToolError};
use crate::schema::ToolDefinition;

/// A registered tool: a plain function taking parsed keyword arguments
/// and returning something convertible to text.
pub type ToolFn = Arc<dyn Fn(&Map<String, Value>) -> Result<String, ToolError> + Send + Sync>;

pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub invoker: ToolFn,
}

/// Holds the tools the model may call. Populated once at startup,
/// read-only afterwards; insertion order is the order schemas are sent
/// to the backend.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Rejects duplicates instead of overwriting; the first
    /// registration wins.
    pub fn register<F>(&mut self, definition: ToolDefinition, invoker: F) -> Result<(), RegistryError>
    where
        F: Fn(&Map<String, Value>) -> Result<String, ToolError> + Send + Sync + 'static,
    {
        if self.lookup(&definition.name).is_some() {
            return Err(RegistryError::DuplicateTool(definition.name.clone()));
        }
        self.tools.push(RegisteredTool {
            definition,
            invoker: Arc::new(invoker),
        });
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }

    /// Schemas for every registered tool, in registration order.
    pub fn schemas(&self) -> Vec<Value> {
        self.tools.iter().map(|t| t.definition.to_schema()).collect()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter().map(|t| &t.definition)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Drops every registration. Re-registering a name within one
    /// process requires going through here first.
    pub fn reset(&mut self) {
        self.tools.clear();
    }
}
