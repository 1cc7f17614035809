use serde_json::{Map, Value, json};

/// JSON schema type of a single tool parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Number,
    Boolean,
}

impl ParamType {
    /// Maps a declared type name onto a schema type. Anything we do
    /// not recognize degrades to string rather than erroring.
    pub fn from_declared(declared: &str) -> Self {
        match declared {
            "str" | "string" | "text" => ParamType::String,
            "int" | "integer" => ParamType::Integer,
            "float" | "number" => ParamType::Number,
            "bool" | "boolean" => ParamType::Boolean,
            _ => ParamType::String,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
}

/// Immutable call schema for one tool, built once at registration.
#[derive(Clone, Debug)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParamSpec>,
}

impl ToolDefinition {
    pub fn builder(name: &str) -> ToolDefinitionBuilder {
        ToolDefinitionBuilder {
            name: name.to_string(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    /// Wire shape the chat-completions endpoints expect:
    /// {type:"function", function:{name, description, parameters}}.
    pub fn to_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();
        for p in &self.parameters {
            properties.insert(
                p.name.clone(),
                json!({
                    "type": p.param_type.as_str(),
                    "description": p.description,
                }),
            );
            if p.required {
                required.push(Value::String(p.name.clone()));
            }
        }

        json!({
            "type": "function",
            "function": {
                "name": self.name,
                "description": self.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }
}

pub struct ToolDefinitionBuilder {
    name: String,
    description: String,
    parameters: Vec<ParamSpec>,
}

impl ToolDefinitionBuilder {
    /// Takes the tool's full documentation text; only the first line,
    /// trimmed, ends up in the schema. No documentation is fine.
    pub fn description(mut self, doc: &str) -> Self {
        self.description = doc.lines().next().unwrap_or("").trim().to_string();
        self
    }

    /// Required parameter (no default value on the tool side).
    pub fn param(self, name: &str, declared_type: &str, description: &str) -> Self {
        self.push(name, declared_type, description, true)
    }

    /// Optional parameter (the tool supplies a default when absent).
    pub fn optional_param(self, name: &str, declared_type: &str, description: &str) -> Self {
        self.push(name, declared_type, description, false)
    }

    fn push(mut self, name: &str, declared_type: &str, description: &str, required: bool) -> Self {
        self.parameters.push(ParamSpec {
            name: name.to_string(),
            param_type: ParamType::from_declared(declared_type),
            description: description.to_string(),
            required,
        });
        self
    }

    pub fn build(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name,
            description: self.description,
            parameters: self.parameters,
        }
    }
}
