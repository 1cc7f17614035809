use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("tool '{0}' is already registered")]
    DuplicateTool(String),
}

/// Ways a tool invocation can fail once the registry lookup and the
/// argument JSON parse have already succeeded.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0}")]
    InvalidArguments(String),

    #[error("{0}")]
    Runtime(String),
}

impl ToolError {
    /// A required argument was missing or had the wrong type.
    pub fn invalid<S: Into<String>>(detail: S) -> Self {
        ToolError::InvalidArguments(detail.into())
    }

    /// The tool itself failed after accepting its arguments.
    pub fn runtime<S: Into<String>>(detail: S) -> Self {
        ToolError::Runtime(detail.into())
    }
}
