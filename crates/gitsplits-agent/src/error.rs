//! Agent framework errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Lookup of an unregistered tool fails loudly, never silently
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// A tool is registered under the name but has a different concrete type
    #[error("Tool {0} has unexpected type")]
    ToolType(String),
}
