//! Intent trait and dispatch types

use crate::tools::ToolRegistry;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// Parameters extracted from a matched command
pub type Params = HashMap<String, serde_json::Value>;

/// Conversation context threaded through intent executions
pub type Context = HashMap<String, serde_json::Value>;

/// Outcome of one intent execution
#[derive(Debug, Clone, PartialEq)]
pub struct IntentResult {
    /// User-facing response text handed to the messaging collaborator
    pub response: String,
}

impl IntentResult {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// A registered intent: ordered regex patterns plus extraction, optional
/// validation, and execution.
///
/// Patterns are evaluated in declaration order; across intents the first
/// matching pattern in registration order wins.
pub trait Intent: Send + Sync {
    /// Intent name (unique identifier)
    fn name(&self) -> &str;

    /// Ordered trigger patterns
    fn patterns(&self) -> &[Regex];

    /// Extract parameters from the winning match
    fn extract_params(&self, captures: &Captures) -> Params;

    /// Reject malformed parameters before execution
    fn validate(&self, _params: &Params) -> Result<(), String> {
        Ok(())
    }

    /// Run the intent against the registered tools
    fn execute(
        &self,
        params: &Params,
        context: &mut Context,
        tools: &ToolRegistry,
    ) -> anyhow::Result<IntentResult>;
}

/// String parameter accessor
pub fn param_str<'a>(params: &'a Params, key: &str) -> Option<&'a str> {
    params.get(key).and_then(|v| v.as_str())
}

/// Numeric parameter accessor
pub fn param_f64(params: &Params, key: &str) -> Option<f64> {
    params.get(key).and_then(|v| v.as_f64())
}
