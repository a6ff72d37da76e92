//! Agent: intent registration, matching, and execution

use crate::intent::{Context, Intent, IntentResult, Params};
use crate::tools::{Tool, ToolRegistry};

/// A matched intent with its extracted parameters and match metadata
pub struct IntentMatch<'a> {
    pub intent: &'a dyn Intent,
    pub params: Params,
    pub confidence: f64,
    pub matched_text: String,
}

/// Parses free-form command text into registered intents and dispatches
/// them against the tool registry.
///
/// Register all intents and tools before serving requests; the agent is
/// read-only afterwards.
#[derive(Default)]
pub struct Agent {
    intents: Vec<Box<dyn Intent>>,
    tools: ToolRegistry,
}

impl Agent {
    pub fn new() -> Self {
        Self {
            intents: Vec::new(),
            tools: ToolRegistry::new(),
        }
    }

    pub fn register_intent(&mut self, intent: Box<dyn Intent>) {
        self.intents.push(intent);
    }

    pub fn register_tool(&mut self, tool: Box<dyn Tool>) {
        self.tools.register(tool);
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn intent_by_name(&self, name: &str) -> Option<&dyn Intent> {
        self.intents
            .iter()
            .find(|i| i.name() == name)
            .map(|i| i.as_ref())
    }

    /// First-match-wins intent lookup across registration order.
    ///
    /// Confidence grows with how much of the input the pattern covered and
    /// gets a bonus when the text starts with the intent's own name.
    pub fn parse_intent_detailed(&self, text: &str) -> Option<IntentMatch<'_>> {
        let normalized = text.trim();
        if normalized.is_empty() {
            return None;
        }

        for intent in &self.intents {
            for pattern in intent.patterns() {
                if let Some(captures) = pattern.captures(normalized) {
                    let matched_text = captures.get(0).map(|m| m.as_str()).unwrap_or("");
                    let params = intent.extract_params(&captures);

                    let length_score =
                        matched_text.chars().count() as f64 / normalized.chars().count() as f64;
                    let prefix_score = if normalized
                        .to_lowercase()
                        .starts_with(&intent.name().to_lowercase())
                    {
                        0.2
                    } else {
                        0.0
                    };
                    let confidence = (0.4 + 0.6 * length_score + prefix_score).clamp(0.0, 1.0);

                    tracing::debug!(
                        intent = intent.name(),
                        confidence,
                        "intent matched"
                    );

                    return Some(IntentMatch {
                        intent: intent.as_ref(),
                        params,
                        confidence,
                        matched_text: matched_text.to_string(),
                    });
                }
            }
        }
        None
    }

    /// No-metadata variant of [`Agent::parse_intent_detailed`]
    pub fn parse_intent(&self, text: &str) -> Option<(&dyn Intent, Params)> {
        self.parse_intent_detailed(text)
            .map(|m| (m.intent, m.params))
    }

    /// Validate and run a matched intent.
    ///
    /// Validation failures are recovered locally as a `❌`-prefixed
    /// response without invoking the intent; execution errors propagate.
    pub fn execute(
        &self,
        intent: &dyn Intent,
        params: &Params,
        context: &mut Context,
    ) -> anyhow::Result<IntentResult> {
        if let Err(error) = intent.validate(params) {
            return Ok(IntentResult::new(format!("❌ {error}")));
        }

        intent.execute(params, context, &self.tools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::{Captures, Regex};

    struct EchoIntent {
        name: String,
        patterns: Vec<Regex>,
        reject: bool,
    }

    impl EchoIntent {
        fn new(name: &str, pattern: &str) -> Self {
            Self {
                name: name.to_string(),
                patterns: vec![Regex::new(pattern).unwrap()],
                reject: false,
            }
        }
    }

    impl Intent for EchoIntent {
        fn name(&self) -> &str {
            &self.name
        }

        fn patterns(&self) -> &[Regex] {
            &self.patterns
        }

        fn extract_params(&self, captures: &Captures) -> Params {
            let mut params = Params::new();
            if let Some(arg) = captures.get(1) {
                params.insert("arg".to_string(), serde_json::json!(arg.as_str()));
            }
            params
        }

        fn validate(&self, _params: &Params) -> Result<(), String> {
            if self.reject {
                Err("Rejected by validator".to_string())
            } else {
                Ok(())
            }
        }

        fn execute(
            &self,
            params: &Params,
            _context: &mut Context,
            _tools: &ToolRegistry,
        ) -> anyhow::Result<IntentResult> {
            Ok(IntentResult::new(format!(
                "{}:{}",
                self.name,
                crate::intent::param_str(params, "arg").unwrap_or("")
            )))
        }
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("echo", r"(?i)echo\s+(.+)")));
        assert!(agent.parse_intent_detailed("   ").is_none());
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("first", r"(?i)run\s+(.+)")));
        agent.register_intent(Box::new(EchoIntent::new("second", r"(?i)run\s+(.+)")));

        let matched = agent.parse_intent_detailed("run the thing").unwrap();
        assert_eq!(matched.intent.name(), "first");
    }

    #[test]
    fn test_confidence_full_coverage_with_prefix() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("echo", r"(?i)echo\s+(.+)")));

        let matched = agent.parse_intent_detailed("echo hello").unwrap();
        // Full coverage (0.6) + base (0.4) + prefix bonus (0.2), clamped to 1.0
        assert_eq!(matched.confidence, 1.0);
        assert_eq!(matched.matched_text, "echo hello");
    }

    #[test]
    fn test_confidence_partial_coverage() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("grab", r"grab")));

        // "grab" covers 4 of 20 chars, no prefix bonus for mismatched start
        let matched = agent.parse_intent_detailed("please grab that now").unwrap();
        assert!((matched.confidence - (0.4 + 0.6 * (4.0 / 20.0))).abs() < 1e-9);
    }

    #[test]
    fn test_validation_failure_returns_error_response() {
        let mut agent = Agent::new();
        let mut intent = EchoIntent::new("echo", r"(?i)echo\s+(.+)");
        intent.reject = true;
        agent.register_intent(Box::new(intent));

        let (matched, params) = agent.parse_intent("echo hi").unwrap();
        let mut context = Context::new();
        let result = agent.execute(matched, &params, &mut context).unwrap();
        assert_eq!(result.response, "❌ Rejected by validator");
    }

    #[test]
    fn test_execute_dispatches() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("echo", r"(?i)echo\s+(.+)")));

        let (matched, params) = agent.parse_intent("echo hi there").unwrap();
        let mut context = Context::new();
        let result = agent.execute(matched, &params, &mut context).unwrap();
        assert_eq!(result.response, "echo:hi there");
    }

    #[test]
    fn test_intent_by_name() {
        let mut agent = Agent::new();
        agent.register_intent(Box::new(EchoIntent::new("echo", r"(?i)echo\s+(.+)")));
        assert!(agent.intent_by_name("echo").is_some());
        assert!(agent.intent_by_name("missing").is_none());
    }
}
