use gitsplits_agent::{assist_intent, format_assisted_suggestion};

pub fn run(text: &str) -> anyhow::Result<()> {
    match assist_intent(text) {
        Some(assisted) => {
            tracing::info!(intent = %assisted.intent_name, "intent inferred");
            println!("{}", serde_json::to_string_pretty(&assisted)?);
            eprintln!("{}", format_assisted_suggestion(&assisted));
        }
        None => {
            // "No intent" is a valid outcome, not an error
            println!("null");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assist_with_match() {
        assert!(run("analyze near/near-sdk-rs").is_ok());
    }

    #[test]
    fn test_assist_without_match() {
        assert!(run("good morning").is_ok());
    }
}
