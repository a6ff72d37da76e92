//! Contributor quality signals
//!
//! Raw signals arrive from an upstream analysis collaborator (an AI
//! critique pass in production) as loosely-validated JSON. Sanitization
//! clamps scores and degrades unknown credit actions before the allocation
//! builder consumes them.

use crate::profile::{profile_for, SubjectKind};
use gitsplits_core::{CreditAction, QualityDecision};
use serde::Deserialize;

/// Unvalidated per-contributor quality signal from the upstream payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQualitySignal {
    pub username: String,
    pub quality: f64,
    #[serde(default)]
    pub commit_confidence: Option<f64>,
    #[serde(default)]
    pub credit_action: Option<String>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn parse_credit_action(value: Option<&str>) -> CreditAction {
    match value {
        Some("full_credit") => CreditAction::FullCredit,
        Some("partial_credit") => CreditAction::PartialCredit,
        Some("no_credit") => CreditAction::NoCredit,
        // Unknown actions (e.g. "flag_for_review") degrade to partial credit
        _ => CreditAction::PartialCredit,
    }
}

/// Validate raw quality signals into decisions.
///
/// Quality and commit-confidence are clamped to [0, 1]; a missing
/// commit-confidence defaults to the quality score. Entries without a
/// username are dropped.
pub fn sanitize_quality_signals(signals: &[RawQualitySignal]) -> Vec<QualityDecision> {
    signals
        .iter()
        .filter(|s| !s.username.trim().is_empty())
        .map(|signal| {
            let quality = clamp_unit(signal.quality);
            QualityDecision {
                username: signal.username.clone(),
                quality,
                commit_confidence: signal.commit_confidence.map(clamp_unit).unwrap_or(quality),
                credit_action: parse_credit_action(signal.credit_action.as_deref()),
                reasons: signal.reasons.clone(),
            }
        })
        .collect()
}

/// Heuristic quality decision when no upstream signal is available.
///
/// Humans pass at full credit; automated accounts are kept but flagged at
/// partial credit so a reviewer can adjust the split before payout.
pub fn evaluate_contributor(username: &str) -> QualityDecision {
    let profile = profile_for(username);
    let (credit_action, reasons) = match profile.kind {
        SubjectKind::Human => (CreditAction::FullCredit, Vec::new()),
        SubjectKind::Agent | SubjectKind::Bot => (
            CreditAction::PartialCredit,
            vec!["Automated account flagged for review.".to_string()],
        ),
    };

    QualityDecision {
        username: username.to_string(),
        quality: profile.score / 100.0,
        commit_confidence: profile.score / 100.0,
        credit_action,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_and_defaults() {
        let signals = vec![RawQualitySignal {
            username: "alice".to_string(),
            quality: 1.4,
            commit_confidence: None,
            credit_action: Some("full_credit".to_string()),
            reasons: vec!["Consistent, substantial commits".to_string()],
        }];

        let decisions = sanitize_quality_signals(&signals);
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].quality, 1.0);
        assert_eq!(decisions[0].commit_confidence, 1.0);
        assert_eq!(decisions[0].credit_action, CreditAction::FullCredit);
    }

    #[test]
    fn test_unknown_credit_action_degrades() {
        let signals = vec![RawQualitySignal {
            username: "bob".to_string(),
            quality: 0.5,
            commit_confidence: Some(0.4),
            credit_action: Some("flag_for_review".to_string()),
            reasons: Vec::new(),
        }];

        let decisions = sanitize_quality_signals(&signals);
        assert_eq!(decisions[0].credit_action, CreditAction::PartialCredit);
        assert_eq!(decisions[0].commit_confidence, 0.4);
    }

    #[test]
    fn test_blank_usernames_dropped() {
        let signals = vec![RawQualitySignal {
            username: "  ".to_string(),
            quality: 0.9,
            commit_confidence: None,
            credit_action: None,
            reasons: Vec::new(),
        }];

        assert!(sanitize_quality_signals(&signals).is_empty());
    }

    #[test]
    fn test_signal_payload_deserializes_camel_case() {
        let json = r#"[{"username":"alice","quality":0.9,"commitConfidence":0.85,"creditAction":"full_credit","reasons":["Consistent, substantial commits"]}]"#;
        let signals: Vec<RawQualitySignal> = serde_json::from_str(json).unwrap();
        let decisions = sanitize_quality_signals(&signals);
        assert_eq!(decisions[0].commit_confidence, 0.85);
    }

    #[test]
    fn test_heuristic_human_full_credit() {
        let decision = evaluate_contributor("thisyearnofear");
        assert_eq!(decision.credit_action, CreditAction::FullCredit);
        assert_eq!(decision.quality, 0.7);
    }

    #[test]
    fn test_heuristic_flags_automation() {
        let decision = evaluate_contributor("lovable-dev[bot]");
        assert_eq!(decision.credit_action, CreditAction::PartialCredit);
        assert!(decision.reasons[0].contains("Automated"));
    }
}
