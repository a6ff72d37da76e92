//! Payout eligibility gate

use crate::profile::{profile_for, ReputationProfile};
use serde::{Deserialize, Serialize};

/// Reputation thresholds
#[derive(Debug, Clone)]
pub struct ReputationConfig {
    /// Minimum score a profile must meet to receive a payout
    pub min_payout_score: f64,
}

impl ReputationConfig {
    pub fn new() -> Self {
        Self {
            min_payout_score: 50.0,
        }
    }

    /// Build from `REPUTATION_MIN_PAYOUT_SCORE`; unparsable values fall
    /// back to the default threshold.
    pub fn from_env() -> Self {
        let min_payout_score = std::env::var("REPUTATION_MIN_PAYOUT_SCORE")
            .ok()
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(50.0);
        Self { min_payout_score }
    }
}

impl Default for ReputationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the payout eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutEligibility {
    pub eligible: bool,
    pub profile: ReputationProfile,
    pub reasons: Vec<String>,
}

/// A contributor may receive a payout only with a linked wallet AND a
/// profile score at or above the configured minimum. Both failure reasons
/// can co-occur.
pub fn evaluate_payout_eligibility(
    github_username: &str,
    wallet_address: Option<&str>,
    config: &ReputationConfig,
) -> PayoutEligibility {
    let profile = profile_for(github_username);
    let has_wallet = wallet_address.is_some_and(|w| !w.trim().is_empty());

    let mut reasons = Vec::new();
    if !has_wallet {
        reasons.push("Missing verified payout wallet.".to_string());
    }
    if profile.score < config.min_payout_score {
        reasons.push(format!(
            "Reputation score {} below threshold {}.",
            profile.score, config.min_payout_score
        ));
    }

    let eligible = reasons.is_empty();
    if !eligible {
        tracing::debug!(username = github_username, ?reasons, "payout blocked");
    }

    PayoutEligibility {
        eligible,
        profile,
        reasons,
    }
}
