//! Username-pattern reputation profiles

use serde::{Deserialize, Serialize};

/// What kind of account a username looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Human,
    /// Autonomous-agent naming conventions (`[bot]` marker, `agent` suffix)
    Agent,
    /// Plain CI/automation accounts (`-bot` suffix)
    Bot,
}

impl SubjectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKind::Human => "human",
            SubjectKind::Agent => "agent",
            SubjectKind::Bot => "bot",
        }
    }
}

/// Reputation tier derived from score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationTier {
    Bronze,
    Silver,
    Gold,
}

impl ReputationTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ReputationTier::Gold
        } else if score >= 55.0 {
            ReputationTier::Silver
        } else {
            ReputationTier::Bronze
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReputationTier::Bronze => "bronze",
            ReputationTier::Silver => "silver",
            ReputationTier::Gold => "gold",
        }
    }
}

/// Reputation profile for one GitHub username
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationProfile {
    pub username: String,
    pub kind: SubjectKind,
    pub score: f64,
    pub tier: ReputationTier,
}

fn infer_kind(username: &str) -> SubjectKind {
    let normalized = username.to_lowercase();
    if normalized.contains("[bot]") || normalized.contains("agent") {
        SubjectKind::Agent
    } else if normalized.ends_with("-bot") || normalized == "bot" {
        SubjectKind::Bot
    } else {
        SubjectKind::Human
    }
}

/// Classify a username into a reputation profile.
///
/// Pure function of the username string; agents are flagged but get a
/// nonzero baseline score rather than being excluded outright.
pub fn profile_for(username: &str) -> ReputationProfile {
    let kind = infer_kind(username);
    let score = match kind {
        SubjectKind::Human => 70.0,
        SubjectKind::Agent => 60.0,
        SubjectKind::Bot => 40.0,
    };

    ReputationProfile {
        username: username.to_string(),
        kind,
        score,
        tier: ReputationTier::from_score(score),
    }
}
