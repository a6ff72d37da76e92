//! Reputation profiles, payout eligibility, and contributor quality signals

mod eligibility;
mod profile;
mod quality;

pub use eligibility::{evaluate_payout_eligibility, PayoutEligibility, ReputationConfig};
pub use profile::{profile_for, ReputationProfile, ReputationTier, SubjectKind};
pub use quality::{evaluate_contributor, sanitize_quality_signals, RawQualitySignal};
