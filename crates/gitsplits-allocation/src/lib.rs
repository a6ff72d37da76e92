//! Quality-adjusted contributor payout allocations

mod builder;

pub use builder::{build_contributors_with_quality, build_quality_decision_map};
