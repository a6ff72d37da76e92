//! Allocation builder: merges raw commit-count percentages with per-contributor
//! quality decisions into a final normalized payout list.

use gitsplits_core::{AllocationEntry, ContributorRaw, CreditAction, QualityDecision};
use std::collections::HashMap;

/// Index decisions by lowercased username.
///
/// Later entries for the same lowercased key overwrite earlier ones; reasons
/// are not merged.
pub fn build_quality_decision_map(
    decisions: &[QualityDecision],
) -> HashMap<String, QualityDecision> {
    let mut map = HashMap::new();
    for decision in decisions {
        map.insert(decision.username.to_lowercase(), decision.clone());
    }
    map
}

/// Build the final contributor allocation from raw percentages and quality
/// decisions.
///
/// Contributors flagged `no_credit` are excluded and their share is
/// redistributed over the retained set. When every retained contributor has
/// a decision, redistribution is weighted by quality score; otherwise the
/// retained contributors' raw percentages are renormalized to 100. If
/// exclusion would empty the output entirely, it is suppressed and the raw
/// list passes through unchanged: paying unverified contributors their raw
/// share beats an empty payout.
///
/// Output preserves the raw list's ordering and original username casing.
pub fn build_contributors_with_quality(
    raw_contributors: &[ContributorRaw],
    decisions: &[QualityDecision],
) -> Vec<AllocationEntry> {
    let decision_map = build_quality_decision_map(decisions);

    let retained: Vec<(&ContributorRaw, Option<&QualityDecision>)> = raw_contributors
        .iter()
        .filter_map(|contributor| {
            let decision = decision_map.get(&contributor.username.to_lowercase());
            match decision {
                Some(d) if d.credit_action == CreditAction::NoCredit => {
                    tracing::debug!(
                        username = %contributor.username,
                        "contributor excluded from allocation"
                    );
                    None
                }
                _ => Some((contributor, decision)),
            }
        })
        .collect();

    // Would exclude everyone: don't exclude anyone.
    if retained.is_empty() {
        if !raw_contributors.is_empty() {
            tracing::warn!("all contributors flagged no_credit; keeping raw allocation");
        }
        return raw_contributors
            .iter()
            .map(|c| AllocationEntry {
                github_username: c.username.clone(),
                percentage: c.percentage,
            })
            .collect();
    }

    let all_scored = retained.iter().all(|(_, decision)| decision.is_some());
    let quality_sum: f64 = retained
        .iter()
        .filter_map(|(_, decision)| decision.map(|d| d.quality))
        .sum();

    if all_scored && quality_sum > 0.0 {
        // Quality-weighted redistribution over the retained set
        return retained
            .iter()
            .map(|(contributor, decision)| AllocationEntry {
                github_username: contributor.username.clone(),
                percentage: decision.map(|d| d.quality).unwrap_or(0.0) / quality_sum * 100.0,
            })
            .collect();
    }

    // Renormalize raw percentages over the retained set
    let raw_sum: f64 = retained.iter().map(|(c, _)| c.percentage).sum();
    retained
        .iter()
        .map(|(contributor, _)| AllocationEntry {
            github_username: contributor.username.clone(),
            percentage: if raw_sum > 0.0 {
                contributor.percentage / raw_sum * 100.0
            } else {
                contributor.percentage
            },
        })
        .collect()
}
