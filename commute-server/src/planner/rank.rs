//! Route ranking.
//!
//! Ranks route candidates by their first leg so the most useful option
//! comes first. Only the first leg participates; later legs of a
//! multi-leg candidate are ignored.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::RouteCandidate;

use super::error::PlanError;

/// The first-leg attributes a candidate is ranked by.
///
/// Field order is the ranking priority:
/// 1. Duration (shorter is better)
/// 2. Number of steps (fewer is better)
/// 3. Arrival time (earlier is better)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    pub duration_secs: u64,
    pub step_count: usize,
    pub arrival: DateTime<Utc>,
}

impl RankKey {
    /// Extract the ranking key from a candidate's first leg.
    pub fn of(candidate: &RouteCandidate) -> Result<Self, PlanError> {
        let leg = candidate
            .first_leg()
            .ok_or_else(|| PlanError::Validation("route has no legs".to_string()))?;

        let duration_secs = leg
            .duration_secs()
            .ok_or_else(|| PlanError::Validation("first leg has no duration".to_string()))?;
        let step_count = leg
            .step_count()
            .ok_or_else(|| PlanError::Validation("first leg has no steps".to_string()))?;
        let arrival = leg
            .arrival()
            .ok_or_else(|| PlanError::Validation("first leg has no arrival time".to_string()))?;

        Ok(Self {
            duration_secs,
            step_count,
            arrival,
        })
    }
}

/// Compare two candidates.
///
/// `Less` means `a` ranks ahead of `b`, `Greater` means `b` ranks ahead,
/// `Equal` means neither is preferred. Both candidates are validated
/// before anything is compared.
pub fn compare_routes(a: &RouteCandidate, b: &RouteCandidate) -> Result<Ordering, PlanError> {
    let a = RankKey::of(a)?;
    let b = RankKey::of(b)?;
    Ok(a.cmp(&b))
}

/// Select the best candidate.
///
/// Every candidate is validated first. Among equally-ranked candidates the
/// one appearing earliest wins, so the result depends only on the
/// candidates and their first-occurrence order.
pub fn select_best(mut candidates: Vec<RouteCandidate>) -> Result<RouteCandidate, PlanError> {
    if candidates.is_empty() {
        return Err(PlanError::EmptyCandidateSet);
    }

    let keys = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            RankKey::of(c).map_err(|e| match e {
                PlanError::Validation(msg) => PlanError::Validation(format!("candidate {i}: {msg}")),
                other => other,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Only a strictly better key displaces the current pick.
    let mut best = 0;
    for (i, key) in keys.iter().enumerate().skip(1) {
        if key < &keys[best] {
            best = i;
        }
    }

    Ok(candidates.swap_remove(best))
}
