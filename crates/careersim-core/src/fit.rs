//! Fit scorer.
//!
//! `fit = min(100, round(Σ skill × weight × 10))` with weights held as whole
//! percentages, which turns the formula into `(Σ skill × pct + 5) / 10` in
//! integer arithmetic: exact, and ties round half up.

use crate::{
  catalog::{Catalog, Weights},
  profile::Profile,
  skill::Skills,
};

pub const MAX_FIT: u8 = 100;

/// Readiness percentage of `profile` for its selected family.
///
/// A profile without a family, or with a family that has no weight table,
/// is scored with the catalog's fallback weights.
pub fn compute_fit(profile: &Profile, catalog: &Catalog) -> u8 {
  let weights = match profile.family.as_deref() {
    Some(family) => catalog.weights(family),
    None => catalog.fallback_weights(),
  };
  score(&profile.skills, weights)
}

/// Weighted score of `skills`, clamped to `0..=100`.
pub fn score(skills: &Skills, weights: &Weights) -> u8 {
  let weighted: u64 = weights
    .iter()
    .map(|(skill, pct)| u64::from(skills.get(skill)) * u64::from(pct))
    .sum();
  let rounded = (weighted + 5) / 10;
  rounded.min(u64::from(MAX_FIT)) as u8
}
