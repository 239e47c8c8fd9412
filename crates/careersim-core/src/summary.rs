//! Dashboard read model — everything a display needs, derived from a profile.

use crate::{
  catalog::Catalog,
  fit::compute_fit,
  profile::Profile,
  skill::{Badge, Skill},
};

pub const SUGGESTED_NEXT_STEP: &str =
  "Try 3 different missions in other families to compare fit.";

/// One rendered skill bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
  pub skill:   Skill,
  pub value:   u32,
  /// Fill width, `min(100, value × 10)`.
  pub percent: u8,
}

/// The computed dashboard — never stored, always derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
  /// `"{name} • {family}"`, once onboarded.
  pub user_tag:        Option<String>,
  pub mentor:          String,
  pub skills:          Vec<SkillBar>,
  pub badges:          Vec<Badge>,
  pub fit:             u8,
  pub completed_count: usize,
  pub next_step:       &'static str,
}

impl Summary {
  pub fn of(profile: &Profile, catalog: &Catalog) -> Self {
    let family = profile.family.as_deref().unwrap_or_default();

    let user_tag = match (&profile.user, &profile.family) {
      (Some(user), Some(family)) => Some(format!("{} • {}", user.name, family)),
      _ => None,
    };

    let skills = profile
      .skills
      .iter()
      .map(|(skill, value)| SkillBar { skill, value, percent: bar_percent(value) })
      .collect();

    Self {
      user_tag,
      mentor: catalog.mentor(family).to_owned(),
      skills,
      badges: profile.badges.clone(),
      fit: compute_fit(profile, catalog),
      completed_count: profile.completed.len(),
      next_step: SUGGESTED_NEXT_STEP,
    }
  }
}

fn bar_percent(value: u32) -> u8 { value.saturating_mul(10).min(100) as u8 }
