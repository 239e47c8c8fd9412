//! Skills and badges — the numeric side of a profile.
//!
//! The skill set is closed: every profile carries a tally for each of the
//! four skills, and the tallies never go below zero.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator as _};

// ─── Skill ───────────────────────────────────────────────────────────────────

/// One of the four fixed skill counters.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Skill {
  Creativity,
  Communication,
  Analysis,
  Empathy,
}

// ─── Skills ──────────────────────────────────────────────────────────────────

/// The skill tally of a profile.
///
/// Stored as one field per skill so a persisted profile that is missing a key
/// (or carries an unknown one) fails to deserialise instead of loading with a
/// hole in it.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct Skills {
  pub creativity:    u32,
  pub communication: u32,
  pub analysis:      u32,
  pub empathy:       u32,
}

impl Skills {
  pub fn get(&self, skill: Skill) -> u32 {
    match skill {
      Skill::Creativity => self.creativity,
      Skill::Communication => self.communication,
      Skill::Analysis => self.analysis,
      Skill::Empathy => self.empathy,
    }
  }

  fn slot(&mut self, skill: Skill) -> &mut u32 {
    match skill {
      Skill::Creativity => &mut self.creativity,
      Skill::Communication => &mut self.communication,
      Skill::Analysis => &mut self.analysis,
      Skill::Empathy => &mut self.empathy,
    }
  }

  /// Add `delta` to a tally. Negative deltas clamp at zero.
  pub fn apply(&mut self, skill: Skill, delta: i32) {
    let slot = self.slot(skill);
    *slot = if delta >= 0 {
      slot.saturating_add(delta.unsigned_abs())
    } else {
      slot.saturating_sub(delta.unsigned_abs())
    };
  }

  /// All tallies in canonical skill order.
  pub fn iter(&self) -> impl Iterator<Item = (Skill, u32)> + '_ {
    Skill::iter().map(|s| (s, self.get(s)))
  }
}

// ─── Badge ───────────────────────────────────────────────────────────────────

/// A one-time achievement unlocked by crossing a skill threshold.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
  EnumIter,
)]
pub enum Badge {
  Creative,
  Analytical,
  Caring,
}

impl Badge {
  /// Tally at which a badge unlocks.
  pub const THRESHOLD: u32 = 3;

  /// The skill whose tally unlocks this badge.
  pub fn skill(self) -> Skill {
    match self {
      Self::Creative => Skill::Creativity,
      Self::Analytical => Skill::Analysis,
      Self::Caring => Skill::Empathy,
    }
  }

  pub fn is_earned_by(self, skills: &Skills) -> bool {
    skills.get(self.skill()) >= Self::THRESHOLD
  }
}
