//! Mission resolution — applying a mission's effects to a profile.

use strum::IntoEnumIterator as _;

use crate::{catalog::Mission, profile::Profile, skill::Badge};

/// What a call to [`resolve`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionOutcome {
  /// The user backed out; the profile was not touched.
  Declined,
  Completed {
    /// `false` when the mission was already in `completed`. Its effects
    /// were applied again regardless.
    first_completion: bool,
    /// Badges unlocked by this attempt, in unlock order.
    new_badges:       Vec<Badge>,
  },
}

impl MissionOutcome {
  pub fn is_completed(&self) -> bool { matches!(self, Self::Completed { .. }) }
}

/// Apply `mission` to `profile` if the user confirmed the attempt.
///
/// The free-text `response` is not graded. Replaying a mission re-awards its
/// skill deltas but never records its id twice.
pub fn resolve(
  profile: &mut Profile,
  mission: &Mission,
  confirmed: bool,
  response: &str,
) -> MissionOutcome {
  if !confirmed {
    tracing::debug!(mission = %mission.id, "mission declined");
    return MissionOutcome::Declined;
  }

  tracing::debug!(mission = %mission.id, response_len = response.len(), "mission attempted");

  for (skill, delta) in &mission.effects {
    profile.skills.apply(*skill, *delta);
  }

  let first_completion = !profile.has_completed(&mission.id);
  if first_completion {
    profile.completed.push(mission.id.clone());
  }

  let new_badges = award_badges(profile);

  MissionOutcome::Completed { first_completion, new_badges }
}

/// Grant every badge whose threshold is met and that is not yet held.
/// Badges are never revoked.
pub fn award_badges(profile: &mut Profile) -> Vec<Badge> {
  let mut granted = Vec::new();
  for badge in Badge::iter() {
    if badge.is_earned_by(&profile.skills) && !profile.has_badge(badge) {
      profile.badges.push(badge);
      granted.push(badge);
    }
  }
  granted
}
