//! Onboarding — validating the identity form before a profile is promoted.

use serde::Deserialize;

use crate::{Error, Result, catalog::Weights, profile::User};

// ─── Settings ────────────────────────────────────────────────────────────────

pub const DEFAULT_BIRTH_YEAR_CUTOFF: i32 = 2016;

/// Tunable rules of the game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Latest accepted birth year (inclusive).
  pub birth_year_cutoff: i32,
  /// Overrides the catalog's generic scoring weights when set.
  pub fallback_weights:  Option<Weights>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      birth_year_cutoff: DEFAULT_BIRTH_YEAR_CUTOFF,
      fallback_weights:  None,
    }
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Validate the onboarding form.
///
/// `birth_year` is the raw form text. Zero is rejected along with anything
/// that is not an integer. The family check runs last so that a bad name or
/// year is reported first.
pub fn validate(
  name: &str,
  birth_year: &str,
  family: Option<&str>,
  settings: &Settings,
) -> Result<User> {
  let name = name.trim();
  if name.is_empty() {
    return Err(Error::EmptyName);
  }

  let year: i32 = birth_year
    .trim()
    .parse()
    .map_err(|_| Error::InvalidBirthYear(birth_year.to_owned()))?;
  if year == 0 {
    return Err(Error::InvalidBirthYear(birth_year.to_owned()));
  }
  if year > settings.birth_year_cutoff {
    return Err(Error::BirthYearAfterCutoff {
      year,
      cutoff: settings.birth_year_cutoff,
    });
  }

  if family.is_none() {
    return Err(Error::FamilyNotSelected);
  }

  Ok(User { name: name.to_owned(), birth_year: year })
}
