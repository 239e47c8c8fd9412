//! Error types for `careersim-core`.
//!
//! The `Display` text of the validation variants doubles as the transient
//! notice shown to the user; none of them leave the profile modified.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  // ── Onboarding validation ─────────────────────────────────────────────

  #[error("enter a valid name")]
  EmptyName,

  #[error("enter a valid birth year: {0:?}")]
  InvalidBirthYear(String),

  #[error("birth year {year} is after {cutoff}; enter a year <= {cutoff}")]
  BirthYearAfterCutoff { year: i32, cutoff: i32 },

  #[error("pick a career family")]
  FamilyNotSelected,

  // ── State transitions ─────────────────────────────────────────────────

  #[error("unknown career family: {0:?}")]
  UnknownFamily(String),

  #[error("career family is already fixed to {0:?}")]
  FamilyLocked(String),

  #[error("profile is already onboarded")]
  AlreadyOnboarded,

  #[error("profile is not onboarded yet")]
  NotOnboarded,

  #[error("no mission {mission:?} in family {family:?}")]
  UnknownMission { family: String, mission: String },

  // ── Persistence ───────────────────────────────────────────────────────

  #[error("invalid profile: {0}")]
  InvalidProfile(String),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
