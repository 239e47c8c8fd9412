//! Profile — the complete persisted state for one user.
//!
//! A profile starts empty, becomes onboarded once both `user` and `family`
//! are set, and afterwards only grows: skills go up, badges and completed
//! missions are appended, never removed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  skill::{Badge, Skills},
};

// ─── User ────────────────────────────────────────────────────────────────────

/// Identity fixed at onboarding. Never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
  pub name:       String,
  #[serde(rename = "birth")]
  pub birth_year: i32,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
  pub user:      Option<User>,
  /// Selected family identifier. Not required to exist in the catalog;
  /// lookups against an unknown id fall back to generic content.
  pub family:    Option<String>,
  pub skills:    Skills,
  /// Earned badges in the order they were unlocked.
  pub badges:    Vec<Badge>,
  /// Identifiers of resolved missions in first-completion order.
  pub completed: Vec<String>,
}

impl Profile {
  pub fn is_onboarded(&self) -> bool { self.user.is_some() && self.family.is_some() }

  pub fn has_badge(&self, badge: Badge) -> bool { self.badges.contains(&badge) }

  pub fn has_completed(&self, mission_id: &str) -> bool {
    self.completed.iter().any(|id| id == mission_id)
  }

  /// Check the invariants serde cannot express on its own.
  pub fn validate(&self) -> Result<()> {
    if let Some(user) = &self.user {
      if user.name.trim().is_empty() {
        return Err(Error::InvalidProfile("user name is empty".into()));
      }
      if user.birth_year == 0 {
        return Err(Error::InvalidProfile("birth year is zero".into()));
      }
      // Onboarding sets the user and fixes the family together.
      if self.family.is_none() {
        return Err(Error::InvalidProfile("user set without a family".into()));
      }
    }

    let mut seen = HashSet::new();
    if let Some(dup) = self.badges.iter().find(|b| !seen.insert(**b)) {
      return Err(Error::InvalidProfile(format!("duplicate badge {dup}")));
    }

    let mut seen = HashSet::new();
    if let Some(dup) = self.completed.iter().find(|id| !seen.insert(id.as_str())) {
      return Err(Error::InvalidProfile(format!(
        "mission {dup:?} completed twice"
      )));
    }

    Ok(())
  }

  /// Parse and validate a serialised profile.
  pub fn from_json(input: &str) -> Result<Self> {
    let profile: Self = serde_json::from_str(input)?;
    profile.validate()?;
    Ok(profile)
  }

  /// Compact form written to the persistence store.
  pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_profile_is_empty() {
    let p = Profile::default();
    assert!(p.user.is_none());
    assert!(p.family.is_none());
    assert_eq!(p.skills, Skills::default());
    assert!(p.badges.is_empty());
    assert!(p.completed.is_empty());
    assert!(!p.is_onboarded());
  }

  #[test]
  fn parses_prototype_layout() {
    let json = r#"{"user":{"name":"Ada","birth":2008},"family":"tech",
      "skills":{"creativity":0,"communication":0,"analysis":2,"empathy":0},
      "badges":[],"completed":["t1"]}"#;
    let p = Profile::from_json(json).unwrap();
    assert_eq!(p.user.as_ref().unwrap().birth_year, 2008);
    assert_eq!(p.family.as_deref(), Some("tech"));
    assert_eq!(p.skills.analysis, 2);
    assert!(p.has_completed("t1"));
    assert!(p.is_onboarded());
  }

  #[test]
  fn serialises_birth_year_as_birth() {
    let p = Profile {
      user: Some(User { name: "Ada".into(), birth_year: 2008 }),
      ..Profile::default()
    };
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["user"]["birth"], 2008);
  }

  #[test]
  fn rejects_duplicate_completed() {
    let json = r#"{"user":null,"family":null,
      "skills":{"creativity":0,"communication":0,"analysis":0,"empathy":0},
      "badges":[],"completed":["t1","t1"]}"#;
    assert!(matches!(
      Profile::from_json(json),
      Err(Error::InvalidProfile(_))
    ));
  }

  #[test]
  fn rejects_duplicate_badges() {
    let json = r#"{"user":null,"family":null,
      "skills":{"creativity":5,"communication":0,"analysis":0,"empathy":0},
      "badges":["Creative","Creative"],"completed":[]}"#;
    assert!(matches!(
      Profile::from_json(json),
      Err(Error::InvalidProfile(_))
    ));
  }

  #[test]
  fn rejects_blank_user_name() {
    let json = r#"{"user":{"name":"  ","birth":2000},"family":"tech",
      "skills":{"creativity":0,"communication":0,"analysis":0,"empathy":0},
      "badges":[],"completed":[]}"#;
    assert!(Profile::from_json(json).is_err());
  }

  #[test]
  fn rejects_user_without_family() {
    let json = r#"{"user":{"name":"Ada","birth":2008},"family":null,
      "skills":{"creativity":0,"communication":0,"analysis":0,"empathy":0},
      "badges":[],"completed":[]}"#;
    assert!(matches!(
      Profile::from_json(json),
      Err(Error::InvalidProfile(_))
    ));
  }

  #[test]
  fn rejects_zero_birth_year() {
    let json = r#"{"user":{"name":"Ada","birth":0},"family":"tech",
      "skills":{"creativity":0,"communication":0,"analysis":0,"empathy":0},
      "badges":[],"completed":[]}"#;
    assert!(matches!(
      Profile::from_json(json),
      Err(Error::InvalidProfile(_))
    ));
  }

  #[test]
  fn family_without_user_is_valid() {
    let p = Profile { family: Some("edu".into()), ..Profile::default() };
    assert!(p.validate().is_ok());
  }

  #[test]
  fn rejects_unknown_badge_and_negative_skill() {
    let unknown_badge = r#"{"user":null,"family":null,
      "skills":{"creativity":0,"communication":0,"analysis":0,"empathy":0},
      "badges":["Brave"],"completed":[]}"#;
    assert!(Profile::from_json(unknown_badge).is_err());

    let negative = r#"{"user":null,"family":null,
      "skills":{"creativity":-1,"communication":0,"analysis":0,"empathy":0},
      "badges":[],"completed":[]}"#;
    assert!(Profile::from_json(negative).is_err());
  }
}
