//! Portfolio export and import.

use crate::{Result, profile::Profile};

/// A serialised profile ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
  /// `{name}-portfolio.json`, or `profile-portfolio.json` before onboarding.
  pub file_name: String,
  /// Pretty-printed JSON.
  pub contents:  String,
}

pub fn file_name(profile: &Profile) -> String {
  let stem = profile.user.as_ref().map_or("profile", |u| u.name.as_str());
  format!("{stem}-portfolio.json")
}

pub fn export(profile: &Profile) -> Result<Export> {
  Ok(Export {
    file_name: file_name(profile),
    contents:  serde_json::to_string_pretty(profile)?,
  })
}

/// Parse an exported portfolio. Unlike loading from the store, malformed
/// input is an error here rather than a silent reset.
pub fn import(contents: &str) -> Result<Profile> { Profile::from_json(contents) }
