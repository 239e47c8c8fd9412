//! Content catalog — families, missions, mentor lines and scoring weights.
//!
//! The catalog is read-only once built. Every per-family lookup is total: a
//! family that is missing from one of the tables (or an id that is not a
//! family at all) gets the documented fallback instead of `None`.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::skill::Skill;

// ─── Entries ─────────────────────────────────────────────────────────────────

/// A career category the user commits to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
  pub id:   String,
  pub name: String,
}

/// A scripted task that awards fixed skill deltas when completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
  /// Unique within the owning family only.
  pub id:          String,
  pub title:       String,
  pub description: String,
  pub effects:     Vec<(Skill, i32)>,
}

/// Per-skill scoring weights, in whole percent.
///
/// Skills absent from the map do not contribute to the fit score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<Skill, u32>);

impl Weights {
  pub fn new(entries: impl IntoIterator<Item = (Skill, u32)>) -> Self {
    Self(entries.into_iter().collect())
  }

  pub fn get(&self, skill: Skill) -> Option<u32> { self.0.get(&skill).copied() }

  pub fn iter(&self) -> impl Iterator<Item = (Skill, u32)> + '_ {
    self.0.iter().map(|(s, w)| (*s, *w))
  }
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

pub const FALLBACK_MENTOR: &str = "I am your mentor — try missions to practice skills.";

#[derive(Debug, Clone)]
pub struct Catalog {
  families:         Vec<Family>,
  missions:         HashMap<String, Vec<Mission>>,
  mentors:          HashMap<String, String>,
  weights:          HashMap<String, Weights>,
  fallback_mentor:  String,
  fallback_weights: Weights,
}

impl Default for Catalog {
  fn default() -> Self { Self::builtin() }
}

impl Catalog {
  /// The shipped content: five families, missions for three of them.
  pub fn builtin() -> Self {
    use Skill::*;

    let families = [
      ("health", "Medical & Healthcare"),
      ("tech", "Engineering & Tech"),
      ("design", "Design & Creativity"),
      ("biz", "Business & Management"),
      ("edu", "Education & Social"),
    ]
    .into_iter()
    .map(|(id, name)| Family { id: id.into(), name: name.into() })
    .collect();

    let missions = HashMap::from([
      ("health".to_owned(), vec![
        mission("h1", "Triage a simple case",
          "Read a short patient story and choose next step.",
          &[(Empathy, 2), (Analysis, 1)]),
        mission("h2", "Explain a health tip",
          "Create a short tip an elder can follow.",
          &[(Communication, 2)]),
      ]),
      ("tech".to_owned(), vec![
        mission("t1", "Debug a simple logic",
          "Spot which step is wrong in a flow.",
          &[(Analysis, 2)]),
        mission("t2", "Build a mini-algorithm",
          "Plan steps to sort objects.",
          &[(Analysis, 1), (Creativity, 1)]),
      ]),
      ("design".to_owned(), vec![
        mission("d1", "Sketch a simple product",
          "Design a small item for school use.",
          &[(Creativity, 2)]),
        mission("d2", "Respond to feedback",
          "Edit your sketch based on critique.",
          &[(Creativity, 1), (Communication, 1)]),
      ]),
    ]);

    let mentors = [
      ("health", "I am Dr. Aria — try missions and I will guide you."),
      ("tech", "I am Rian the Researcher — solve small problems to grow your profile."),
      ("design", "I am Zoya the Designer — creativity matters here."),
    ]
    .into_iter()
    .map(|(id, text)| (id.to_owned(), text.to_owned()))
    .collect();

    let weights = HashMap::from([
      ("health".to_owned(), Weights::new([(Empathy, 50), (Analysis, 30), (Communication, 20)])),
      ("tech".to_owned(), Weights::new([(Analysis, 60), (Creativity, 20), (Communication, 20)])),
      ("design".to_owned(), Weights::new([(Creativity, 60), (Communication, 20), (Analysis, 20)])),
      ("biz".to_owned(), Weights::new([(Communication, 40), (Analysis, 40), (Creativity, 20)])),
      ("edu".to_owned(), Weights::new([(Communication, 40), (Empathy, 40), (Analysis, 20)])),
    ]);

    Self {
      families,
      missions,
      mentors,
      weights,
      fallback_mentor: FALLBACK_MENTOR.to_owned(),
      fallback_weights: default_fallback_weights(),
    }
  }

  /// Replace the weights used for families without their own table.
  pub fn with_fallback_weights(mut self, weights: Weights) -> Self {
    self.fallback_weights = weights;
    self
  }

  // ── Lookups ───────────────────────────────────────────────────────────

  pub fn families(&self) -> &[Family] { &self.families }

  pub fn family(&self, id: &str) -> Option<&Family> {
    self.families.iter().find(|f| f.id == id)
  }

  /// Missions for `family`; empty when the family has none.
  pub fn missions(&self, family: &str) -> &[Mission] {
    self.missions.get(family).map(Vec::as_slice).unwrap_or(&[])
  }

  pub fn mission(&self, family: &str, mission_id: &str) -> Option<&Mission> {
    self.missions(family).iter().find(|m| m.id == mission_id)
  }

  /// Mentor line for `family`, or the generic line.
  pub fn mentor(&self, family: &str) -> &str {
    self.mentors.get(family).unwrap_or(&self.fallback_mentor)
  }

  /// Scoring weights for `family`, or the generic weights.
  pub fn weights(&self, family: &str) -> &Weights {
    self.weights.get(family).unwrap_or(&self.fallback_weights)
  }

  pub fn fallback_weights(&self) -> &Weights { &self.fallback_weights }
}

/// analysis 40%, creativity 30%, communication 30%.
pub fn default_fallback_weights() -> Weights {
  Weights::new([
    (Skill::Analysis, 40),
    (Skill::Creativity, 30),
    (Skill::Communication, 30),
  ])
}

fn mission(id: &str, title: &str, description: &str, effects: &[(Skill, i32)]) -> Mission {
  Mission {
    id:          id.into(),
    title:       title.into(),
    description: description.into(),
    effects:     effects.to_vec(),
  }
}
