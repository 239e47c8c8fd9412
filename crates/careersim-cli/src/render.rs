//! Plain-text rendering of catalog and profile views.

use std::fmt::Write as _;

use careersim_core::{
  catalog::{Catalog, Mission},
  mission::MissionOutcome,
  profile::Profile,
  summary::{SkillBar, Summary},
};
use chrono::{DateTime, Local, Utc};

const BAR_WIDTH: usize = 10;

pub fn families(catalog: &Catalog, selected: Option<&str>) -> String {
  let mut out = String::new();
  for family in catalog.families() {
    let marker = if selected == Some(family.id.as_str()) { '*' } else { ' ' };
    let _ = writeln!(out, "{marker} {:<8} {}", family.id, family.name);
  }
  out
}

pub fn missions(catalog: &Catalog, profile: &Profile) -> String {
  let family = profile.family.as_deref().unwrap_or_default();
  let mut out = format!("{}\n\n", catalog.mentor(family));

  let pool = catalog.missions(family);
  if pool.is_empty() {
    out.push_str("No missions for this family yet.\n");
    return out;
  }
  for mission in pool {
    let done = if profile.has_completed(&mission.id) { "✓" } else { " " };
    let _ = writeln!(out, "[{done}] {:<4} {}", mission.id, mission.title);
    let _ = writeln!(out, "         {}", mission.description);
  }
  out
}

pub fn mission_prompt(mission: &Mission) -> String {
  format!("{}\n\n{}\n\nDo you want to attempt it?", mission.title, mission.description)
}

pub fn outcome(outcome: &MissionOutcome) -> String {
  match outcome {
    MissionOutcome::Declined => "Mission skipped.".to_owned(),
    MissionOutcome::Completed { first_completion, new_badges } => {
      let mut out = "Mission completed — skills updated".to_owned();
      if !first_completion {
        out.push_str(" (replayed; skills awarded again)");
      }
      for badge in new_badges {
        let _ = write!(out, "\nBadge earned: {badge}");
      }
      out
    }
  }
}

pub fn skill_bar(bar: &SkillBar) -> String {
  let filled = usize::from(bar.percent) * BAR_WIDTH / 100;
  format!(
    "{:<14} {:>3} [{}{}]",
    bar.skill.to_string(),
    bar.value,
    "#".repeat(filled),
    "-".repeat(BAR_WIDTH - filled)
  )
}

pub fn status(
  summary: &Summary,
  profile: &Profile,
  last_saved: Option<DateTime<Utc>>,
) -> String {
  let mut out = String::new();

  match (&summary.user_tag, &profile.user) {
    (Some(tag), Some(user)) => {
      let _ = writeln!(out, "{tag}");
      let _ = writeln!(out, "Born {}", user.birth_year);
    }
    _ => {
      let family = profile.family.as_deref().unwrap_or("none");
      let _ = writeln!(out, "Not started yet (family: {family})");
    }
  }
  out.push('\n');

  for bar in &summary.skills {
    let _ = writeln!(out, "{}", skill_bar(bar));
  }

  let badges = if summary.badges.is_empty() {
    "none".to_owned()
  } else {
    summary.badges.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
  };
  let _ = writeln!(out, "\nBadges: {badges}");
  let _ = writeln!(out, "Fit Score: {}%", summary.fit);
  let _ = writeln!(out, "Completed Missions: {}", summary.completed_count);
  let _ = writeln!(out, "Suggested next step: {}", summary.next_step);

  if let Some(at) = last_saved {
    let _ = writeln!(out, "Last saved: {}", at.with_timezone(&Local).format("%Y-%m-%d %H:%M"));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use careersim_core::{
    profile::User,
    skill::{Badge, Skill, Skills},
  };

  fn ada() -> Profile {
    Profile {
      user:      Some(User { name: "Ada".into(), birth_year: 2008 }),
      family:    Some("tech".into()),
      skills:    Skills { analysis: 4, ..Skills::default() },
      badges:    vec![Badge::Analytical],
      completed: vec!["t1".into()],
    }
  }

  #[test]
  fn families_marks_selection() {
    let out = families(&Catalog::builtin(), Some("design"));
    let line = out.lines().find(|l| l.contains("design")).unwrap();
    assert!(line.starts_with('*'));
    assert_eq!(out.lines().filter(|l| l.starts_with('*')).count(), 1);
  }

  #[test]
  fn missions_marks_completed() {
    let out = missions(&Catalog::builtin(), &ada());
    assert!(out.starts_with("I am Rian"));
    assert!(out.contains("[✓] t1"));
    assert!(out.contains("[ ] t2"));
  }

  #[test]
  fn missions_for_empty_family() {
    let profile = Profile { family: Some("edu".into()), ..Profile::default() };
    let out = missions(&Catalog::builtin(), &profile);
    assert!(out.contains("No missions"));
  }

  #[test]
  fn skill_bar_fill() {
    let bar = SkillBar { skill: Skill::Analysis, value: 4, percent: 40 };
    assert!(skill_bar(&bar).ends_with("[####------]"));
    let full = SkillBar { skill: Skill::Empathy, value: 25, percent: 100 };
    assert!(skill_bar(&full).ends_with("[##########]"));
  }

  #[test]
  fn outcome_lists_new_badges() {
    let out = outcome(&MissionOutcome::Completed {
      first_completion: true,
      new_badges:       vec![Badge::Creative],
    });
    assert!(out.contains("Badge earned: Creative"));
    assert!(!out.contains("replayed"));
  }

  #[test]
  fn outcome_flags_replay() {
    let out = outcome(&MissionOutcome::Completed {
      first_completion: false,
      new_badges:       Vec::new(),
    });
    assert!(out.starts_with("Mission completed — skills updated (replayed; skills awarded again)"));
  }

  #[test]
  fn status_shows_fit_and_tag() {
    let profile = ada();
    let summary = Summary::of(&profile, &Catalog::builtin());
    let out = status(&summary, &profile, None);
    assert!(out.starts_with("Ada • tech\nBorn 2008"));
    assert!(out.contains("Fit Score: 24%"));
    assert!(out.contains("Badges: Analytical"));
    assert!(out.contains("Completed Missions: 1"));
  }
}
