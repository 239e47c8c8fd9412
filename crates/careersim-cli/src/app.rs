//! Command dispatcher — one command, one state transition, one printout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use careersim_core::{
  Error,
  session::Session,
};
use careersim_store_sqlite::SqliteStore;

use crate::{Command, prompt, render};

pub async fn run(session: &mut Session<SqliteStore>, command: Command) -> Result<()> {
  match command {
    Command::Families => {
      print!("{}", render::families(session.catalog(), session.profile().family.as_deref()));
    }

    Command::Family { id } => {
      session.select_family(&id).await?;
      println!("Selected {}.", family_name(session, &id));
    }

    Command::Start { name, birth_year, family } => {
      session
        .onboard_with_family(&name, &birth_year, family.as_deref())
        .await?;
      print!("{}", render::missions(session.catalog(), session.profile()));
    }

    Command::Missions => {
      if !session.profile().is_onboarded() {
        return Err(Error::NotOnboarded.into());
      }
      print!("{}", render::missions(session.catalog(), session.profile()));
    }

    Command::Attempt { mission, yes, response } => {
      attempt(session, &mission, yes, response).await?;
    }

    Command::Status => {
      let key = session.repository().key().to_owned();
      let last_saved = session
        .repository()
        .store()
        .updated_at(&key)
        .await
        .context("failed to read save time")?;
      print!("{}", render::status(&session.summary(), session.profile(), last_saved));
    }

    Command::Export { out } => {
      let export = session.export()?;
      let path = export_path(out.as_deref(), &export.file_name);
      std::fs::write(&path, export.contents)
        .with_context(|| format!("writing portfolio to {}", path.display()))?;
      println!("Exported to {}", path.display());
    }

    Command::Import { file } => {
      let contents = std::fs::read_to_string(&file)
        .with_context(|| format!("reading portfolio {}", file.display()))?;
      session
        .import(&contents)
        .await
        .with_context(|| format!("importing {}", file.display()))?;
      println!("Imported {}", file.display());
    }

    Command::Reset { yes } => {
      if !(yes || prompt::confirm("Reset progress?")?) {
        println!("Nothing changed.");
        return Ok(());
      }
      session.reset().await?;
      println!("Progress reset.");
    }
  }
  Ok(())
}

async fn attempt(
  session: &mut Session<SqliteStore>,
  mission_id: &str,
  yes: bool,
  response: Option<String>,
) -> Result<()> {
  let family = session.profile().family.clone().unwrap_or_default();

  // Unknown missions and un-onboarded profiles are rejected before any
  // prompt is shown.
  let confirmed = match session.catalog().mission(&family, mission_id) {
    Some(mission) if session.profile().is_onboarded() => {
      yes || prompt::confirm(&render::mission_prompt(mission))?
    }
    _ => false,
  };

  let response = match response {
    Some(text) => text,
    None if confirmed => {
      prompt::ask("Write 1-2 lines about your approach. (this is simulated)\n> ")?
    }
    None => String::new(),
  };

  let outcome = session.attempt_mission(mission_id, confirmed, &response).await?;
  println!("{}", render::outcome(&outcome));
  Ok(())
}

fn family_name<'a>(session: &'a Session<SqliteStore>, id: &'a str) -> &'a str {
  session.catalog().family(id).map_or(id, |f| f.name.as_str())
}

/// Where `export` writes: the default file name, a file inside `out` when it
/// is a directory, or `out` itself.
fn export_path(out: Option<&Path>, file_name: &str) -> PathBuf {
  match out {
    None => PathBuf::from(file_name),
    Some(dir) if dir.is_dir() => dir.join(file_name),
    Some(path) => path.to_path_buf(),
  }
}
