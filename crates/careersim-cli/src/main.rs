//! `careersim` — command-line front end for CareerSim.
//!
//! # Usage
//!
//! ```
//! careersim family tech
//! careersim start --name Ada --birth-year 2008
//! careersim attempt t1
//! careersim status
//! ```

mod app;
mod prompt;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use careersim_core::{
  catalog::{Catalog, Weights},
  onboarding::{DEFAULT_BIRTH_YEAR_CUTOFF, Settings},
  repository::{DEFAULT_STORAGE_KEY, ProfileRepository},
  session::Session,
};
use careersim_store_sqlite::SqliteStore;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "careersim", version, about = "Explore career families through small missions")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "careersim.toml")]
  config: PathBuf,

  /// SQLite file holding the profile (overrides the config file).
  #[arg(long, env = "CAREERSIM_STORE", value_name = "PATH")]
  store: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List the career families.
  Families,

  /// Pick a career family (before starting).
  Family {
    /// Family identifier, e.g. `tech`.
    id: String,
  },

  /// Complete onboarding.
  Start {
    #[arg(long)]
    name:       String,
    #[arg(long, value_name = "YEAR")]
    birth_year: String,
    /// Pick the family in the same step.
    #[arg(long)]
    family:     Option<String>,
  },

  /// Show the mentor and the missions of the selected family.
  Missions,

  /// Attempt a mission of the selected family.
  Attempt {
    /// Mission identifier, e.g. `t1`.
    mission:  String,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes:      bool,
    /// Your approach, instead of being asked for it.
    #[arg(long)]
    response: Option<String>,
  },

  /// Show profile, skills, badges and fit score.
  Status,

  /// Write the profile to a portfolio JSON file.
  Export {
    /// Output file or directory (default: `<name>-portfolio.json`).
    #[arg(short, long)]
    out: Option<PathBuf>,
  },

  /// Replace the profile with an exported portfolio.
  Import {
    file: PathBuf,
  },

  /// Delete all progress.
  Reset {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Settings read from the config file and `CAREERSIM_*` variables.
#[derive(Deserialize, Debug)]
#[serde(default)]
struct CliConfig {
  store_path:        PathBuf,
  storage_key:       String,
  birth_year_cutoff: i32,
  fallback_weights:  Option<Weights>,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      store_path:        PathBuf::from("~/.careersim.db"),
      storage_key:       DEFAULT_STORAGE_KEY.to_owned(),
      birth_year_cutoff: DEFAULT_BIRTH_YEAR_CUTOFF,
      fallback_weights:  None,
    }
  }
}

impl CliConfig {
  fn settings(&self) -> Settings {
    Settings {
      birth_year_cutoff: self.birth_year_cutoff,
      fallback_weights:  self.fallback_weights.clone(),
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let cfg: CliConfig = config::Config::builder()
    .add_source(config::File::from(args.config.clone()).required(false))
    .add_source(config::Environment::with_prefix("CAREERSIM"))
    .build()
    .context("failed to read config file")?
    .try_deserialize()
    .context("failed to deserialise config")?;

  // CLI flag overrides config file, which overrides defaults.
  let store_path = expand_tilde(args.store.as_deref().unwrap_or(cfg.store_path.as_path()));

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let repo = ProfileRepository::with_key(store, cfg.storage_key.clone());
  let mut session = Session::open(repo, Catalog::builtin(), cfg.settings())
    .await
    .context("failed to load profile")?;

  app::run(&mut session, args.command).await
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
