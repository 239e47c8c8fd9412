//! [`Session`] — the application state, owned and threaded explicitly.
//!
//! A session is constructed once at startup from a store, a catalog and the
//! game settings. Every mutating operation either fails without touching the
//! profile or applies its change and persists before returning.

use crate::{
  Error, Result,
  catalog::Catalog,
  export::{self, Export},
  fit::compute_fit,
  mission::{self, MissionOutcome},
  onboarding::{self, Settings},
  profile::Profile,
  repository::ProfileRepository,
  store::KeyValueStore,
  summary::Summary,
};

pub struct Session<S> {
  repo:     ProfileRepository<S>,
  catalog:  Catalog,
  settings: Settings,
  profile:  Profile,
}

impl<S: KeyValueStore> Session<S> {
  /// Load the persisted profile (or start fresh) and build a session.
  pub async fn open(
    repo: ProfileRepository<S>,
    catalog: Catalog,
    settings: Settings,
  ) -> Result<Self> {
    let catalog = match &settings.fallback_weights {
      Some(w) => catalog.with_fallback_weights(w.clone()),
      None => catalog,
    };
    let profile = repo.load().await?;
    Ok(Self { repo, catalog, settings, profile })
  }

  pub fn profile(&self) -> &Profile { &self.profile }

  pub fn catalog(&self) -> &Catalog { &self.catalog }

  pub fn settings(&self) -> &Settings { &self.settings }

  pub fn repository(&self) -> &ProfileRepository<S> { &self.repo }

  // ── Onboarding ────────────────────────────────────────────────────────

  /// Choose a career family. Only allowed before onboarding completes.
  pub async fn select_family(&mut self, family: &str) -> Result<()> {
    if self.profile.user.is_some() {
      let current = self.profile.family.clone().unwrap_or_default();
      return Err(Error::FamilyLocked(current));
    }
    if self.catalog.family(family).is_none() {
      return Err(Error::UnknownFamily(family.to_owned()));
    }

    self.commit(|p| p.family = Some(family.to_owned())).await?;
    tracing::info!(family, "family selected");
    Ok(())
  }

  /// Validate the onboarding form and fix the user's identity.
  pub async fn onboard(&mut self, name: &str, birth_year: &str) -> Result<()> {
    self.onboard_with_family(name, birth_year, None).await
  }

  /// Onboard, picking `family` in the same step when given.
  ///
  /// Everything is validated before anything is written: a rejected form
  /// leaves the previously selected family in place.
  pub async fn onboard_with_family(
    &mut self,
    name: &str,
    birth_year: &str,
    family: Option<&str>,
  ) -> Result<()> {
    if self.profile.user.is_some() {
      return Err(Error::AlreadyOnboarded);
    }
    if let Some(family) = family
      && self.catalog.family(family).is_none()
    {
      return Err(Error::UnknownFamily(family.to_owned()));
    }

    let family = family.or(self.profile.family.as_deref()).map(str::to_owned);
    let user = onboarding::validate(name, birth_year, family.as_deref(), &self.settings)?;
    let name = user.name.clone();

    self
      .commit(|p| {
        p.family = family;
        p.user = Some(user);
      })
      .await?;
    tracing::info!(%name, "profile onboarded");
    Ok(())
  }

  // ── Missions ──────────────────────────────────────────────────────────

  /// Attempt a mission of the active family.
  ///
  /// A declined attempt returns [`MissionOutcome::Declined`] without
  /// persisting anything.
  pub async fn attempt_mission(
    &mut self,
    mission_id: &str,
    confirmed: bool,
    response: &str,
  ) -> Result<MissionOutcome> {
    let family = match (&self.profile.user, &self.profile.family) {
      (Some(_), Some(family)) => family.clone(),
      _ => return Err(Error::NotOnboarded),
    };
    let mission = self
      .catalog
      .mission(&family, mission_id)
      .ok_or_else(|| Error::UnknownMission {
        family:  family.clone(),
        mission: mission_id.to_owned(),
      })?;

    let mut next = self.profile.clone();
    let outcome = mission::resolve(&mut next, mission, confirmed, response);
    if outcome.is_completed() {
      self.repo.save(&next).await?;
      self.profile = next;
      tracing::info!(mission = mission_id, ?outcome, "mission completed");
    }
    Ok(outcome)
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn fit(&self) -> u8 { compute_fit(&self.profile, &self.catalog) }

  pub fn summary(&self) -> Summary { Summary::of(&self.profile, &self.catalog) }

  pub fn export(&self) -> Result<Export> { export::export(&self.profile) }

  // ── Replacement ───────────────────────────────────────────────────────

  /// Replace the profile with an exported portfolio and persist it.
  pub async fn import(&mut self, contents: &str) -> Result<()> {
    let profile = export::import(contents)?;
    self.repo.save(&profile).await?;
    self.profile = profile;
    tracing::info!("portfolio imported");
    Ok(())
  }

  /// Delete the persisted profile and start over from the default.
  pub async fn reset(&mut self) -> Result<()> {
    self.repo.reset().await?;
    self.profile = Profile::default();
    Ok(())
  }

  /// Apply `change` to a copy, persist it, then swap it in. A failed save
  /// leaves the in-memory profile untouched.
  async fn commit(&mut self, change: impl FnOnce(&mut Profile)) -> Result<()> {
    let mut next = self.profile.clone();
    change(&mut next);
    self.repo.save(&next).await?;
    self.profile = next;
    Ok(())
  }
}
