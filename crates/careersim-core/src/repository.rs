//! [`ProfileRepository`] — profile load/save/reset over a [`KeyValueStore`].

use crate::{Error, Result, profile::Profile, store::KeyValueStore};

/// The key the prototype used in browser storage.
pub const DEFAULT_STORAGE_KEY: &str = "careerSim";

/// Persists one profile under a fixed key.
#[derive(Debug)]
pub struct ProfileRepository<S> {
  store: S,
  key:   String,
}

impl<S: KeyValueStore> ProfileRepository<S> {
  pub fn new(store: S) -> Self { Self::with_key(store, DEFAULT_STORAGE_KEY) }

  pub fn with_key(store: S, key: impl Into<String>) -> Self {
    Self { store, key: key.into() }
  }

  pub fn key(&self) -> &str { &self.key }

  pub fn store(&self) -> &S { &self.store }

  /// Load the persisted profile.
  ///
  /// Absent data yields the default profile. So does data that fails to
  /// parse or validate: it is logged and discarded, and the next save
  /// overwrites it. Only backend failures are returned as errors.
  pub async fn load(&self) -> Result<Profile> {
    let raw = self.store.get(&self.key).await.map_err(store_error)?;

    let Some(raw) = raw else {
      tracing::debug!(key = %self.key, "no persisted profile");
      return Ok(Profile::default());
    };

    match Profile::from_json(&raw) {
      Ok(profile) => Ok(profile),
      Err(e) => {
        tracing::warn!(key = %self.key, error = %e, "discarding malformed persisted profile");
        Ok(Profile::default())
      }
    }
  }

  /// Overwrite the persisted profile.
  pub async fn save(&self, profile: &Profile) -> Result<()> {
    let json = profile.to_json()?;
    self.store.set(&self.key, json).await.map_err(store_error)?;
    tracing::debug!(key = %self.key, "profile saved");
    Ok(())
  }

  /// Delete the persisted profile.
  pub async fn reset(&self) -> Result<()> {
    self.store.delete(&self.key).await.map_err(store_error)?;
    tracing::info!(key = %self.key, "profile reset");
    Ok(())
  }
}

fn store_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> Error {
  Error::Store(Box::new(e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{profile::User, store::MemoryStore};

  fn onboarded() -> Profile {
    Profile {
      user: Some(User { name: "Ada".into(), birth_year: 2008 }),
      family: Some("tech".into()),
      ..Profile::default()
    }
  }

  #[tokio::test]
  async fn load_without_data_is_default() {
    let repo = ProfileRepository::new(MemoryStore::new());
    assert_eq!(repo.load().await.unwrap(), Profile::default());
  }

  #[tokio::test]
  async fn save_then_load() {
    let repo = ProfileRepository::new(MemoryStore::new());
    repo.save(&onboarded()).await.unwrap();
    assert_eq!(repo.load().await.unwrap(), onboarded());
  }

  #[tokio::test]
  async fn malformed_data_is_discarded() {
    let repo = ProfileRepository::new(MemoryStore::new());
    for raw in [
      "not json at all",
      r#"{"user":null}"#,
      r#"{"user":null,"family":null,"skills":{"creativity":0},"badges":[],"completed":[]}"#,
    ] {
      repo.store().set(DEFAULT_STORAGE_KEY, raw.into()).await.unwrap();
      assert_eq!(repo.load().await.unwrap(), Profile::default(), "input: {raw}");
    }
  }

  #[tokio::test]
  async fn reset_clears_persisted_profile() {
    let repo = ProfileRepository::new(MemoryStore::new());
    repo.save(&onboarded()).await.unwrap();
    repo.reset().await.unwrap();
    assert_eq!(repo.store().get(DEFAULT_STORAGE_KEY).await.unwrap(), None);
    assert_eq!(repo.load().await.unwrap(), Profile::default());
  }

  #[tokio::test]
  async fn custom_key_is_isolated() {
    let repo = ProfileRepository::with_key(MemoryStore::new(), "other");
    repo.save(&onboarded()).await.unwrap();
    assert_eq!(repo.store().get(DEFAULT_STORAGE_KEY).await.unwrap(), None);
    assert!(repo.store().get("other").await.unwrap().is_some());
  }
}
