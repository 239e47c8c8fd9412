//! Integration tests for `SqliteStore` against an in-memory database.

use careersim_core::{
  catalog::Catalog,
  onboarding::Settings,
  profile::Profile,
  repository::{DEFAULT_STORAGE_KEY, ProfileRepository},
  session::Session,
  skill::Badge,
  store::KeyValueStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

// ─── Key-value operations ────────────────────────────────────────────────────

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert_eq!(s.get("careerSim").await.unwrap(), None);
  assert_eq!(s.updated_at("careerSim").await.unwrap(), None);
}

#[tokio::test]
async fn set_and_get() {
  let s = store().await;
  s.set("k", "{\"a\":1}".into()).await.unwrap();
  assert_eq!(s.get("k").await.unwrap().as_deref(), Some("{\"a\":1}"));
  assert!(s.updated_at("k").await.unwrap().is_some());
}

#[tokio::test]
async fn set_overwrites_whole_value() {
  let s = store().await;
  s.set("k", "first".into()).await.unwrap();
  s.set("k", "second".into()).await.unwrap();
  assert_eq!(s.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn keys_are_independent() {
  let s = store().await;
  s.set("a", "1".into()).await.unwrap();
  s.set("b", "2".into()).await.unwrap();
  s.delete("a").await.unwrap();
  assert_eq!(s.get("a").await.unwrap(), None);
  assert_eq!(s.get("b").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn delete_absent_key_is_ok() {
  let s = store().await;
  s.delete("nothing").await.unwrap();
}

#[tokio::test]
async fn file_store_survives_reopen() {
  let path = std::env::temp_dir().join(format!(
    "careersim-test-{}-{:?}.db",
    std::process::id(),
    std::thread::current().id()
  ));
  let _ = std::fs::remove_file(&path);

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.set("k", "kept".into()).await.unwrap();
  }
  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get("k").await.unwrap().as_deref(), Some("kept"));

  drop(s);
  let _ = std::fs::remove_file(&path);
}

// ─── Profiles through the repository ─────────────────────────────────────────

#[tokio::test]
async fn session_progress_is_persisted() {
  let s = store().await;
  let mut session = Session::open(
    ProfileRepository::new(s.clone()),
    Catalog::builtin(),
    Settings::default(),
  )
  .await
  .unwrap();

  session.select_family("health").await.unwrap();
  session.onboard("Ada", "2008").await.unwrap();
  session.attempt_mission("h1", true, "ask about symptoms").await.unwrap();
  session.attempt_mission("h1", true, "").await.unwrap();

  let reloaded = ProfileRepository::new(s.clone()).load().await.unwrap();
  assert_eq!(&reloaded, session.profile());
  assert_eq!(reloaded.skills.empathy, 4);
  assert_eq!(reloaded.completed, vec!["h1".to_owned()]);
  assert_eq!(reloaded.badges, vec![Badge::Caring]);
}

#[tokio::test]
async fn malformed_row_loads_as_default() {
  let s = store().await;
  s.set(DEFAULT_STORAGE_KEY, "{\"user\":".into()).await.unwrap();
  let repo = ProfileRepository::new(s);
  assert_eq!(repo.load().await.unwrap(), Profile::default());
}

#[tokio::test]
async fn reset_removes_row() {
  let s = store().await;
  let repo = ProfileRepository::new(s.clone());
  repo.save(&Profile { family: Some("tech".into()), ..Profile::default() })
    .await
    .unwrap();
  repo.reset().await.unwrap();
  assert_eq!(s.get(DEFAULT_STORAGE_KEY).await.unwrap(), None);
  assert_eq!(repo.load().await.unwrap(), Profile::default());
}
