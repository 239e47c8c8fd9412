//! Core types and game rules for CareerSim.
//!
//! This crate is deliberately free of database and terminal dependencies.
//! Persistence goes through the [`store::KeyValueStore`] trait; the
//! [`session::Session`] ties profile, catalog and store together.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod export;
pub mod fit;
pub mod mission;
pub mod onboarding;
pub mod profile;
pub mod repository;
pub mod session;
pub mod skill;
pub mod store;
pub mod summary;

pub use error::{Error, Result};
