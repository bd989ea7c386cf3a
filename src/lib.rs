//! # Courtbook backend library

#[macro_use]
extern crate tracing;

use std::time::Instant;

use axum::extract::FromRef;
use common::DbPool;

mod config;

pub mod controllers;
pub mod routes;
pub mod schemas;

pub use config::*;

/// Moment the server process started serving
#[derive(Clone, Copy, Debug)]
pub struct StartTime(pub Instant);

impl StartTime {
	#[must_use]
	pub fn now() -> Self { Self(Instant::now()) }

	#[must_use]
	pub fn uptime_seconds(&self) -> u64 { self.0.elapsed().as_secs() }
}

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config:        Config,
	pub database_pool: DbPool,
	pub started_at:    StartTime,
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for DbPool {
	fn from_ref(input: &AppState) -> Self { input.database_pool.clone() }
}

impl FromRef<AppState> for StartTime {
	fn from_ref(input: &AppState) -> Self { input.started_at }
}
