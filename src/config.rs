use std::str::FromStr;
use std::time::Duration;

use common::DbPool;
use deadpool_diesel::Runtime;
use deadpool_diesel::postgres::Manager;
use insights::SurgeRule;

#[derive(Clone, Debug)]
pub struct Config {
	pub database_url:          String,
	pub bind_address:          String,
	pub database_pool_size:    usize,
	pub database_pool_timeout: Duration,

	pub surge_rule: SurgeRule,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	fn get_env_var_or<T: FromStr>(var: &str, default: T) -> T {
		match std::env::var(var) {
			Ok(value) => {
				value.parse().unwrap_or_else(|_| {
					panic!("{var} has an invalid value: {value}")
				})
			},
			Err(_) => default,
		}
	}

	/// Read the month-over-month surge rule, falling back to the summer
	/// promotion rule for every missing variable
	fn surge_rule_from_env() -> SurgeRule {
		let default = SurgeRule::default();

		let threshold_percent = Self::get_env_var_or(
			"TREND_SURGE_THRESHOLD",
			default.threshold_percent,
		);

		let month = match std::env::var("TREND_SURGE_MONTH") {
			Ok(value) if value.eq_ignore_ascii_case("any") => None,
			Ok(value) => {
				let month =
					value.parse::<u32>().ok().filter(|m| (1..=12).contains(m));

				Some(month.unwrap_or_else(|| {
					panic!("TREND_SURGE_MONTH must be a month number or 'any'")
				}))
			},
			Err(_) => default.month,
		};

		let cause = match std::env::var("TREND_SURGE_CAUSE") {
			Ok(value) if value.trim().is_empty() => None,
			Ok(value) => Some(value),
			Err(_) => default.cause,
		};

		SurgeRule { threshold_percent, month, cause }
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if `DATABASE_URL` is missing or any variable holds an invalid
	/// value
	#[must_use]
	pub fn from_env() -> Self {
		let database_url = Self::get_env_var("DATABASE_URL");
		let bind_address =
			Self::get_env_var_or("BIND_ADDRESS", "0.0.0.0:5000".to_string());

		let database_pool_size = Self::get_env_var_or("DATABASE_POOL_SIZE", 10);
		let database_pool_timeout = Duration::from_secs(Self::get_env_var_or(
			"DATABASE_POOL_TIMEOUT_SECONDS",
			60,
		));

		let surge_rule = Self::surge_rule_from_env();

		Self {
			database_url,
			bind_address,
			database_pool_size,
			database_pool_timeout,
			surge_rule,
		}
	}

	/// Create a database pool for the given config
	///
	/// No connection is opened until the pool is first used.
	///
	/// # Panics
	/// Panics if creating the pool fails
	#[must_use]
	pub fn create_database_pool(&self) -> DbPool {
		let manager = Manager::new(self.database_url.clone(), Runtime::Tokio1);

		DbPool::builder(manager)
			.max_size(self.database_pool_size)
			.wait_timeout(Some(self.database_pool_timeout))
			.create_timeout(Some(self.database_pool_timeout))
			.runtime(Runtime::Tokio1)
			.build()
			.expect("COULD NOT CREATE DATABASE POOL")
	}
}
