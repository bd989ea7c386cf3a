//! Throwaway databases, one per test, migrated and filled with fixtures

use std::sync::LazyLock;

use chrono::NaiveTime;
use common::{DbConn, DbPool};
use deadpool_diesel::postgres::{Manager, Pool};
use diesel::prelude::*;
use diesel_migrations::{
	EmbeddedMigrations,
	MigrationHarness,
	embed_migrations,
};
use models::{CourtKind, NewCourt, NewTimeSlot, NewUser, SkillLevel};
use uuid::Uuid;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

static SERVER: LazyLock<Server> = LazyLock::new(Server::from_env);

/// The database server hosting every test database
struct Server {
	/// Url of the database named in `DATABASE_URL`, used for administration
	admin_url: String,
	/// `admin_url` without the database name
	base_url:  String,
}

impl Server {
	fn from_env() -> Self {
		if Ok("true".to_string()) == std::env::var("CI") {
			tracing_subscriber::fmt()
				.pretty()
				.with_thread_names(true)
				.with_max_level(tracing::Level::DEBUG)
				.init();
		}

		let admin_url = std::env::var("DATABASE_URL").unwrap();
		let (base_url, _) = admin_url.rsplit_once('/').unwrap();
		let base_url = base_url.to_string();

		Self { admin_url, base_url }
	}

	/// Run a statement that cannot be part of a transaction, e.g. `CREATE
	/// DATABASE`
	fn administer(&self, statement: &str) {
		let mut conn = PgConnection::establish(&self.admin_url)
			.expect("could not connect to the database server");

		diesel::sql_query(statement)
			.execute(&mut conn)
			.unwrap_or_else(|e| panic!("{statement} failed -- {e}"));
	}
}

/// Ids of the rows every test database starts out with
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub struct Fixtures {
	/// Ada and Grace, both active
	pub users:  Vec<i32>,
	/// Central (40/h, indoor), Panorama (25/h, outdoor), Training (15/h)
	pub courts: Vec<i32>,
	/// 09:00, 14:00 and 19:00, one hour each
	pub slots:  Vec<i32>,
}

/// A database that is dropped together with this value
pub struct TestDatabase {
	name:         String,
	pub pool:     DbPool,
	pub fixtures: Fixtures,
}

impl TestDatabase {
	/// Create a new database, run every migration and insert the fixtures
	///
	/// # Panics
	/// Panics if any of these steps fails
	pub async fn create() -> Self {
		let name = format!("courtbook_test_{}", Uuid::new_v4().simple());

		let statement = format!("CREATE DATABASE {name};");
		tokio::task::spawn_blocking(move || SERVER.administer(&statement))
			.await
			.unwrap();

		let manager = Manager::new(
			format!("{}/{}", SERVER.base_url, name),
			deadpool_diesel::Runtime::Tokio1,
		);
		let pool = Pool::builder(manager).max_size(8).build().unwrap();

		let conn = pool.get().await.unwrap();

		conn.interact(|conn| conn.run_pending_migrations(MIGRATIONS).map(|_| ()))
			.await
			.unwrap()
			.unwrap();

		let fixtures = insert_fixtures(&conn).await;

		drop(conn);

		Self { name, pool, fixtures }
	}
}

impl Drop for TestDatabase {
	fn drop(&mut self) {
		self.pool.close();

		SERVER.administer(&format!("DROP DATABASE {} WITH (FORCE);", self.name));
	}
}

fn hour(h: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, 0, 0).unwrap() }

fn court(name: &str, kind: CourtKind, hourly_price: f64) -> NewCourt {
	NewCourt {
		name: name.to_string(),
		kind,
		surface: Some("hardcourt".to_string()),
		hourly_price,
		location: None,
		description: None,
	}
}

async fn insert_fixtures(conn: &DbConn) -> Fixtures {
	let mut users = vec![];

	for (first_name, last_name, email) in [
		("Ada", "Lovelace", "ada@example.com"),
		("Grace", "Hopper", "grace@example.com"),
	] {
		let id = NewUser {
			first_name:  first_name.to_string(),
			last_name:   last_name.to_string(),
			email:       email.to_string(),
			phone:       None,
			skill_level: SkillLevel::Intermediate,
		}
		.insert(conn)
		.await
		.unwrap();

		users.push(id);
	}

	let courts = vec![
		court("Central", CourtKind::Indoor, 40.0),
		court("Panorama", CourtKind::Outdoor, 25.0),
		court("Training", CourtKind::Indoor, 15.0),
	];

	let slots = vec![
		NewTimeSlot { start_time: hour(9), end_time: hour(10) },
		NewTimeSlot { start_time: hour(14), end_time: hour(15) },
		NewTimeSlot { start_time: hour(19), end_time: hour(20) },
	];

	let (courts, slots) = conn
		.interact(move |conn| {
			let courts = diesel::insert_into(db::court::table)
				.values(&courts)
				.returning(db::court::id)
				.get_results::<i32>(conn)?;

			let slots = diesel::insert_into(db::time_slot::table)
				.values(&slots)
				.returning(db::time_slot::id)
				.get_results::<i32>(conn)?;

			Ok::<_, diesel::result::Error>((courts, slots))
		})
		.await
		.unwrap()
		.unwrap();

	Fixtures { users, courts, slots }
}
