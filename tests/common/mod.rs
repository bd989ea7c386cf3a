use axum_test::{TestResponse, TestServer};
use chrono::{Local, NaiveDate, TimeDelta};
use common::DbConn;
use courtbook::{AppState, Config, StartTime, routes};
use models::{NewReservation, ReservationStatus};
use serde_json::{Value, json};

mod test_db;

#[allow(unused_imports)]
pub use test_db::{Fixtures, TestDatabase};

#[allow(dead_code)]
pub struct TestEnv {
	pub app:      TestServer,
	pub fixtures: Fixtures,
	pub database: TestDatabase,
}

impl TestEnv {
	/// Get a test environment with a fresh database for running tests
	///
	/// # Panics
	/// Panics if building a test server or seeding the database fails
	pub async fn new() -> Self {
		let database = TestDatabase::create().await;

		let state = AppState {
			config:        Config::from_env(),
			database_pool: database.pool.clone(),
			started_at:    StartTime::now(),
		};
		let app = routes::get_app_router(state);

		let test_server = TestServer::builder().build(app).unwrap();

		TestEnv {
			app: test_server,
			fixtures: database.fixtures.clone(),
			database,
		}
	}

	/// Get a connection to the test database
	#[allow(dead_code)]
	pub async fn conn(&self) -> DbConn {
		self.database.pool.get().await.unwrap()
	}

	/// Body of a valid booking request for tomorrow
	#[allow(dead_code)]
	#[must_use]
	pub fn booking(&self, court: i32, slot: i32) -> Value {
		json!({
			"userId": self.fixtures.users[0],
			"courtId": court,
			"timeSlotId": slot,
			"reservationDate": tomorrow().to_string(),
			"totalPrice": 40.0,
			"notes": "doubles match",
		})
	}

	/// Post a booking request
	#[allow(dead_code)]
	pub async fn book(&self, body: &Value) -> TestResponse {
		self.app.post("/reservations").json(body).await
	}

	/// Insert a reservation directly, bypassing request validation
	#[allow(dead_code)]
	pub async fn insert_reservation(
		&self,
		court: i32,
		slot: i32,
		date: NaiveDate,
		status: ReservationStatus,
	) -> i32 {
		let conn = self.conn().await;

		NewReservation {
			user_id: self.fixtures.users[0],
			court_id: court,
			time_slot_id: slot,
			reservation_date: date,
			total_price: 25.0,
			notes: None,
			status,
		}
		.insert(&conn)
		.await
		.unwrap()
	}
}

#[allow(dead_code)]
#[must_use]
pub fn tomorrow() -> NaiveDate { Local::now().date_naive() + TimeDelta::days(1) }

#[allow(dead_code)]
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
