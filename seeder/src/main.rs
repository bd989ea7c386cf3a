mod util;

use std::collections::HashSet;
use std::env;

use chrono::{Local, NaiveDate, NaiveTime, TimeDelta};
use clap::{Error, Parser};
use common::DbConn;
use deadpool_diesel::postgres::{Manager, Pool};
use diesel::prelude::*;
use fake::Fake;
use fake::faker::internet::raw::FreeEmailProvider;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use models::{
	CourtKind,
	NewCourt,
	NewReservation,
	NewTimeSlot,
	NewUser,
	ReservationStatus,
	SkillLevel,
};
use rand::seq::IndexedRandom;
use rand::{Rng, rng};

use crate::util::{
	Seeded,
	insert_chunked,
	io_error,
	occupied_slots,
	registered_emails,
};

const SKILL_LEVELS: [SkillLevel; 4] = [
	SkillLevel::Beginner,
	SkillLevel::Intermediate,
	SkillLevel::Advanced,
	SkillLevel::Professional,
];

#[derive(Parser, Debug)]
struct Opt {
	#[arg(long, short = 'u', default_value_t = 200)]
	users:        usize,
	#[arg(long, short = 'r', default_value_t = 2_000)]
	reservations: usize,
	/// How far back in time reservations are spread
	#[arg(long, short = 'm', default_value_t = 12)]
	months:       i64,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let cli = Opt::parse();
	let conn = get_conn().await;

	println!("Seeding courts and time slots…");
	let seeded = seed_catalog(&conn).await?;
	println!("Catalog: {seeded}");

	if cli.users > 0 {
		println!("Seeding {} users…", cli.users);
		let seeded = seed_users(&conn, cli.users).await?;
		println!("Users: {seeded}");
	}

	if cli.reservations > 0 {
		println!("Seeding {} reservations…", cli.reservations);
		let seeded =
			seed_reservations(&conn, cli.reservations, cli.months).await?;
		println!("Reservations: {seeded}");
	}

	Ok(())
}

/// Get a database connection from the pool
async fn get_conn() -> DbConn {
	let database_url = env::var("DATABASE_URL").expect("DATABASE_URL missing");

	let manager = Manager::new(database_url, deadpool_diesel::Runtime::Tokio1);
	let pool = Pool::builder(manager).build().expect("Failed to create pool");

	pool.get().await.expect("Failed to get a database connection")
}

fn court(
	name: &str,
	kind: CourtKind,
	surface: &str,
	hourly_price: f64,
	location: &str,
) -> NewCourt {
	NewCourt {
		name: name.to_string(),
		kind,
		surface: Some(surface.to_string()),
		hourly_price,
		location: Some(location.to_string()),
		description: None,
	}
}

/// Seed the fixed court catalog and hourly slots from 08:00 to 22:00
///
/// Tables that already hold rows are left alone.
async fn seed_catalog(conn: &DbConn) -> Result<Seeded, Error> {
	let (courts, slots) = conn
		.interact(|c| {
			let courts = db::court::table.count().get_result::<i64>(c)?;
			let slots = db::time_slot::table.count().get_result::<i64>(c)?;

			Ok::<_, diesel::result::Error>((courts, slots))
		})
		.await
		.map_err(io_error)?
		.map_err(io_error)?;

	let mut seeded = Seeded::default();

	if courts == 0 {
		let catalog = vec![
			court("Central Court", CourtKind::Indoor, "hardcourt", 40.0, "Hall A"),
			court("Panorama", CourtKind::Outdoor, "clay", 25.0, "North field"),
			court("Glass Box", CourtKind::Indoor, "synthetic grass", 35.0, "Hall B"),
			court("Riverside", CourtKind::Outdoor, "synthetic grass", 20.0, "South field"),
			court("Training Court", CourtKind::Indoor, "hardcourt", 15.0, "Hall A"),
			court("Sunset", CourtKind::Outdoor, "clay", 30.0, "West field"),
		];

		let courts = insert_chunked(conn, "courts", catalog, 64, |conn, chunk| {
			diesel::insert_into(db::court::table).values(chunk).execute(conn)
		})
		.await?;

		seeded.inserted += courts.inserted;
	}

	if slots == 0 {
		let catalog: Vec<NewTimeSlot> = (8..22)
			.filter_map(|hour| {
				Some(NewTimeSlot {
					start_time: NaiveTime::from_hms_opt(hour, 0, 0)?,
					end_time:   NaiveTime::from_hms_opt(hour + 1, 0, 0)?,
				})
			})
			.collect();

		let slots = insert_chunked(conn, "slots", catalog, 64, |conn, chunk| {
			diesel::insert_into(db::time_slot::table)
				.values(chunk)
				.execute(conn)
		})
		.await?;

		seeded.inserted += slots.inserted;
	}

	Ok(seeded)
}

/// Lowercase ascii letters of a name, usable in an email address
fn email_handle(name: &str) -> String {
	name.chars()
		.filter(char::is_ascii_alphabetic)
		.map(|c| c.to_ascii_lowercase())
		.collect()
}

/// Seed users with emails that are not registered yet
async fn seed_users(conn: &DbConn, count: usize) -> Result<Seeded, Error> {
	let mut emails = registered_emails(conn).await?;
	let mut rng = rng();
	let mut users = Vec::with_capacity(count);

	while users.len() < count {
		let first_name: String = FirstName(EN).fake();
		let last_name: String = LastName(EN).fake();

		let email = format!(
			"{}.{}{}@{}",
			email_handle(&first_name),
			email_handle(&last_name),
			rng.random_range(1..10_000),
			FreeEmailProvider(EN).fake::<String>(),
		);

		if !emails.insert(email.clone()) {
			continue;
		}

		let phone = rng.random_bool(0.7).then(|| {
			format!(
				"+32 4{:02} {:02} {:02} {:02}",
				rng.random_range(0..100),
				rng.random_range(0..100),
				rng.random_range(0..100),
				rng.random_range(0..100),
			)
		});

		users.push(NewUser {
			first_name,
			last_name,
			email,
			phone,
			skill_level: *SKILL_LEVELS
				.choose(&mut rng)
				.unwrap_or(&SkillLevel::Beginner),
		});
	}

	insert_chunked(conn, "users", users, 8192, |conn, chunk| {
		diesel::insert_into(db::app_user::table)
			.values(chunk)
			.on_conflict_do_nothing()
			.execute(conn)
	})
	.await
}

/// Rows a generated reservation may refer to
struct Targets {
	users:  Vec<i32>,
	/// Court ids with their hourly price
	courts: Vec<(i32, f64)>,
	slots:  Vec<i32>,
}

/// Draw up to `count` random reservations
///
/// Past reservations are mostly completed with some cancellations, a small
/// share lands in the coming two weeks as pending or confirmed. An active
/// reservation is only drawn for a court, slot and date missing from
/// `occupied`, which is updated accordingly.
fn plan_reservations<R: Rng>(
	rng: &mut R,
	targets: &Targets,
	occupied: &mut HashSet<(i32, i32, NaiveDate)>,
	count: usize,
	months: i64,
	today: NaiveDate,
) -> Vec<NewReservation> {
	let history_days = (months * 30).max(1);
	let mut reservations = Vec::with_capacity(count);

	// A fully booked upcoming window must not stall the run
	let mut attempts = count.saturating_mul(20);

	while reservations.len() < count && attempts > 0 {
		attempts -= 1;

		let (Some(&user_id), Some(&(court_id, hourly_price)), Some(&slot_id)) = (
			targets.users.choose(rng),
			targets.courts.choose(rng),
			targets.slots.choose(rng),
		) else {
			break;
		};

		let (reservation_date, status) = if rng.random_bool(0.05) {
			let date = today + TimeDelta::days(rng.random_range(0..14));
			let status = if rng.random_bool(0.5) {
				ReservationStatus::Pending
			} else {
				ReservationStatus::Confirmed
			};

			(date, status)
		} else {
			let date = today - TimeDelta::days(rng.random_range(1..=history_days));
			let status = if rng.random_bool(0.85) {
				ReservationStatus::Completed
			} else {
				ReservationStatus::Cancelled
			};

			(date, status)
		};

		if status.is_active()
			&& !occupied.insert((court_id, slot_id, reservation_date))
		{
			continue;
		}

		let notes = rng.random_bool(0.2).then(|| Sentence(EN, 3..8).fake());

		reservations.push(NewReservation {
			user_id,
			court_id,
			time_slot_id: slot_id,
			reservation_date,
			total_price: hourly_price,
			notes,
			status,
		});
	}

	reservations
}

/// Seed reservations spread over the past `months`
///
/// Slots already occupied in the database are never booked again.
async fn seed_reservations(
	conn: &DbConn,
	count: usize,
	months: i64,
) -> Result<Seeded, Error> {
	let targets = conn
		.interact(|c| {
			let users = db::app_user::table
				.select(db::app_user::id)
				.load::<i32>(c)?;
			let courts = db::court::table
				.select((db::court::id, db::court::hourly_price))
				.load::<(i32, f64)>(c)?;
			let slots = db::time_slot::table
				.select(db::time_slot::id)
				.load::<i32>(c)?;

			Ok::<_, diesel::result::Error>(Targets { users, courts, slots })
		})
		.await
		.map_err(io_error)?
		.map_err(io_error)?;

	if targets.users.is_empty()
		|| targets.courts.is_empty()
		|| targets.slots.is_empty()
	{
		return Err(io_error("users, courts and time slots must exist first"));
	}

	let mut occupied = occupied_slots(conn).await?;

	let reservations = plan_reservations(
		&mut rng(),
		&targets,
		&mut occupied,
		count,
		months,
		Local::now().date_naive(),
	);

	insert_chunked(conn, "reservations", reservations, 4096, |conn, chunk| {
		diesel::insert_into(db::reservation::table)
			.values(chunk)
			.on_conflict_do_nothing()
			.execute(conn)
	})
	.await
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn targets() -> Targets {
		Targets { users: vec![1], courts: vec![(1, 40.0)], slots: vec![1] }
	}

	#[test]
	fn occupied_slots_are_not_booked_again() {
		let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

		let mut occupied: HashSet<_> = (0..14)
			.map(|day| (1, 1, today + TimeDelta::days(day)))
			.collect();

		let planned = plan_reservations(
			&mut StdRng::seed_from_u64(7),
			&targets(),
			&mut occupied,
			500,
			3,
			today,
		);

		assert_eq!(planned.len(), 500);
		assert!(planned.iter().all(|r| !r.status.is_active()));
		assert!(planned.iter().all(|r| r.reservation_date < today));
	}

	#[test]
	fn active_reservations_never_share_a_slot() {
		let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
		let mut occupied = HashSet::new();

		let planned = plan_reservations(
			&mut StdRng::seed_from_u64(11),
			&targets(),
			&mut occupied,
			2_000,
			1,
			today,
		);

		let active: Vec<_> = planned
			.iter()
			.filter(|r| r.status.is_active())
			.map(|r| r.reservation_date)
			.collect();
		let unique: HashSet<_> = active.iter().collect();

		assert!(!active.is_empty());
		assert_eq!(active.len(), unique.len());
	}

	#[test]
	fn email_handles_are_plain_ascii() {
		assert_eq!(email_handle("O'Connor"), "oconnor");
		assert_eq!(email_handle("Anne-Marie"), "annemarie");
	}
}
