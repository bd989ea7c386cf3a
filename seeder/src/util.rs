use std::collections::HashSet;
use std::fmt::{self, Display};

use chrono::NaiveDate;
use clap::Error;
use clap::error::ErrorKind;
use common::DbConn;
use db::ReservationStatus;
use diesel::PgConnection;
use diesel::prelude::*;

/// Wrap any failure in a clap I/O error
pub fn io_error(err: impl Display) -> Error { Error::raw(ErrorKind::Io, err) }

/// Outcome of a single seeding step
#[derive(Clone, Copy, Debug, Default)]
pub struct Seeded {
	pub inserted: usize,
	pub skipped:  usize,
}

impl Display for Seeded {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} inserted, {} skipped", self.inserted, self.skipped)
	}
}

/// Insert `rows` in chunks of `chunk_size`
///
/// `insert` is expected to ignore rows colliding with a unique key, those
/// are counted as skipped instead of aborting the run.
pub async fn insert_chunked<T, F>(
	conn: &DbConn,
	label: &str,
	mut rows: Vec<T>,
	chunk_size: usize,
	insert: F,
) -> Result<Seeded, Error>
where
	T: Send + 'static,
	F: Fn(&mut PgConnection, &[T]) -> QueryResult<usize> + Send + Copy + 'static,
{
	let total = rows.len();
	let mut seeded = Seeded::default();

	while !rows.is_empty() {
		let chunk: Vec<T> = rows.drain(..chunk_size.min(rows.len())).collect();
		let chunk_len = chunk.len();

		let inserted = conn
			.interact(move |c| insert(c, &chunk))
			.await
			.map_err(io_error)?
			.map_err(io_error)?;

		seeded.inserted += inserted;
		seeded.skipped += chunk_len.saturating_sub(inserted);

		println!(
			"{label}: {}/{total} written",
			seeded.inserted + seeded.skipped
		);
	}

	Ok(seeded)
}

/// Emails that are already registered
pub async fn registered_emails(conn: &DbConn) -> Result<HashSet<String>, Error> {
	let emails = conn
		.interact(|c| {
			db::app_user::table
				.select(db::app_user::email)
				.load::<String>(c)
		})
		.await
		.map_err(io_error)?
		.map_err(io_error)?;

	Ok(emails.into_iter().collect())
}

/// Court, slot and date of every reservation currently occupying a slot
pub async fn occupied_slots(
	conn: &DbConn,
) -> Result<HashSet<(i32, i32, NaiveDate)>, Error> {
	let occupied = conn
		.interact(|c| {
			use db::reservation::dsl::*;

			reservation
				.filter(status.eq_any(ReservationStatus::ACTIVE))
				.select((court_id, time_slot_id, reservation_date))
				.load::<(i32, i32, NaiveDate)>(c)
		})
		.await
		.map_err(io_error)?
		.map_err(io_error)?;

	Ok(occupied.into_iter().collect())
}
