use chrono::{NaiveDate, NaiveDateTime};
use common::{DbConn, Error, SLOT_TAKEN_MESSAGE};
use db::{ReservationStatus, app_user, court, reservation, time_slot};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{Court, TimeSlot, User};

pub type JoinedReservationData = (PrimitiveReservation, User, Court, TimeSlot);

#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = reservation)]
#[diesel(check_for_backend(Pg))]
pub struct PrimitiveReservation {
	pub id:               i32,
	pub user_id:          i32,
	pub court_id:         i32,
	pub time_slot_id:     i32,
	pub reservation_date: NaiveDate,
	pub total_price:      f64,
	pub notes:            Option<String>,
	pub status:           ReservationStatus,
	pub created_at:       NaiveDateTime,
}

/// A reservation together with the user, court and slot it refers to
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Reservation {
	pub reservation: PrimitiveReservation,
	pub user:        User,
	pub court:       Court,
	pub time_slot:   TimeSlot,
}

impl From<JoinedReservationData> for Reservation {
	fn from(data: JoinedReservationData) -> Self {
		Self {
			reservation: data.0,
			user:        data.1,
			court:       data.2,
			time_slot:   data.3,
		}
	}
}

impl Reservation {
	/// Build a query joining every relation of a reservation
	#[diesel::dsl::auto_type(no_type_alias)]
	fn joined_query() -> _ {
		reservation::table
			.inner_join(app_user::table)
			.inner_join(court::table)
			.inner_join(time_slot::table)
	}

	/// Get all [`Reservation`]s, newest first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let reservations = conn
			.interact(move |conn| {
				query
					.order(reservation::id.desc())
					.select((
						PrimitiveReservation::as_select(),
						User::as_select(),
						Court::as_select(),
						TimeSlot::as_select(),
					))
					.get_results::<JoinedReservationData>(conn)
			})
			.await??
			.into_iter()
			.map(Into::into)
			.collect();

		Ok(reservations)
	}

	/// Get all the [`Reservation`]s of a specific [`User`], latest dates
	/// first and in slot order within a day
	#[instrument(skip(conn))]
	pub async fn for_user(u_id: i32, conn: &DbConn) -> Result<Vec<Self>, Error> {
		let query = Self::joined_query();

		let reservations = conn
			.interact(move |conn| {
				query
					.filter(reservation::user_id.eq(u_id))
					.order((
						reservation::reservation_date.desc(),
						time_slot::start_time.asc(),
					))
					.select((
						PrimitiveReservation::as_select(),
						User::as_select(),
						Court::as_select(),
						TimeSlot::as_select(),
					))
					.get_results::<JoinedReservationData>(conn)
			})
			.await??
			.into_iter()
			.map(Into::into)
			.collect();

		Ok(reservations)
	}

	/// Get a [`Reservation`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(r_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let query = Self::joined_query();

		let data = conn
			.interact(move |conn| {
				query
					.filter(reservation::id.eq(r_id))
					.select((
						PrimitiveReservation::as_select(),
						User::as_select(),
						Court::as_select(),
						TimeSlot::as_select(),
					))
					.get_result::<JoinedReservationData>(conn)
					.optional()
			})
			.await??;

		data.map(Into::into).ok_or_else(|| {
			Error::NotFound(format!("reservation with id {r_id}"))
		})
	}

	/// Count the active reservations occupying a court slot on a given date
	fn count_active(
		conn: &mut PgConnection,
		c_id: i32,
		s_id: i32,
		date: NaiveDate,
	) -> QueryResult<i64> {
		use self::reservation::dsl::*;

		reservation
			.filter(court_id.eq(c_id))
			.filter(time_slot_id.eq(s_id))
			.filter(reservation_date.eq(date))
			.filter(status.eq_any(ReservationStatus::ACTIVE))
			.count()
			.get_result(conn)
	}

	/// Check whether a court slot is free on a given date
	#[instrument(skip(conn))]
	pub async fn is_available(
		c_id: i32,
		s_id: i32,
		date: NaiveDate,
		conn: &DbConn,
	) -> Result<bool, Error> {
		let occupied = conn
			.interact(move |conn| Self::count_active(conn, c_id, s_id, date))
			.await??;

		Ok(occupied == 0)
	}

	/// Overwrite the status of a [`Reservation`]
	///
	/// Any status may follow any other. Moving a reservation back to an
	/// active status fails with [`Error::Conflict`] when its slot has been
	/// booked again in the meantime.
	#[instrument(skip(conn))]
	pub async fn update_status(
		r_id: i32,
		new_status: ReservationStatus,
		conn: &DbConn,
	) -> Result<(), Error> {
		let updated = conn
			.interact(move |conn| {
				use self::reservation::dsl::*;

				diesel::update(reservation.find(r_id))
					.set(status.eq(new_status))
					.execute(conn)
			})
			.await??;

		if updated == 0 {
			return Err(Error::NotFound(format!("reservation with id {r_id}")));
		}

		info!("set status of reservation {r_id} to {new_status}");

		Ok(())
	}

	/// Permanently delete a [`Reservation`] given its id
	#[instrument(skip(conn))]
	pub async fn delete_by_id(r_id: i32, conn: &DbConn) -> Result<(), Error> {
		conn.interact(move |conn| {
			conn.transaction::<_, Error, _>(|conn| {
				use self::reservation::dsl::*;

				let existing = reservation
					.find(r_id)
					.select(id)
					.get_result::<i32>(conn)
					.optional()?;

				if existing.is_none() {
					return Err(Error::NotFound(format!(
						"reservation with id {r_id}"
					)));
				}

				diesel::delete(reservation.find(r_id)).execute(conn)?;

				Ok(())
			})
		})
		.await??;

		info!("deleted reservation with id {r_id}");

		Ok(())
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = reservation)]
#[diesel(check_for_backend(Pg))]
pub struct NewReservation {
	pub user_id:          i32,
	pub court_id:         i32,
	pub time_slot_id:     i32,
	pub reservation_date: NaiveDate,
	pub total_price:      f64,
	pub notes:            Option<String>,
	pub status:           ReservationStatus,
}

impl NewReservation {
	/// Insert this [`NewReservation`] and return the id of the new row
	///
	/// The availability check and the insert share a transaction, and the
	/// `reservation_active_slot_key` index rejects whatever slips through
	/// concurrently. Both surface as [`Error::Conflict`].
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<i32, Error> {
		let r_id = conn
			.interact(move |conn| {
				conn.transaction::<_, Error, _>(|conn| {
					if self.status.is_active() {
						let occupied = Reservation::count_active(
							conn,
							self.court_id,
							self.time_slot_id,
							self.reservation_date,
						)?;

						if occupied > 0 {
							return Err(Error::Conflict(
								SLOT_TAKEN_MESSAGE.to_string(),
							));
						}
					}

					let r_id = diesel::insert_into(reservation::table)
						.values(&self)
						.returning(reservation::id)
						.get_result::<i32>(conn)?;

					Ok(r_id)
				})
			})
			.await??;

		info!("created reservation with id {r_id}");

		Ok(r_id)
	}
}
