use chrono::{NaiveDate, NaiveTime};
use common::{DbConn, Error};
use db::{ReservationStatus, reservation, time_slot};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A daily time interval shared by every court
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = time_slot)]
#[diesel(check_for_backend(Pg))]
pub struct TimeSlot {
	pub id:         i32,
	pub start_time: NaiveTime,
	pub end_time:   NaiveTime,
	pub is_active:  bool,
}

impl TimeSlot {
	/// Get all active [`TimeSlot`]s in chronological order
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let slots = conn
			.interact(|conn| {
				use self::time_slot::dsl::*;

				time_slot
					.filter(is_active.eq(true))
					.order(start_time.asc())
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(slots)
	}

	/// Get the active [`TimeSlot`]s that have no active reservation for the
	/// given court on the given date
	#[instrument(skip(conn))]
	pub async fn available_for(
		c_id: i32,
		date: NaiveDate,
		conn: &DbConn,
	) -> Result<Vec<Self>, Error> {
		let slots = conn
			.interact(move |conn| {
				let occupied = reservation::table
					.filter(reservation::court_id.eq(c_id))
					.filter(reservation::reservation_date.eq(date))
					.filter(reservation::status.eq_any(ReservationStatus::ACTIVE))
					.select(reservation::time_slot_id);

				time_slot::table
					.filter(time_slot::is_active.eq(true))
					.filter(diesel::dsl::not(time_slot::id.eq_any(occupied)))
					.order(time_slot::start_time.asc())
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(slots)
	}
}

/// Catalog entry used when seeding time slots
#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = time_slot)]
#[diesel(check_for_backend(Pg))]
pub struct NewTimeSlot {
	pub start_time: NaiveTime,
	pub end_time:   NaiveTime,
}
