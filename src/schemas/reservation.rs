use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use models::{CourtKind, NewReservation, Reservation, ReservationStatus};
use serde::{Deserialize, Serialize};
use validator::ValidationError;
use validator_derive::Validate;

/// A reservation flattened with the display fields of its relations
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
	pub id:               i32,
	pub user_id:          i32,
	pub user_name:        String,
	pub user_email:       String,
	pub court_id:         i32,
	pub court_name:       String,
	pub court_kind:       CourtKind,
	pub time_slot_id:     i32,
	pub start_time:       NaiveTime,
	pub end_time:         NaiveTime,
	pub reservation_date: NaiveDate,
	pub total_price:      f64,
	pub notes:            Option<String>,
	pub status:           ReservationStatus,
	pub created_at:       NaiveDateTime,
}

impl From<Reservation> for ReservationResponse {
	fn from(value: Reservation) -> Self {
		let r = value.reservation;

		Self {
			id:               r.id,
			user_id:          r.user_id,
			user_name:        format!(
				"{} {}",
				value.user.first_name, value.user.last_name
			),
			user_email:       value.user.email,
			court_id:         r.court_id,
			court_name:       value.court.name,
			court_kind:       value.court.kind,
			time_slot_id:     r.time_slot_id,
			start_time:       value.time_slot.start_time,
			end_time:         value.time_slot.end_time,
			reservation_date: r.reservation_date,
			total_price:      r.total_price,
			notes:            r.notes,
			status:           r.status,
			created_at:       r.created_at,
		}
	}
}

/// Reject dates before the current local day
fn not_in_past(date: &NaiveDate) -> Result<(), ValidationError> {
	if *date < Local::now().date_naive() {
		let mut err = ValidationError::new("date-in-past");
		err.message = Some("reservation date cannot be in the past".into());

		return Err(err);
	}

	Ok(())
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
	#[validate(range(
		min = 1,
		message = "user id must be a positive integer",
		code = "user-id-range"
	))]
	pub user_id:          i32,
	#[validate(range(
		min = 1,
		message = "court id must be a positive integer",
		code = "court-id-range"
	))]
	pub court_id:         i32,
	#[validate(range(
		min = 1,
		message = "time slot id must be a positive integer",
		code = "time-slot-id-range"
	))]
	pub time_slot_id:     i32,
	#[validate(custom(function = "not_in_past"))]
	pub reservation_date: NaiveDate,
	#[validate(range(
		exclusive_min = 0.0,
		message = "total price must be positive",
		code = "total-price-range"
	))]
	pub total_price:      f64,
	#[validate(length(
		max = 500,
		message = "notes can be at most 500 characters long",
		code = "notes-length"
	))]
	pub notes:            Option<String>,
}

impl CreateReservationRequest {
	/// New reservations always start out pending
	#[must_use]
	pub fn to_insertable(self) -> NewReservation {
		NewReservation {
			user_id:          self.user_id,
			court_id:         self.court_id,
			time_slot_id:     self.time_slot_id,
			reservation_date: self.reservation_date,
			total_price:      self.total_price,
			notes:            self.notes,
			status:           ReservationStatus::Pending,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct UpdateStatusRequest {
	pub status: ReservationStatus,
}
