use chrono::{NaiveDate, NaiveTime};
use models::TimeSlot;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotResponse {
	pub id:         i32,
	pub start_time: NaiveTime,
	pub end_time:   NaiveTime,
}

impl From<TimeSlot> for TimeSlotResponse {
	fn from(value: TimeSlot) -> Self {
		Self {
			id:         value.id,
			start_time: value.start_time,
			end_time:   value.end_time,
		}
	}
}

/// Query of `GET /slots/available`
#[derive(Clone, Copy, Debug, Deserialize, Serialize, Validate)]
pub struct AvailableSlotsQuery {
	#[validate(range(
		min = 1,
		message = "court must be a positive integer",
		code = "court-range"
	))]
	pub court: i32,
	pub date:  NaiveDate,
}
