use std::fmt;

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::SkillLevel"]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
	#[default]
	Beginner,
	Intermediate,
	Advanced,
	Professional,
}

#[derive(Clone, Copy, DbEnum, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[ExistingTypePath = "crate::sql_types::CourtKind"]
#[serde(rename_all = "lowercase")]
pub enum CourtKind {
	Indoor,
	Outdoor,
}

#[derive(
	Clone, Copy, DbEnum, Debug, Default, Deserialize, PartialEq, Eq, Serialize,
)]
#[ExistingTypePath = "crate::sql_types::ReservationStatus"]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
	#[default]
	Pending,
	Confirmed,
	Completed,
	Cancelled,
	Deleted,
}

impl ReservationStatus {
	/// Statuses that occupy a court slot
	pub const ACTIVE: [Self; 2] = [Self::Pending, Self::Confirmed];

	#[must_use]
	pub fn is_active(self) -> bool { Self::ACTIVE.contains(&self) }
}

impl fmt::Display for ReservationStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Pending => "pending",
			Self::Confirmed => "confirmed",
			Self::Completed => "completed",
			Self::Cancelled => "cancelled",
			Self::Deleted => "deleted",
		};

		f.write_str(name)
	}
}
