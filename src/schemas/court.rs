use models::{Court, CourtKind};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResponse {
	pub id:           i32,
	pub name:         String,
	pub kind:         CourtKind,
	pub surface:      Option<String>,
	pub hourly_price: f64,
	pub location:     Option<String>,
	pub description:  Option<String>,
}

impl From<Court> for CourtResponse {
	fn from(value: Court) -> Self {
		Self {
			id:           value.id,
			name:         value.name,
			kind:         value.kind,
			surface:      value.surface,
			hourly_price: value.hourly_price,
			location:     value.location,
			description:  value.description,
		}
	}
}
