use models::Summary;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
	pub total_users:        i64,
	pub total_courts:       i64,
	pub total_reservations: i64,
	pub total_revenue:      f64,
	pub average_price:      f64,
}

impl From<Summary> for SummaryResponse {
	fn from(value: Summary) -> Self {
		Self {
			total_users:        value.total_users,
			total_courts:       value.total_courts,
			total_reservations: value.total_reservations,
			total_revenue:      value.total_revenue,
			average_price:      value.average_price,
		}
	}
}
