use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
	Connected,
	Disconnected,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
	pub status:         String,
	pub timestamp:      NaiveDateTime,
	pub database:       DatabaseStatus,
	pub uptime_seconds: u64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EndpointInfo {
	pub method:      String,
	pub path:        String,
	pub description: String,
}

impl EndpointInfo {
	pub fn new(method: &str, path: &str, description: &str) -> Self {
		Self {
			method:      method.to_string(),
			path:        path.to_string(),
			description: description.to_string(),
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InfoResponse {
	pub name:         String,
	pub version:      String,
	pub description:  String,
	pub technologies: Vec<String>,
	pub endpoints:    Vec<EndpointInfo>,
}
