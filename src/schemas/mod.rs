//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};
use validator_derive::Validate;

pub mod chart;
pub mod court;
pub mod reservation;
pub mod statistics;
pub mod system;
pub mod time_slot;
pub mod user;

/// Envelope wrapping every successful response
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiResponse<T> {
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub data:    Option<T>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn data(data: T) -> Self {
		Self { success: true, data: Some(data), message: None }
	}

	pub fn with_message(data: T, message: impl Into<String>) -> Self {
		Self { success: true, data: Some(data), message: Some(message.into()) }
	}
}

impl ApiResponse<()> {
	pub fn message(message: impl Into<String>) -> Self {
		Self { success: true, data: None, message: Some(message.into()) }
	}
}

/// Body of a `201 Created` response
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CreatedResponse {
	pub id: i32,
}

/// Path segment identifying a single resource
#[derive(Clone, Copy, Debug, Deserialize, Serialize, Validate)]
pub struct IdPath {
	#[validate(range(
		min = 1,
		message = "id must be a positive integer",
		code = "id-range"
	))]
	pub id: i32,
}
