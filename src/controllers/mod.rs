//! Defines controller functions that correspond to individual routes

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;
use common::{DbPool, ErrorBody};
use diesel::{RunQueryDsl, sql_query};

use crate::StartTime;
use crate::schemas::ApiResponse;
use crate::schemas::system::{
	DatabaseStatus,
	EndpointInfo,
	HealthResponse,
	InfoResponse,
};

pub mod chart;
pub mod court;
pub mod reservation;
pub mod statistics;
pub mod time_slot;
pub mod user;

/// Report whether the webserver is up and the database reachable
///
/// Always answers `200 OK`, an unreachable database is only reported in the
/// body.
#[instrument(skip(pool))]
pub async fn health(
	State(pool): State<DbPool>,
	State(started_at): State<StartTime>,
) -> impl IntoResponse {
	let database = match pool.get().await {
		Ok(conn) => {
			match conn
				.interact(|conn| sql_query("SELECT 1").execute(conn))
				.await
			{
				Ok(Ok(_)) => DatabaseStatus::Connected,
				_ => DatabaseStatus::Disconnected,
			}
		},
		Err(e) => {
			warn!("health check could not reach the database -- {e:?}");

			DatabaseStatus::Disconnected
		},
	};

	let response = HealthResponse {
		status: "healthy".to_string(),
		timestamp: Utc::now().naive_utc(),
		database,
		uptime_seconds: started_at.uptime_seconds(),
	};

	(StatusCode::OK, Json(ApiResponse::data(response)))
}

/// Describe the service and the routes it exposes
pub async fn info() -> impl IntoResponse {
	let endpoints = vec![
		EndpointInfo::new("GET", "/users", "list active users"),
		EndpointInfo::new("POST", "/users", "register a user"),
		EndpointInfo::new("GET", "/users/{id}", "get a user"),
		EndpointInfo::new("PUT", "/users/{id}", "replace a user"),
		EndpointInfo::new(
			"GET",
			"/users/{id}/reservations",
			"list the reservations of a user",
		),
		EndpointInfo::new("GET", "/courts", "list active courts"),
		EndpointInfo::new("GET", "/courts/{id}", "get a court"),
		EndpointInfo::new("GET", "/slots", "list active time slots"),
		EndpointInfo::new(
			"GET",
			"/slots/available?court={id}&date={YYYY-MM-DD}",
			"list the free time slots of a court on a date",
		),
		EndpointInfo::new("GET", "/reservations", "list reservations"),
		EndpointInfo::new("POST", "/reservations", "book a court"),
		EndpointInfo::new("GET", "/reservations/{id}", "get a reservation"),
		EndpointInfo::new(
			"PUT",
			"/reservations/{id}/status",
			"change the status of a reservation",
		),
		EndpointInfo::new(
			"DELETE",
			"/reservations/{id}",
			"permanently delete a reservation",
		),
		EndpointInfo::new("GET", "/charts/bars", "court popularity"),
		EndpointInfo::new("GET", "/charts/lines", "monthly trend"),
		EndpointInfo::new("GET", "/charts/pie", "time of day distribution"),
		EndpointInfo::new("GET", "/charts/scatter", "price against demand"),
		EndpointInfo::new("GET", "/charts/all", "every chart at once"),
		EndpointInfo::new("GET", "/stats/summary", "headline figures"),
		EndpointInfo::new("GET", "/health", "service health"),
		EndpointInfo::new("GET", "/info", "this document"),
	];

	let response = InfoResponse {
		name: env!("CARGO_PKG_NAME").to_string(),
		version: env!("CARGO_PKG_VERSION").to_string(),
		description: "Court booking service with reservation statistics"
			.to_string(),
		technologies: ["axum", "tokio", "diesel", "postgresql", "tracing"]
			.into_iter()
			.map(ToString::to_string)
			.collect(),
		endpoints,
	};

	(StatusCode::OK, Json(ApiResponse::data(response)))
}

/// Answer requests for routes that do not exist
pub async fn endpoint_not_found() -> impl IntoResponse {
	let body = ErrorBody {
		success: false,
		message: "endpoint not found".to_string(),
		errors:  None,
	};

	(StatusCode::NOT_FOUND, Json(body))
}
