use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use common::{DbPool, Error};
use models::{Court, TimeSlot};
use validator::Validate;

use crate::schemas::ApiResponse;
use crate::schemas::time_slot::{AvailableSlotsQuery, TimeSlotResponse};

#[instrument(skip(pool))]
pub async fn get_all_slots(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let slots = TimeSlot::get_all(&conn).await?;
	let response: Vec<TimeSlotResponse> =
		slots.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn get_available_slots(
	State(pool): State<DbPool>,
	WithRejection(Query(query), _): WithRejection<
		Query<AvailableSlotsQuery>,
		Error,
	>,
) -> Result<impl IntoResponse, Error> {
	query.validate()?;

	let conn = pool.get().await?;

	Court::get_by_id(query.court, &conn).await?;

	let slots = TimeSlot::available_for(query.court, query.date, &conn).await?;
	let response: Vec<TimeSlotResponse> =
		slots.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}
