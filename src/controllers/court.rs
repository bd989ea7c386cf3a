use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use common::{DbPool, Error};
use models::Court;
use validator::Validate;

use crate::schemas::court::CourtResponse;
use crate::schemas::{ApiResponse, IdPath};

#[instrument(skip(pool))]
pub async fn get_all_courts(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let courts = Court::get_all(&conn).await?;
	let response: Vec<CourtResponse> =
		courts.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn get_court(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	let court = Court::get_by_id(path.id, &conn).await?;
	let response: CourtResponse = court.into();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}
