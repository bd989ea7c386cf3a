use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use common::{DbPool, Error};
use models::{Reservation, User};
use validator::Validate;

use crate::schemas::reservation::ReservationResponse;
use crate::schemas::user::{UserRequest, UserResponse};
use crate::schemas::{ApiResponse, CreatedResponse, IdPath};

#[instrument(skip(pool))]
pub async fn get_all_users(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let users = User::get_all(&conn).await?;
	let response: Vec<UserResponse> =
		users.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn get_user(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	let user = User::get_by_id(path.id, &conn).await?;
	let response: UserResponse = user.into();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn create_user(
	State(pool): State<DbPool>,
	WithRejection(Json(request), _): WithRejection<Json<UserRequest>, Error>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let id = request.to_insertable().insert(&conn).await?;
	let response = ApiResponse::with_message(
		CreatedResponse { id },
		"user created successfully",
	);

	Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(pool))]
pub async fn update_user(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
	WithRejection(Json(request), _): WithRejection<Json<UserRequest>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;
	request.validate()?;

	let conn = pool.get().await?;

	request.to_update().apply_to(path.id, &conn).await?;

	Ok((
		StatusCode::OK,
		Json(ApiResponse::message("user updated successfully")),
	))
}

#[instrument(skip(pool))]
pub async fn get_user_reservations(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	// Unknown users are a 404, not an empty list
	User::get_by_id(path.id, &conn).await?;

	let reservations = Reservation::for_user(path.id, &conn).await?;
	let response: Vec<ReservationResponse> =
		reservations.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}
