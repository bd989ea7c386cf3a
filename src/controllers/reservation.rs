use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use common::{DbPool, Error};
use models::Reservation;
use validator::Validate;

use crate::schemas::reservation::{
	CreateReservationRequest,
	ReservationResponse,
	UpdateStatusRequest,
};
use crate::schemas::{ApiResponse, CreatedResponse, IdPath};

#[instrument(skip(pool))]
pub async fn get_all_reservations(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let reservations = Reservation::get_all(&conn).await?;
	let response: Vec<ReservationResponse> =
		reservations.into_iter().map(Into::into).collect();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn get_reservation(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	let reservation = Reservation::get_by_id(path.id, &conn).await?;
	let response: ReservationResponse = reservation.into();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}

#[instrument(skip(pool))]
pub async fn create_reservation(
	State(pool): State<DbPool>,
	WithRejection(Json(request), _): WithRejection<
		Json<CreateReservationRequest>,
		Error,
	>,
) -> Result<impl IntoResponse, Error> {
	request.validate()?;

	let conn = pool.get().await?;

	let id = request.to_insertable().insert(&conn).await?;
	let response = ApiResponse::with_message(
		CreatedResponse { id },
		"reservation created successfully",
	);

	Ok((StatusCode::CREATED, Json(response)))
}

#[instrument(skip(pool))]
pub async fn update_reservation_status(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
	WithRejection(Json(request), _): WithRejection<
		Json<UpdateStatusRequest>,
		Error,
	>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	Reservation::update_status(path.id, request.status, &conn).await?;

	Ok((
		StatusCode::OK,
		Json(ApiResponse::message("reservation status updated successfully")),
	))
}

#[instrument(skip(pool))]
pub async fn delete_reservation(
	State(pool): State<DbPool>,
	WithRejection(Path(path), _): WithRejection<Path<IdPath>, Error>,
) -> Result<impl IntoResponse, Error> {
	path.validate()?;

	let conn = pool.get().await?;

	Reservation::delete_by_id(path.id, &conn).await?;

	Ok((
		StatusCode::OK,
		Json(ApiResponse::message("reservation deleted successfully")),
	))
}
