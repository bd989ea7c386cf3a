use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbPool, Error};
use models::Summary;

use crate::schemas::ApiResponse;
use crate::schemas::statistics::SummaryResponse;

#[instrument(skip(pool))]
pub async fn get_summary(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let summary = Summary::get(&conn).await?;
	let response: SummaryResponse = summary.into();

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}
