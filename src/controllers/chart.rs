use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{DbConn, DbPool, Error};
use models::{CourtPopularity, MonthlyTrend, PeriodDistribution, PriceDemand};

use crate::Config;
use crate::schemas::ApiResponse;
use crate::schemas::chart::{
	AllChartsResponse,
	ChartResponse,
	PeriodPoint,
	PopularityPoint,
	PricePoint,
	TrendPoint,
};

async fn popularity_chart(
	conn: &DbConn,
) -> Result<ChartResponse<PopularityPoint>, Error> {
	let rows = CourtPopularity::get_all(conn).await?;

	Ok(ChartResponse::popularity(rows))
}

async fn trend_chart(
	conn: &DbConn,
	config: &Config,
) -> Result<ChartResponse<TrendPoint>, Error> {
	let rows = MonthlyTrend::get_all(conn).await?;

	Ok(ChartResponse::trend(rows, &config.surge_rule))
}

async fn distribution_chart(
	conn: &DbConn,
) -> Result<ChartResponse<PeriodPoint>, Error> {
	let rows = PeriodDistribution::get_all(conn).await?;

	Ok(ChartResponse::distribution(rows))
}

async fn price_demand_chart(
	conn: &DbConn,
) -> Result<ChartResponse<PricePoint>, Error> {
	let rows = PriceDemand::get_all(conn).await?;

	Ok(ChartResponse::price_demand(rows))
}

#[instrument(skip(pool))]
pub async fn get_bars_chart(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let chart = popularity_chart(&conn).await?;

	Ok((StatusCode::OK, Json(ApiResponse::data(chart))))
}

#[instrument(skip(pool, config))]
pub async fn get_lines_chart(
	State(pool): State<DbPool>,
	State(config): State<Config>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let chart = trend_chart(&conn, &config).await?;

	Ok((StatusCode::OK, Json(ApiResponse::data(chart))))
}

#[instrument(skip(pool))]
pub async fn get_pie_chart(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let chart = distribution_chart(&conn).await?;

	Ok((StatusCode::OK, Json(ApiResponse::data(chart))))
}

#[instrument(skip(pool))]
pub async fn get_scatter_chart(
	State(pool): State<DbPool>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let chart = price_demand_chart(&conn).await?;

	Ok((StatusCode::OK, Json(ApiResponse::data(chart))))
}

#[instrument(skip(pool, config))]
pub async fn get_all_charts(
	State(pool): State<DbPool>,
	State(config): State<Config>,
) -> Result<impl IntoResponse, Error> {
	let conn = pool.get().await?;

	let response = AllChartsResponse {
		bars:    popularity_chart(&conn).await?,
		lines:   trend_chart(&conn, &config).await?,
		pie:     distribution_chart(&conn).await?,
		scatter: price_demand_chart(&conn).await?,
	};

	Ok((StatusCode::OK, Json(ApiResponse::data(response))))
}
