use axum::http::StatusCode;
use courtbook::schemas::ApiResponse;
use courtbook::schemas::chart::{
	AllChartsResponse,
	ChartKind,
	ChartResponse,
	PeriodPoint,
	PopularityPoint,
	PricePoint,
	TrendPoint,
};
use courtbook::schemas::statistics::SummaryResponse;
use insights::{NO_DISTRIBUTION_DATA, NO_TREND_DATA};
use models::{DayPeriod, ReservationStatus};
use pretty_assertions::assert_eq;

mod common;

use common::{TestEnv, date};

/// Five completed reservations over July and August 2024 and one cancelled
/// reservation that must be ignored
async fn seed_history(env: &TestEnv) {
	let [central, panorama, _] = env.fixtures.courts[..] else {
		panic!("expected three courts");
	};
	let [morning, afternoon, evening] = env.fixtures.slots[..] else {
		panic!("expected three slots");
	};

	for (court, slot, day, status) in [
		(central, morning, date(2024, 7, 10), ReservationStatus::Completed),
		(central, evening, date(2024, 7, 11), ReservationStatus::Completed),
		(central, morning, date(2024, 8, 5), ReservationStatus::Completed),
		(panorama, morning, date(2024, 8, 6), ReservationStatus::Completed),
		(central, afternoon, date(2024, 8, 7), ReservationStatus::Completed),
		(panorama, afternoon, date(2024, 8, 8), ReservationStatus::Cancelled),
	] {
		env.insert_reservation(court, slot, day, status).await;
	}
}

#[tokio::test(flavor = "multi_thread")]
async fn bars_chart() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/charts/bars").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let chart = response
		.json::<ApiResponse<ChartResponse<PopularityPoint>>>()
		.data
		.unwrap();

	let counts: Vec<(String, i64)> = chart
		.data
		.iter()
		.map(|p| (p.court.clone(), p.total_reservations))
		.collect();

	assert_eq!(chart.kind, ChartKind::Bars);
	assert_eq!(
		counts,
		vec![
			("Central".to_string(), 4),
			("Panorama".to_string(), 1),
			("Training".to_string(), 0),
		]
	);
	assert!((chart.data[0].total_revenue - 100.0).abs() < 1e-9);
	assert_eq!(
		chart.interpretation,
		"The most popular court is 'Central' with 4 reservations, while \
		 'Training' has the lowest demand with 0 reservations. This points to \
		 a clear user preference for certain facilities."
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn lines_chart() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/charts/lines").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let chart = response
		.json::<ApiResponse<ChartResponse<TrendPoint>>>()
		.data
		.unwrap();

	let months: Vec<(String, i64)> = chart
		.data
		.iter()
		.map(|p| (p.month_name.clone(), p.total_reservations))
		.collect();

	assert_eq!(chart.kind, ChartKind::Lines);
	assert_eq!(
		months,
		vec![("July".to_string(), 2), ("August".to_string(), 3)]
	);
	assert!(chart.interpretation.contains("50.0% in August 2024"));
	assert!(chart.interpretation.ends_with(
		"The overall trend goes from 2 reservations in July 2024 to 3 in \
		 August 2024."
	));
}

#[tokio::test(flavor = "multi_thread")]
async fn pie_chart() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/charts/pie").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let chart = response
		.json::<ApiResponse<ChartResponse<PeriodPoint>>>()
		.data
		.unwrap();

	let periods: Vec<(DayPeriod, i64)> = chart
		.data
		.iter()
		.map(|p| (p.period, p.total_reservations))
		.collect();

	assert_eq!(chart.kind, ChartKind::Pie);
	assert_eq!(
		periods,
		vec![
			(DayPeriod::Morning, 3),
			(DayPeriod::Afternoon, 1),
			(DayPeriod::Evening, 1),
		]
	);
	assert!(
		chart
			.interpretation
			.starts_with("The morning period accounts for 60.0% of all")
	);
}

#[tokio::test(flavor = "multi_thread")]
async fn scatter_chart() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/charts/scatter").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let chart = response
		.json::<ApiResponse<ChartResponse<PricePoint>>>()
		.data
		.unwrap();

	let prices: Vec<f64> = chart.data.iter().map(|p| p.hourly_price).collect();

	assert_eq!(chart.kind, ChartKind::Scatter);
	assert_eq!(prices, vec![15.0, 25.0, 40.0]);
	assert!(chart.correlation.unwrap() > 0.9);
	assert!(chart.interpretation.contains("moderate positive"));
}

#[tokio::test(flavor = "multi_thread")]
async fn all_charts() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/charts/all").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let charts = response.json::<ApiResponse<AllChartsResponse>>().data.unwrap();

	assert_eq!(charts.bars.kind, ChartKind::Bars);
	assert_eq!(charts.lines.kind, ChartKind::Lines);
	assert_eq!(charts.pie.kind, ChartKind::Pie);
	assert_eq!(charts.scatter.kind, ChartKind::Scatter);
	assert_eq!(charts.lines.data.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn charts_without_history() {
	let env = TestEnv::new().await;

	let lines = env
		.app
		.get("/charts/lines")
		.await
		.json::<ApiResponse<ChartResponse<TrendPoint>>>()
		.data
		.unwrap();

	assert!(lines.data.is_empty());
	assert_eq!(lines.interpretation, NO_TREND_DATA);

	let pie = env
		.app
		.get("/charts/pie")
		.await
		.json::<ApiResponse<ChartResponse<PeriodPoint>>>()
		.data
		.unwrap();

	assert_eq!(pie.interpretation, NO_DISTRIBUTION_DATA);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_chart() {
	let env = TestEnv::new().await;

	let response = env.app.get("/charts/radar").await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn summary() {
	let env = TestEnv::new().await;
	seed_history(&env).await;

	let response = env.app.get("/stats/summary").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let summary = response.json::<ApiResponse<SummaryResponse>>().data.unwrap();

	assert_eq!(summary.total_users, 2);
	assert_eq!(summary.total_courts, 3);
	assert_eq!(summary.total_reservations, 5);
	assert!((summary.total_revenue - 125.0).abs() < 1e-9);
	assert!((summary.average_price - 25.0).abs() < 1e-9);
}

#[tokio::test(flavor = "multi_thread")]
async fn summary_without_history() {
	let env = TestEnv::new().await;

	let summary = env
		.app
		.get("/stats/summary")
		.await
		.json::<ApiResponse<SummaryResponse>>()
		.data
		.unwrap();

	assert_eq!(summary.total_reservations, 0);
	assert!(summary.average_price.abs() < f64::EPSILON);
}
