use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::chart::{
	get_all_charts,
	get_bars_chart,
	get_lines_chart,
	get_pie_chart,
	get_scatter_chart,
};
use crate::controllers::court::{get_all_courts, get_court};
use crate::controllers::reservation::{
	create_reservation,
	delete_reservation,
	get_all_reservations,
	get_reservation,
	update_reservation_status,
};
use crate::controllers::statistics::get_summary;
use crate::controllers::time_slot::{get_all_slots, get_available_slots};
use crate::controllers::user::{
	create_user,
	get_all_users,
	get_user,
	get_user_reservations,
	update_user,
};
use crate::controllers::{endpoint_not_found, health, info};

/// Largest accepted request body
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let api_routes = Router::new()
		.route("/health", get(health))
		.route("/info", get(info))
		.nest("/users", user_routes())
		.nest("/courts", court_routes())
		.nest("/slots", slot_routes())
		.nest("/reservations", reservation_routes())
		.nest("/charts", chart_routes())
		.nest("/stats", statistics_routes());

	// Credentials rule out wildcards, so the request's own values are echoed
	let cors = CorsLayer::new()
		.allow_origin(AllowOrigin::mirror_request())
		.allow_methods(AllowMethods::mirror_request())
		.allow_headers(AllowHeaders::mirror_request())
		.allow_credentials(true);

	Router::new()
		.merge(api_routes)
		.fallback(endpoint_not_found)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::new(Duration::from_secs(10)))
				.layer(CompressionLayer::new())
				.layer(cors)
				.layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
		)
		.with_state(state)
}

/// User routes
fn user_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_users).post(create_user))
		.route("/{id}", get(get_user).put(update_user))
		.route("/{id}/reservations", get(get_user_reservations))
}

/// Court routes
fn court_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_courts))
		.route("/{id}", get(get_court))
}

/// Time slot routes
fn slot_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_slots))
		.route("/available", get(get_available_slots))
}

/// Reservation routes
fn reservation_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(get_all_reservations).post(create_reservation))
		.route("/{id}", get(get_reservation).delete(delete_reservation))
		.route("/{id}/status", put(update_reservation_status))
}

/// Chart routes, each chart comes with an interpretation
fn chart_routes() -> Router<AppState> {
	Router::new()
		.route("/bars", get(get_bars_chart))
		.route("/lines", get(get_lines_chart))
		.route("/pie", get(get_pie_chart))
		.route("/scatter", get(get_scatter_chart))
		.route("/all", get(get_all_charts))
}

/// Statistics routes
fn statistics_routes() -> Router<AppState> {
	Router::new().route("/summary", get(get_summary))
}
