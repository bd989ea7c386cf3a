#[macro_use]
extern crate tracing;

use courtbook::{AppState, Config, StartTime, routes};
use tokio::net::TcpListener;
use tokio::signal;
use tokio::signal::unix::SignalKind;
use tracing::Level;

#[tokio::main]
async fn main() {
	// Set up the tracing subscriber.
	// This will print out all logs to the console.
	tracing_subscriber::fmt()
		.pretty()
		.with_thread_names(true)
		.with_max_level(Level::INFO)
		.init();

	// Load the configuration from the environment,
	// and create a database pool.
	let config = Config::from_env();
	let database_pool = config.create_database_pool();

	// The server still starts without a database, requests then fail with
	// 503 until it comes back.
	match database_pool.get().await {
		Ok(_) => info!("connected to the database"),
		Err(e) => warn!("database is not reachable -- {e:?}"),
	}

	let bind_address = config.bind_address.clone();

	// Create the app router and listener.
	let router = routes::get_app_router(AppState {
		config,
		database_pool: database_pool.clone(),
		started_at: StartTime::now(),
	});

	let listener = TcpListener::bind(&bind_address)
		.await
		.expect("COULD NOT BIND TO ADDRESS");

	// Start the server.
	info!("listening on {bind_address}");
	axum::serve(listener, router)
		.with_graceful_shutdown(shutdown_handler())
		.await
		.expect("SERVER ERROR");

	database_pool.close();
	info!("database pool closed, bye");
}

/// Gracefully shutdown the server on SIGINT or SIGTERM.
async fn shutdown_handler() {
	let ctrl_c = async {
		signal::ctrl_c().await.expect("COULD NOT INSTALL CTRL+C HANDLER");
	};

	let terminate = async {
		signal::unix::signal(SignalKind::terminate())
			.expect("COULD NOT INSTALL TERMINATE SIGNAL HANDLER")
			.recv()
			.await;
	};

	tokio::select! {
		() = ctrl_c => {},
		() = terminate => {},
	}

	info!("shutting down");
}
