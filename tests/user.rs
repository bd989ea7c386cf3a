use ::common::ErrorBody;
use axum::http::StatusCode;
use courtbook::schemas::reservation::ReservationResponse;
use courtbook::schemas::user::UserResponse;
use courtbook::schemas::{ApiResponse, CreatedResponse};
use models::{ReservationStatus, SkillLevel};
use pretty_assertions::assert_eq;
use serde_json::json;

mod common;

use common::{TestEnv, date, tomorrow};

#[tokio::test(flavor = "multi_thread")]
async fn get_all_users() {
	let env = TestEnv::new().await;

	let response = env.app.get("/users").await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<ApiResponse<Vec<UserResponse>>>();
	let users = body.data.unwrap();

	assert!(body.success);
	assert_eq!(users.len(), 2);
	// Most recently registered first
	assert_eq!(users[0].first_name, "Grace");
	assert_eq!(users[1].first_name, "Ada");
}

#[tokio::test(flavor = "multi_thread")]
async fn get_user() {
	let env = TestEnv::new().await;

	let id = env.fixtures.users[0];
	let response = env.app.get(&format!("/users/{id}")).await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let user = response.json::<ApiResponse<UserResponse>>().data.unwrap();

	assert_eq!(user.id, id);
	assert_eq!(user.email, "ada@example.com");
	assert_eq!(user.skill_level, SkillLevel::Intermediate);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_user() {
	let env = TestEnv::new().await;

	let response = env.app.get("/users/9999").await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

	let body = response.json::<ErrorBody>();

	assert!(!body.success);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user() {
	let env = TestEnv::new().await;

	let response = env
		.app
		.post("/users")
		.json(&json!({
			"firstName": "Linus",
			"lastName": "Torvalds",
			"email": "linus@example.com",
			"phone": "+358 (0) 123-4567",
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);

	let id = response.json::<ApiResponse<CreatedResponse>>().data.unwrap().id;

	let user = env
		.app
		.get(&format!("/users/{id}"))
		.await
		.json::<ApiResponse<UserResponse>>()
		.data
		.unwrap();

	assert_eq!(user.last_name, "Torvalds");
	assert_eq!(user.phone.as_deref(), Some("+358 (0) 123-4567"));
	assert_eq!(user.skill_level, SkillLevel::Beginner);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_user_with_taken_email() {
	let env = TestEnv::new().await;

	let response = env
		.app
		.post("/users")
		.json(&json!({
			"firstName": "Another",
			"lastName": "Ada",
			"email": "ada@example.com",
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::CONFLICT);

	let body = response.json::<ErrorBody>();

	assert_eq!(body.message, "email is already registered");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_user() {
	let env = TestEnv::new().await;

	let id = env.fixtures.users[1];
	let response = env
		.app
		.put(&format!("/users/{id}"))
		.json(&json!({
			"firstName": "Grace",
			"lastName": "Hopper",
			"email": "admiral@example.com",
			"skillLevel": "professional",
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let user = env
		.app
		.get(&format!("/users/{id}"))
		.await
		.json::<ApiResponse<UserResponse>>()
		.data
		.unwrap();

	assert_eq!(user.email, "admiral@example.com");
	assert_eq!(user.skill_level, SkillLevel::Professional);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_user() {
	let env = TestEnv::new().await;

	let response = env
		.app
		.put("/users/9999")
		.json(&json!({
			"firstName": "Nobody",
			"lastName": "Here",
			"email": "nobody@example.com",
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_user_reservations_in_order() {
	let env = TestEnv::new().await;

	let courts = &env.fixtures.courts;
	let slots = &env.fixtures.slots;

	let late = env
		.insert_reservation(
			courts[0],
			slots[2],
			date(2024, 3, 1),
			ReservationStatus::Completed,
		)
		.await;
	let early = env
		.insert_reservation(
			courts[1],
			slots[0],
			date(2024, 3, 1),
			ReservationStatus::Completed,
		)
		.await;
	let newest = env
		.insert_reservation(
			courts[0],
			slots[1],
			tomorrow(),
			ReservationStatus::Pending,
		)
		.await;

	let id = env.fixtures.users[0];
	let response = env.app.get(&format!("/users/{id}/reservations")).await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let ids: Vec<i32> = response
		.json::<ApiResponse<Vec<ReservationResponse>>>()
		.data
		.unwrap()
		.into_iter()
		.map(|r| r.id)
		.collect();

	assert_eq!(ids, vec![newest, early, late]);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_reservations_of_missing_user() {
	let env = TestEnv::new().await;

	let response = env.app.get("/users/9999/reservations").await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
