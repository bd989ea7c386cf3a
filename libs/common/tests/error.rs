use axum::Json;
use axum::body::Body;
use axum::extract::FromRequest;
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use common::{Error, FieldError, MISSING_REFERENCE_MESSAGE};
use diesel::result::DatabaseErrorKind;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use validator::{ValidationError, ValidationErrors};

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Booking {
	court_id:    i32,
	total_price: f64,
}

/// Run a JSON body through the axum extractor and convert its rejection
async fn reject(body: &'static str) -> Vec<FieldError> {
	let request = Request::builder()
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(body))
		.unwrap();

	let rejection = Json::<Booking>::from_request(request, &())
		.await
		.expect_err("body should be rejected");

	let Error::ValidationError(fields) = Error::from(rejection) else {
		panic!("expected a validation error");
	};

	fields
}

#[test]
fn status_codes() {
	let cases = [
		(Error::Conflict("taken".to_string()), StatusCode::CONFLICT),
		(Error::InternalServerError, StatusCode::INTERNAL_SERVER_ERROR),
		(Error::NotFound("user".to_string()), StatusCode::NOT_FOUND),
		(Error::Unavailable, StatusCode::SERVICE_UNAVAILABLE),
		(Error::invalid("email", "invalid email"), StatusCode::BAD_REQUEST),
	];

	for (error, status) in cases {
		assert_eq!(error.into_response().status(), status);
	}
}

#[test]
fn validation_errors_are_sorted_by_field() {
	let mut errors = ValidationErrors::new();

	let mut phone = ValidationError::new("phone-regex");
	phone.message = Some("bad phone".into());

	errors.add("phone", phone);
	errors.add("email", ValidationError::new("email"));

	let Error::ValidationError(fields) = Error::from(errors) else {
		panic!("expected a validation error");
	};

	assert_eq!(
		fields,
		vec![
			FieldError::new("email", "email"),
			FieldError::new("phone", "bad phone"),
		]
	);
}

#[test]
fn missing_rows_are_not_found() {
	let error = Error::from(diesel::result::Error::NotFound);

	assert!(matches!(error, Error::NotFound(_)));
}

#[test]
fn validation_errors_use_wire_names() {
	let mut errors = ValidationErrors::new();

	errors.add("time_slot_id", ValidationError::new("time-slot-id-range"));
	errors.add("total_price", ValidationError::new("total-price-range"));

	let Error::ValidationError(fields) = Error::from(errors) else {
		panic!("expected a validation error");
	};

	assert_eq!(
		fields,
		vec![
			FieldError::new("timeSlotId", "time-slot-id-range"),
			FieldError::new("totalPrice", "total-price-range"),
		]
	);
}

#[test]
fn missing_references_hide_database_details() {
	let err = diesel::result::Error::DatabaseError(
		DatabaseErrorKind::ForeignKeyViolation,
		Box::new(
			"insert or update on table \"reservation\" violates foreign key \
			 constraint \"reservation_court_id_fkey\""
				.to_string(),
		),
	);

	let Error::NotFound(message) = Error::from(err) else {
		panic!("expected a not found error");
	};

	assert_eq!(message, MISSING_REFERENCE_MESSAGE);
}

#[tokio::test]
async fn missing_body_field_is_reported_by_name() {
	let fields = reject(r#"{ "courtId": 1 }"#).await;

	assert_eq!(
		fields,
		vec![FieldError::new("totalPrice", "totalPrice is required")]
	);
}

#[tokio::test]
async fn mistyped_body_field_is_reported_by_name() {
	let fields = reject(r#"{ "courtId": "one", "totalPrice": 40.0 }"#).await;

	assert_eq!(fields.len(), 1);
	assert_eq!(fields[0].field, "courtId");
	assert!(fields[0].message.starts_with("invalid type"), "{fields:?}");
}

#[tokio::test]
async fn malformed_body_is_reported_as_body() {
	let fields = reject("{ not json").await;

	assert_eq!(fields.len(), 1);
	assert_eq!(fields[0].field, "body");
}
