//! Library-wide error types and [`From`] impls

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use diesel::result::DatabaseErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// Resource conflicts with existing state (booked slot, duplicate key)
	#[error("{0}")]
	Conflict(String),
	/// Opaque internal server error
	#[error("internal server error")]
	InternalServerError,
	/// Resource not found
	#[error("not found - {0}")]
	NotFound(String),
	/// The database could not be reached
	#[error("service unavailable")]
	Unavailable,
	/// Request input could not be validated
	#[error("validation failed")]
	ValidationError(Vec<FieldError>),
}

/// A single invalid input field
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field:   String,
	pub message: String,
}

impl FieldError {
	pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self { field: field.into(), message: message.into() }
	}
}

impl Error {
	/// Shorthand for a validation error on a single field
	pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ValidationError(vec![FieldError::new(field, message)])
	}

	fn status(&self) -> StatusCode {
		match self {
			Self::Conflict(_) => StatusCode::CONFLICT,
			Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
			Self::ValidationError(_) => StatusCode::BAD_REQUEST,
		}
	}
}

/// Error envelope sent to API consumers
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorBody {
	pub success: bool,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub errors:  Option<Vec<FieldError>>,
}

/// Convert an error into a [`Response`]
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		debug!("{self:?}");

		let status = self.status();
		let message = self.to_string();

		let errors = match self {
			Self::ValidationError(errors) => Some(errors),
			_ => None,
		};

		let body = ErrorBody { success: false, message, errors };

		(status, axum::Json(body)).into_response()
	}
}

/// A list of possible internal errors
///
/// API end users should never see these details
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// Unknown database constraint violation
	#[error("constraint error -- {0:?}")]
	ConstraintError(String),
	/// Error executing some database operation
	#[error("database error -- {0:?}")]
	DatabaseError(diesel::result::Error),
	/// Error interacting with a database connection
	#[error("database interaction error -- {0:?}")]
	DatabaseInteractionError(deadpool_diesel::InteractError),
	/// Error acquiring database pool connection
	#[error("database pool error -- {0:?}")]
	PoolError(deadpool_diesel::PoolError),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value}");

		Self::InternalServerError
	}
}

/// Name of a struct field as it appears in request bodies
fn wire_name(field: &str) -> String {
	let mut name = String::with_capacity(field.len());
	let mut capitalize = false;

	for c in field.chars() {
		if c == '_' {
			capitalize = true;
		} else if capitalize {
			name.push(c.to_ascii_uppercase());
			capitalize = false;
		} else {
			name.push(c);
		}
	}

	name
}

/// Map validation errors to application errors
impl From<validator::ValidationErrors> for Error {
	fn from(err: validator::ValidationErrors) -> Self {
		let mut errors: Vec<FieldError> = err
			.field_errors()
			.into_iter()
			.flat_map(|(field, errs)| {
				let field = wire_name(&field);

				errs.iter().map(move |e| {
					let message = e
						.message
						.as_ref()
						.map_or_else(|| e.code.to_string(), ToString::to_string);

					FieldError::new(field.clone(), message)
				})
			})
			.collect();

		errors.sort_by(|a, b| a.field.cmp(&b.field));

		Self::ValidationError(errors)
	}
}

/// Attribute a body deserialization failure to the field it concerns
///
/// `detail` looks like ``missing field `email` at line 1 column 9`` or
/// ``skillLevel: unknown variant `x`, expected ... at line 1 column 9``.
fn field_error_from_data(detail: &str) -> Option<FieldError> {
	let detail = detail
		.rsplit_once(" at line ")
		.map_or(detail, |(message, _)| message);

	if let Some((_, rest)) = detail.split_once("missing field `") {
		let field = rest.split('`').next()?;

		return Some(FieldError::new(field, format!("{field} is required")));
	}

	let (path, message) = detail.split_once(": ")?;

	if path.is_empty() || path.contains(char::is_whitespace) {
		return None;
	}

	Some(FieldError::new(path, message))
}

impl From<JsonRejection> for Error {
	fn from(value: JsonRejection) -> Self {
		let JsonRejection::JsonDataError(ref data) = value else {
			return Self::invalid("body", value.body_text());
		};

		let detail = data.body_text();
		let detail = detail
			.split_once("target type: ")
			.map_or(detail.as_str(), |(_, detail)| detail);

		match field_error_from_data(detail) {
			Some(field) => Self::ValidationError(vec![field]),
			None => Self::invalid("body", value.body_text()),
		}
	}
}

impl From<PathRejection> for Error {
	fn from(value: PathRejection) -> Self {
		Self::invalid("path", value.body_text())
	}
}

impl From<QueryRejection> for Error {
	fn from(value: QueryRejection) -> Self {
		Self::invalid("query", value.body_text())
	}
}

/// Map database interaction errors to application errors
impl From<deadpool_diesel::InteractError> for Error {
	fn from(value: deadpool_diesel::InteractError) -> Self {
		InternalServerError::DatabaseInteractionError(value).into()
	}
}

/// Reported whenever a court slot already has an active reservation
pub const SLOT_TAKEN_MESSAGE: &str =
	"the time slot is already booked for this court and date";

/// Reported when a write refers to a row that does not exist
pub const MISSING_REFERENCE_MESSAGE: &str =
	"referenced user, court or time slot";

/// Map of unique constraint names to conflict messages.
static CONSTRAINT_TO_MESSAGE: LazyLock<HashMap<&str, &str>> =
	LazyLock::new(|| {
		HashMap::from([
			("app_user_email_key", "email is already registered"),
			("reservation_active_slot_key", SLOT_TAKEN_MESSAGE),
		])
	});

/// Map database result errors to application errors.
impl From<diesel::result::Error> for Error {
	fn from(err: diesel::result::Error) -> Self {
		match &err {
			// No rows returned by query that expected at least one
			diesel::result::Error::NotFound => {
				Self::NotFound("no context provided".to_string())
			},
			// Unique constraint violation
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::UniqueViolation,
				info,
			) => {
				let Some(constraint_name) = info.constraint_name() else {
					return InternalServerError::DatabaseError(err).into();
				};

				match CONSTRAINT_TO_MESSAGE.get(constraint_name) {
					Some(message) => Self::Conflict((*message).to_string()),
					None => {
						InternalServerError::ConstraintError(
							constraint_name.to_string(),
						)
						.into()
					},
				}
			},
			// Foreign key constraint violation, some referenced row is missing
			diesel::result::Error::DatabaseError(
				DatabaseErrorKind::ForeignKeyViolation,
				_,
			) => Self::NotFound(MISSING_REFERENCE_MESSAGE.to_string()),
			_ => InternalServerError::DatabaseError(err).into(),
		}
	}
}

/// Map pool errors to application errors
///
/// Waiting too long for a free connection means the pool is exhausted, any
/// other failure means the database itself could not be reached
impl From<deadpool_diesel::PoolError> for Error {
	fn from(value: deadpool_diesel::PoolError) -> Self {
		match value {
			deadpool_diesel::PoolError::Timeout(_) => {
				InternalServerError::PoolError(value).into()
			},
			_ => {
				error!("database unavailable -- {value:?}");

				Self::Unavailable
			},
		}
	}
}
