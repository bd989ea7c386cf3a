use std::sync::LazyLock;

use chrono::NaiveDateTime;
use models::{NewUser, SkillLevel, User, UserUpdate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use validator_derive::Validate;

static PHONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[0-9 +()-]+$").unwrap());

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
	pub id:            i32,
	pub first_name:    String,
	pub last_name:     String,
	pub email:         String,
	pub phone:         Option<String>,
	pub skill_level:   SkillLevel,
	pub registered_at: NaiveDateTime,
}

impl From<User> for UserResponse {
	fn from(value: User) -> Self {
		Self {
			id:            value.id,
			first_name:    value.first_name,
			last_name:     value.last_name,
			email:         value.email,
			phone:         value.phone,
			skill_level:   value.skill_level,
			registered_at: value.registered_at,
		}
	}
}

/// Read an empty or blank string as an absent value
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<String>::deserialize(deserializer)?;

	Ok(value.filter(|v| !v.trim().is_empty()))
}

/// Full set of editable user fields, used to register and to replace a user
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
	#[validate(length(
		min = 2,
		max = 100,
		message = "first name must be between 2 and 100 characters long",
		code = "first-name-length"
	))]
	pub first_name:  String,
	#[validate(length(
		min = 2,
		max = 100,
		message = "last name must be between 2 and 100 characters long",
		code = "last-name-length"
	))]
	pub last_name:   String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email:       String,
	#[validate(length(
		min = 10,
		max = 20,
		message = "phone must be between 10 and 20 characters long",
		code = "phone-length"
	))]
	#[validate(regex(
		path = *PHONE_REGEX,
		message = "phone may only contain digits, spaces and the characters +()-",
		code = "phone-regex"
	))]
	#[serde(default, deserialize_with = "blank_as_none")]
	pub phone:       Option<String>,
	#[serde(default)]
	pub skill_level: SkillLevel,
}

impl UserRequest {
	#[must_use]
	pub fn to_insertable(self) -> NewUser {
		NewUser {
			first_name:  self.first_name,
			last_name:   self.last_name,
			email:       self.email,
			phone:       self.phone,
			skill_level: self.skill_level,
		}
	}

	#[must_use]
	pub fn to_update(self) -> UserUpdate {
		UserUpdate {
			first_name:  self.first_name,
			last_name:   self.last_name,
			email:       self.email,
			phone:       self.phone,
			skill_level: self.skill_level,
		}
	}
}
