use chrono::NaiveDateTime;
use common::{DbConn, Error};
use db::{SkillLevel, app_user};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A registered player
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = app_user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id:            i32,
	pub first_name:    String,
	pub last_name:     String,
	pub email:         String,
	pub phone:         Option<String>,
	pub skill_level:   SkillLevel,
	pub is_active:     bool,
	pub registered_at: NaiveDateTime,
}

impl User {
	/// Get all active [`User`]s, most recently registered first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let users = conn
			.interact(|conn| {
				use self::app_user::dsl::*;

				app_user
					.filter(is_active.eq(true))
					.order(id.desc())
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(users)
	}

	/// Get an active [`User`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(u_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let user = conn
			.interact(move |conn| {
				use self::app_user::dsl::*;

				app_user
					.find(u_id)
					.filter(is_active.eq(true))
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??;

		user.ok_or_else(|| Error::NotFound(format!("user with id {u_id}")))
	}
}

#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = app_user)]
#[diesel(check_for_backend(Pg))]
pub struct NewUser {
	pub first_name:  String,
	pub last_name:   String,
	pub email:       String,
	pub phone:       Option<String>,
	pub skill_level: SkillLevel,
}

impl NewUser {
	/// Insert this [`NewUser`] and return the id of the new row
	#[instrument(skip(conn))]
	pub async fn insert(self, conn: &DbConn) -> Result<i32, Error> {
		let u_id = conn
			.interact(|conn| {
				use self::app_user::dsl::*;

				diesel::insert_into(app_user)
					.values(self)
					.returning(id)
					.get_result::<i32>(conn)
			})
			.await??;

		info!("created user with id {u_id}");

		Ok(u_id)
	}
}

/// A full replacement of a [`User`]'s editable fields
#[derive(AsChangeset, Clone, Debug, Deserialize, Serialize)]
#[diesel(table_name = app_user)]
#[diesel(check_for_backend(Pg))]
#[diesel(treat_none_as_null = true)]
pub struct UserUpdate {
	pub first_name:  String,
	pub last_name:   String,
	pub email:       String,
	pub phone:       Option<String>,
	pub skill_level: SkillLevel,
}

impl UserUpdate {
	/// Apply this update to the active [`User`] with the given id
	#[instrument(skip(conn))]
	pub async fn apply_to(self, u_id: i32, conn: &DbConn) -> Result<(), Error> {
		let updated = conn
			.interact(move |conn| {
				use self::app_user::dsl::*;

				diesel::update(app_user.find(u_id).filter(is_active.eq(true)))
					.set(self)
					.execute(conn)
			})
			.await??;

		if updated == 0 {
			return Err(Error::NotFound(format!("user with id {u_id}")));
		}

		info!("updated user with id {u_id}");

		Ok(())
	}
}
