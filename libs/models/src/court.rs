use common::{DbConn, Error};
use db::{CourtKind, court};
use diesel::pg::Pg;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A rentable court
#[derive(
	Clone, Debug, Deserialize, Identifiable, Queryable, Selectable, Serialize,
)]
#[diesel(table_name = court)]
#[diesel(check_for_backend(Pg))]
pub struct Court {
	pub id:           i32,
	pub name:         String,
	pub kind:         CourtKind,
	pub surface:      Option<String>,
	pub hourly_price: f64,
	pub location:     Option<String>,
	pub description:  Option<String>,
	pub is_active:    bool,
}

impl Court {
	/// Get all active [`Court`]s ordered by name
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let courts = conn
			.interact(|conn| {
				use self::court::dsl::*;

				court
					.filter(is_active.eq(true))
					.order(name.asc())
					.select(Self::as_select())
					.get_results(conn)
			})
			.await??;

		Ok(courts)
	}

	/// Get an active [`Court`] given its id
	#[instrument(skip(conn))]
	pub async fn get_by_id(c_id: i32, conn: &DbConn) -> Result<Self, Error> {
		let found = conn
			.interact(move |conn| {
				use self::court::dsl::*;

				court
					.find(c_id)
					.filter(is_active.eq(true))
					.select(Self::as_select())
					.get_result(conn)
					.optional()
			})
			.await??;

		found.ok_or_else(|| Error::NotFound(format!("court with id {c_id}")))
	}
}

/// Catalog entry used when seeding courts
#[derive(Clone, Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = court)]
#[diesel(check_for_backend(Pg))]
pub struct NewCourt {
	pub name:         String,
	pub kind:         CourtKind,
	pub surface:      Option<String>,
	pub hourly_price: f64,
	pub location:     Option<String>,
	pub description:  Option<String>,
}
