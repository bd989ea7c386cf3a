//! Read-only aggregates over completed reservations

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use common::{DbConn, Error};
use db::CourtKind;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Double, Integer, Text, Time};
use serde::{Deserialize, Serialize};

const POPULARITY_QUERY: &str = "
	SELECT c.id AS court_id,
	       c.name AS court,
	       c.kind AS kind,
	       COUNT(r.id) AS total_reservations,
	       COALESCE(SUM(r.total_price), 0)::float8 AS total_revenue
	FROM court c
	LEFT JOIN reservation r
	       ON r.court_id = c.id AND r.status = 'completed'
	GROUP BY c.id, c.name, c.kind
	ORDER BY total_reservations DESC, c.name ASC
";

const MONTHLY_TREND_QUERY: &str = "
	SELECT CAST(EXTRACT(YEAR FROM reservation_date) AS INTEGER) AS year,
	       CAST(EXTRACT(MONTH FROM reservation_date) AS INTEGER) AS month,
	       COUNT(*) AS total_reservations,
	       COALESCE(SUM(total_price), 0)::float8 AS total_revenue
	FROM reservation
	WHERE status = 'completed'
	GROUP BY year, month
	ORDER BY year ASC, month ASC
";

const SLOT_DEMAND_QUERY: &str = "
	SELECT s.start_time AS start_time,
	       COUNT(r.id) AS total_reservations
	FROM time_slot s
	LEFT JOIN reservation r
	       ON r.time_slot_id = s.id AND r.status = 'completed'
	GROUP BY s.id, s.start_time
	ORDER BY s.start_time ASC
";

const PRICE_DEMAND_QUERY: &str = "
	SELECT c.id AS court_id,
	       c.name AS court,
	       c.hourly_price AS hourly_price,
	       COUNT(r.id) AS total_reservations
	FROM court c
	LEFT JOIN reservation r
	       ON r.court_id = c.id AND r.status = 'completed'
	GROUP BY c.id, c.name, c.hourly_price
	ORDER BY c.hourly_price ASC, c.name ASC
";

const SUMMARY_QUERY: &str = "
	SELECT
	  (SELECT COUNT(*) FROM app_user WHERE is_active) AS total_users,
	  (SELECT COUNT(*) FROM court WHERE is_active) AS total_courts,
	  (SELECT COUNT(*) FROM reservation WHERE status = 'completed')
	    AS total_reservations,
	  (SELECT COALESCE(SUM(total_price), 0)::float8
	     FROM reservation WHERE status = 'completed') AS total_revenue,
	  (SELECT COALESCE(AVG(total_price), 0)::float8
	     FROM reservation WHERE status = 'completed') AS average_price
";

/// Completed reservations and revenue of a single court
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct CourtPopularity {
	#[diesel(sql_type = Integer)]
	pub court_id:           i32,
	#[diesel(sql_type = Text)]
	pub court:              String,
	#[diesel(sql_type = db::sql_types::CourtKind)]
	pub kind:               CourtKind,
	#[diesel(sql_type = BigInt)]
	pub total_reservations: i64,
	#[diesel(sql_type = Double)]
	pub total_revenue:      f64,
}

impl CourtPopularity {
	/// Get the popularity of every court, most booked first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let rows = conn
			.interact(|conn| diesel::sql_query(POPULARITY_QUERY).load(conn))
			.await??;

		Ok(rows)
	}
}

/// Completed reservations and revenue within a calendar month
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct MonthlyTrend {
	#[diesel(sql_type = Integer)]
	pub year:               i32,
	#[diesel(sql_type = Integer)]
	pub month:              i32,
	#[diesel(sql_type = BigInt)]
	pub total_reservations: i64,
	#[diesel(sql_type = Double)]
	pub total_revenue:      f64,
}

impl MonthlyTrend {
	/// Get the monthly totals in chronological order
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let rows = conn
			.interact(|conn| diesel::sql_query(MONTHLY_TREND_QUERY).load(conn))
			.await??;

		Ok(rows)
	}
}

/// Part of the day a time slot starts in
#[derive(
	Clone,
	Copy,
	Debug,
	Deserialize,
	Eq,
	Hash,
	Ord,
	PartialEq,
	PartialOrd,
	Serialize,
)]
pub enum DayPeriod {
	Morning,
	Afternoon,
	Evening,
}

impl DayPeriod {
	#[must_use]
	pub fn from_start_time(start: NaiveTime) -> Self {
		match start.hour() {
			0..12 => Self::Morning,
			12..18 => Self::Afternoon,
			_ => Self::Evening,
		}
	}
}

impl fmt::Display for DayPeriod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Morning => "Morning",
			Self::Afternoon => "Afternoon",
			Self::Evening => "Evening",
		};

		f.write_str(name)
	}
}

/// Completed reservations of a single time slot
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct SlotDemand {
	#[diesel(sql_type = Time)]
	pub start_time:         NaiveTime,
	#[diesel(sql_type = BigInt)]
	pub total_reservations: i64,
}

/// Completed reservations within a [`DayPeriod`]
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PeriodDistribution {
	pub period:             DayPeriod,
	pub total_reservations: i64,
}

impl PeriodDistribution {
	/// Bucket per-slot demand by [`DayPeriod`], busiest period first
	///
	/// Every period containing at least one slot is present, even with zero
	/// reservations. Equal counts keep the order of the day.
	#[must_use]
	pub fn from_slots(slots: &[SlotDemand]) -> Vec<Self> {
		let mut buckets: BTreeMap<DayPeriod, i64> = BTreeMap::new();

		for slot in slots {
			*buckets
				.entry(DayPeriod::from_start_time(slot.start_time))
				.or_default() += slot.total_reservations;
		}

		let mut distribution: Vec<Self> = buckets
			.into_iter()
			.map(|(period, total_reservations)| {
				Self { period, total_reservations }
			})
			.collect();

		distribution
			.sort_by(|a, b| b.total_reservations.cmp(&a.total_reservations));

		distribution
	}

	/// Get the distribution of completed reservations over the day
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let slots: Vec<SlotDemand> = conn
			.interact(|conn| diesel::sql_query(SLOT_DEMAND_QUERY).load(conn))
			.await??;

		Ok(Self::from_slots(&slots))
	}
}

/// Hourly price of a court paired with its completed reservations
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct PriceDemand {
	#[diesel(sql_type = Integer)]
	pub court_id:           i32,
	#[diesel(sql_type = Text)]
	pub court:              String,
	#[diesel(sql_type = Double)]
	pub hourly_price:       f64,
	#[diesel(sql_type = BigInt)]
	pub total_reservations: i64,
}

impl PriceDemand {
	/// Get price and demand of every court, cheapest first
	#[instrument(skip(conn))]
	pub async fn get_all(conn: &DbConn) -> Result<Vec<Self>, Error> {
		let rows = conn
			.interact(|conn| diesel::sql_query(PRICE_DEMAND_QUERY).load(conn))
			.await??;

		Ok(rows)
	}
}

/// Headline figures of the club
#[derive(Clone, Debug, Deserialize, QueryableByName, Serialize)]
pub struct Summary {
	#[diesel(sql_type = BigInt)]
	pub total_users:        i64,
	#[diesel(sql_type = BigInt)]
	pub total_courts:       i64,
	#[diesel(sql_type = BigInt)]
	pub total_reservations: i64,
	#[diesel(sql_type = Double)]
	pub total_revenue:      f64,
	#[diesel(sql_type = Double)]
	pub average_price:      f64,
}

impl Summary {
	#[instrument(skip(conn))]
	pub async fn get(conn: &DbConn) -> Result<Self, Error> {
		let summary = conn
			.interact(|conn| diesel::sql_query(SUMMARY_QUERY).get_result(conn))
			.await??;

		Ok(summary)
	}
}
