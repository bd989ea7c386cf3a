use insights::{
	MonthlyTally,
	SurgeRule,
	Tally,
	interpret_correlation,
	interpret_distribution,
	interpret_popularity,
	interpret_trend,
	month_name,
};
use models::{
	CourtKind,
	CourtPopularity,
	DayPeriod,
	MonthlyTrend,
	PeriodDistribution,
	PriceDemand,
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
	Bars,
	Lines,
	Pie,
	Scatter,
}

/// Chart data together with a sentence describing it
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse<T> {
	pub kind:           ChartKind,
	pub data:           Vec<T>,
	pub interpretation: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub correlation:    Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularityPoint {
	pub court_id:           i32,
	pub court:              String,
	pub kind:               CourtKind,
	pub total_reservations: i64,
	pub total_revenue:      f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
	pub year:               i32,
	pub month:              u32,
	pub month_name:         String,
	pub total_reservations: i64,
	pub total_revenue:      f64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodPoint {
	pub period:             DayPeriod,
	pub total_reservations: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
	pub court_id:           i32,
	pub court:              String,
	pub hourly_price:       f64,
	pub total_reservations: i64,
}

impl ChartResponse<PopularityPoint> {
	#[must_use]
	pub fn popularity(rows: Vec<CourtPopularity>) -> Self {
		let tallies: Vec<Tally> = rows
			.iter()
			.map(|row| Tally::new(row.court.clone(), row.total_reservations))
			.collect();

		let data = rows
			.into_iter()
			.map(|row| {
				PopularityPoint {
					court_id:           row.court_id,
					court:              row.court,
					kind:               row.kind,
					total_reservations: row.total_reservations,
					total_revenue:      row.total_revenue,
				}
			})
			.collect();

		Self {
			kind: ChartKind::Bars,
			data,
			interpretation: interpret_popularity(&tallies),
			correlation: None,
		}
	}
}

impl ChartResponse<TrendPoint> {
	#[must_use]
	pub fn trend(rows: Vec<MonthlyTrend>, rule: &SurgeRule) -> Self {
		let data: Vec<TrendPoint> = rows
			.into_iter()
			.map(|row| {
				let month = u32::try_from(row.month).unwrap_or_default();

				TrendPoint {
					year: row.year,
					month,
					month_name: month_name(month).to_string(),
					total_reservations: row.total_reservations,
					total_revenue: row.total_revenue,
				}
			})
			.collect();

		let tallies: Vec<MonthlyTally> = data
			.iter()
			.map(|point| {
				MonthlyTally {
					year:  point.year,
					month: point.month,
					count: point.total_reservations,
				}
			})
			.collect();

		Self {
			kind: ChartKind::Lines,
			data,
			interpretation: interpret_trend(&tallies, rule),
			correlation: None,
		}
	}
}

impl ChartResponse<PeriodPoint> {
	#[must_use]
	pub fn distribution(rows: Vec<PeriodDistribution>) -> Self {
		let tallies: Vec<Tally> = rows
			.iter()
			.map(|row| Tally::new(row.period.to_string(), row.total_reservations))
			.collect();

		let data = rows
			.into_iter()
			.map(|row| {
				PeriodPoint {
					period:             row.period,
					total_reservations: row.total_reservations,
				}
			})
			.collect();

		Self {
			kind: ChartKind::Pie,
			data,
			interpretation: interpret_distribution(&tallies),
			correlation: None,
		}
	}
}

impl ChartResponse<PricePoint> {
	/// Price against demand, `correlation` holds Pearson's r and is zero
	/// with fewer than two courts
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn price_demand(rows: Vec<PriceDemand>) -> Self {
		let points: Vec<(f64, f64)> = rows
			.iter()
			.map(|row| (row.hourly_price, row.total_reservations as f64))
			.collect();

		let correlation = interpret_correlation(&points);

		let data = rows
			.into_iter()
			.map(|row| {
				PricePoint {
					court_id:           row.court_id,
					court:              row.court,
					hourly_price:       row.hourly_price,
					total_reservations: row.total_reservations,
				}
			})
			.collect();

		Self {
			kind: ChartKind::Scatter,
			data,
			interpretation: correlation.interpretation,
			correlation: Some(correlation.coefficient),
		}
	}
}

/// Every chart at once, keyed by chart kind
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AllChartsResponse {
	pub bars:    ChartResponse<PopularityPoint>,
	pub lines:   ChartResponse<TrendPoint>,
	pub pie:     ChartResponse<PeriodPoint>,
	pub scatter: ChartResponse<PricePoint>,
}
