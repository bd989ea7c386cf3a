use serde::{Deserialize, Serialize};

pub const NO_TREND_DATA: &str = "No data available for temporal analysis.";

const MONTH_NAMES: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// English name of a month numbered `1..=12`
#[must_use]
pub fn month_name(month: u32) -> &'static str {
	month
		.checked_sub(1)
		.and_then(|i| MONTH_NAMES.get(i as usize))
		.copied()
		.unwrap_or("Unknown")
}

/// Reservation count of a single calendar month
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthlyTally {
	pub year:  i32,
	pub month: u32,
	pub count: i64,
}

impl MonthlyTally {
	fn ordinal(&self) -> i64 { i64::from(self.year) * 12 + i64::from(self.month) }

	fn describe(&self) -> String {
		format!("{} {}", month_name(self.month), self.year)
	}
}

/// Flags month over month increases in reservations
///
/// An increase into a month is flagged when it is strictly larger than
/// `threshold_percent`. With `month` set only increases into that month are
/// considered, and `cause` names what the increase is attributed to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurgeRule {
	pub threshold_percent: f64,
	pub month:             Option<u32>,
	pub cause:             Option<String>,
}

impl Default for SurgeRule {
	fn default() -> Self {
		Self {
			threshold_percent: 20.0,
			month:             Some(8),
			cause:             Some("the club's summer promotion".to_string()),
		}
	}
}

impl SurgeRule {
	/// The percentage increase from `previous` into `current` if it should be
	/// flagged
	#[must_use]
	pub fn surge(
		&self,
		previous: &MonthlyTally,
		current: &MonthlyTally,
	) -> Option<f64> {
		if current.ordinal() - previous.ordinal() != 1 {
			return None;
		}

		if self.month.is_some_and(|m| m != current.month) {
			return None;
		}

		if previous.count <= 0 {
			return None;
		}

		#[allow(clippy::cast_precision_loss)]
		let increase = (current.count - previous.count) as f64 * 100.0
			/ previous.count as f64;

		(increase > self.threshold_percent).then_some(increase)
	}

	fn sentence(&self, current: &MonthlyTally, increase: f64) -> String {
		let attribution = self
			.cause
			.as_ref()
			.map(|cause| format!(", attributed to {cause}"))
			.unwrap_or_default();

		format!(
			"Reservations rose {increase:.1}% in {} compared to the previous \
			 month{attribution}. ",
			current.describe(),
		)
	}
}

/// Describe the evolution of reservations over a chronologically ordered
/// list of months
#[must_use]
pub fn interpret_trend(months: &[MonthlyTally], rule: &SurgeRule) -> String {
	let (Some(first), Some(last)) = (months.first(), months.last()) else {
		return NO_TREND_DATA.to_string();
	};

	let mut interpretation: String = months
		.windows(2)
		.filter_map(|pair| {
			rule.surge(&pair[0], &pair[1])
				.map(|increase| rule.sentence(&pair[1], increase))
		})
		.collect();

	interpretation.push_str(&format!(
		"The overall trend goes from {} reservations in {} to {} in {}.",
		first.count,
		first.describe(),
		last.count,
		last.describe(),
	));

	interpretation
}
