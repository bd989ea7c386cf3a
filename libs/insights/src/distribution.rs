use crate::Tally;

pub const NO_DISTRIBUTION_DATA: &str =
	"No data available for distribution analysis.";

/// Describe which period of the day concentrates the most reservations
#[must_use]
pub fn interpret_distribution(periods: &[Tally]) -> String {
	let total: i64 = periods.iter().map(|p| p.count).sum();

	let Some(top) = periods.iter().max_by_key(|p| p.count) else {
		return NO_DISTRIBUTION_DATA.to_string();
	};

	if total == 0 {
		return NO_DISTRIBUTION_DATA.to_string();
	}

	#[allow(clippy::cast_precision_loss)]
	let share = top.count as f64 * 100.0 / total as f64;

	format!(
		"The {} period accounts for {share:.1}% of all reservations ({} \
		 reservations), making it the busiest time of day. This suggests \
		 users prefer this period to play.",
		top.label.to_lowercase(),
		top.count,
	)
}
