use crate::Tally;

pub const NO_POPULARITY_DATA: &str = "No data available for analysis.";

/// Describe the most and least booked courts
///
/// When several courts share the highest or lowest count the one listed last
/// is named.
#[must_use]
pub fn interpret_popularity(courts: &[Tally]) -> String {
	let most = courts.iter().max_by_key(|c| c.count);
	let least = courts.iter().rev().min_by_key(|c| c.count);

	let (Some(most), Some(least)) = (most, least) else {
		return NO_POPULARITY_DATA.to_string();
	};

	format!(
		"The most popular court is '{}' with {} reservations, while '{}' has \
		 the lowest demand with {} reservations. This points to a clear user \
		 preference for certain facilities.",
		most.label, most.count, least.label, least.count,
	)
}
