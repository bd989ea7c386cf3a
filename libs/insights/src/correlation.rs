use std::fmt;

use serde::Serialize;

pub const NOT_ENOUGH_CORRELATION_DATA: &str =
	"Not enough data for correlation analysis.";

/// Pearson correlation coefficient of two equally long samples
///
/// Returns `0.0` when the coefficient is undefined, i.e. when either sample
/// has no variance.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
	let mut n = 0.0;
	let (mut sum_x, mut sum_y) = (0.0, 0.0);
	let (mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0);

	for (xi, yi) in x.iter().zip(y) {
		n += 1.0;
		sum_x += xi;
		sum_y += yi;
		sum_xy += xi * yi;
		sum_x2 += xi * xi;
		sum_y2 += yi * yi;
	}

	let numerator = n * sum_xy - sum_x * sum_y;
	let denominator = ((n * sum_x2 - sum_x * sum_x)
		* (n * sum_y2 - sum_y * sum_y))
		.sqrt();

	// NaN shows up when rounding pushes a zero variance slightly negative
	if denominator == 0.0 || denominator.is_nan() {
		return 0.0;
	}

	numerator / denominator
}

/// Coarse classification of a correlation coefficient
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CorrelationStrength {
	ModeratePositive,
	ModerateNegative,
	Weak,
}

impl CorrelationStrength {
	#[must_use]
	pub fn classify(r: f64) -> Self {
		if r > 0.3 {
			Self::ModeratePositive
		} else if r < -0.3 {
			Self::ModerateNegative
		} else {
			Self::Weak
		}
	}
}

impl fmt::Display for CorrelationStrength {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ModeratePositive => f.write_str("moderate positive"),
			Self::ModerateNegative => f.write_str("moderate negative"),
			Self::Weak => f.write_str("weak"),
		}
	}
}

/// Pearson's r between hourly price and demand with its description
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceCorrelation {
	/// Zero when there are fewer than two points
	pub coefficient:    f64,
	pub interpretation: String,
}

/// Describe the relation between hourly price (`x`) and demand (`y`)
#[must_use]
pub fn interpret_correlation(points: &[(f64, f64)]) -> PriceCorrelation {
	if points.len() < 2 {
		return PriceCorrelation {
			coefficient:    0.0,
			interpretation: NOT_ENOUGH_CORRELATION_DATA.to_string(),
		};
	}

	let (prices, demand): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();

	let r = pearson(&prices, &demand);
	let strength = CorrelationStrength::classify(r);

	let (direction, reading) = if r > 0.0 {
		("higher", "associate price with quality")
	} else {
		("lower", "are price sensitive")
	};

	let interpretation = format!(
		"There is a {strength} correlation (r = {r:.2}) between hourly price \
		 and court demand. Courts with higher prices tend to have {direction} \
		 demand, which may indicate that users {reading}.",
	);

	PriceCorrelation { coefficient: r, interpretation }
}
