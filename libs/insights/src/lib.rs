//! Natural language interpretations of aggregated reservation statistics
//!
//! Everything in here is pure: the functions only look at the numbers they
//! are handed and never touch the database.

mod correlation;
mod distribution;
mod popularity;
mod trend;

pub use correlation::*;
pub use distribution::*;
pub use popularity::*;
pub use trend::*;

/// A labelled count, e.g. the completed reservations of a single court
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tally {
	pub label: String,
	pub count: i64,
}

impl Tally {
	pub fn new(label: impl Into<String>, count: i64) -> Self {
		Self { label: label.into(), count }
	}
}
