//! Database access for users, courts, time slots, reservations and the
//! aggregated statistics built on top of them

#[macro_use]
extern crate tracing;

mod court;
mod reservation;
mod statistics;
mod time_slot;
mod user;

pub use court::*;
pub use db::{CourtKind, ReservationStatus, SkillLevel};
pub use reservation::*;
pub use statistics::*;
pub use time_slot::*;
pub use user::*;
