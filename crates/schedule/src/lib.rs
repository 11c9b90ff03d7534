//! Schedule handling for the pfoertner glue layer.
//!
//! User-facing schedules are standard 5-field cron expressions
//! (`min hour day-of-month month day-of-week`); some upstream sources emit
//! 6-field cron with a leading seconds field. [`normalize_schedule`] folds
//! both shapes into the canonical 5-field form. The [`cron`] module bridges
//! the canonical form to the `cron` crate, which wants 6 fields.

pub mod cron;
mod error;
mod normalize;

pub use self::cron::{is_due, parse_schedule, to_six_field};
pub use self::error::ScheduleError;
pub use self::normalize::normalize_schedule;
