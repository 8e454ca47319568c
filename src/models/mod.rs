//! Interval scheduling domain models.
//!
//! Provides the data types shared by every selection algorithm.
//!
//! # Domain Mappings
//!
//! | u-interval | Lecture halls | Manufacturing | Networking |
//! |------------|---------------|---------------|------------|
//! | Interval | Lecture | Job on one machine | Bandwidth reservation |
//! | IntervalSet | Booking requests | Order backlog | Reservation queue |
//! | Selection | Room timetable | Accepted orders | Admitted reservations |

mod interval;
mod selection;

pub use interval::{Interval, IntervalSet};
pub use selection::Selection;
