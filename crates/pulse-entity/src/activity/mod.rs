//! Derived activity types: status classification and calendar months.

pub mod month;
pub mod status;

pub use month::YearMonth;
pub use status::ActivityStatus;
