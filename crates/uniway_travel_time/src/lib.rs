pub mod error;
pub mod estimator;
pub mod format;
pub mod kmh;
pub mod terrain;
pub mod time_of_day;
pub mod travel_mode;
