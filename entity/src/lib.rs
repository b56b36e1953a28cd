//! SeaORM entities for the booking schema.

pub mod prelude;

pub mod appointment;
pub mod recurrence;
pub mod service;
pub mod user;
pub mod working_hours;
