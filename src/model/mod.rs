//! Domain models and operation parameter types.
//!
//! Entity models from the `entity` crate are converted into these types with `from_entity`
//! once they leave the data layer. Stored enum columns (status, frequency, weekday) are
//! parsed here, so the rest of the engine only ever sees typed values.

pub mod appointment;
pub mod recurrence;
pub mod service;
pub mod working_hours;
