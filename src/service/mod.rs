//! Service layer for business logic and orchestration.
//!
//! Services sit between callers and the data (repository) layer:
//!
//! - **`time`** - Normalizes instants into the civil zone
//! - **`calendar`** - Working calendars and the working-hours rule
//! - **`availability`** - Overlap detection and free-slot listing
//! - **`lifecycle`** - Status transition table and status changes
//! - **`recurrence`** - Recurring chains and follow-up generation
//! - **`booking`** - Transactional reservation, status change, reschedule, delete
//! - **`reminder`** - Finding and delivering upcoming-appointment reminders
//!
//! Services that run inside another service's transaction (`calendar` checks,
//! `availability`, `lifecycle`, `recurrence`) are generic over `ConnectionTrait` and are
//! handed the open `DatabaseTransaction`.

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod lifecycle;
pub mod recurrence;
pub mod reminder;
pub mod time;

#[cfg(test)]
mod test;
