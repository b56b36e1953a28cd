//! Appointment scheduling and conflict-resolution engine.
//!
//! Providers publish a weekly working calendar and offer services with a fixed duration
//! and buffer. Customers reserve time slots; the engine guarantees that no two active
//! appointments of one provider overlap, that appointments start within working hours, and
//! that status changes follow the appointment lifecycle. Completing a recurring appointment
//! generates the next one in its chain.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - SeaORM repositories, generic over the connection type
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Service Layer** (`service/`) - Calendar rules, availability, lifecycle, recurrence,
//!   and the transactional booking facade
//! - **Error Layer** (`error/`) - `AppError` and configuration errors
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Scheduler** (`scheduler/`) - Cron job delivering appointment reminders
//!
//! All timestamps are stored as UTC instants. Calendar rules are evaluated after the
//! instant is re-expressed in the configured civil time zone (`Asia/Kolkata` by default).

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
