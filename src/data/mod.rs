//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for one table each and return entity models. Every
//! repository is generic over `ConnectionTrait`, so the same code runs against the pooled
//! `DatabaseConnection` or inside a `DatabaseTransaction` opened by a service.

pub mod appointment;
pub mod recurrence;
pub mod service;
pub mod user;
pub mod working_hours;
