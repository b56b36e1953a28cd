//! Booking Engine Test Utils
//!
//! Shared testing utilities for the booking engine. The crate offers a builder for test
//! contexts backed by in-memory SQLite databases, plus factories that seed providers,
//! services, working calendars, appointments and recurrence chains with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Entity factories with builder-style overrides
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn books_a_slot() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (provider, customer, service) =
//!         factory::helpers::create_booking_dependencies(db).await?;
//!     // Exercise the engine...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
