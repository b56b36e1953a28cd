//! Factory methods for creating test data.
//!
//! Factories create entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let provider = factory::user::create_user(&db).await?;
//! let service = factory::service::create_service(&db, provider.id).await?;
//!
//! // Or everything a booking needs in one call
//! let (provider, customer, service) =
//!     factory::helpers::create_booking_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let hours = factory::working_hours::WorkingHoursFactory::new(&db, provider.id, 1)
//!     .hours("09:00", "17:00")
//!     .break_window("13:00", "14:00")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Providers and customers
//! - `service` - Bookable services with duration and buffer
//! - `working_hours` - One weekday of a provider's working calendar
//! - `appointment` - Appointments in any status
//! - `recurrence` - Recurrence records linked to an appointment
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod appointment;
pub mod helpers;
pub mod recurrence;
pub mod service;
pub mod user;
pub mod working_hours;

pub use appointment::create_appointment;
pub use recurrence::create_recurrence;
pub use service::create_service;
pub use user::create_user;
pub use working_hours::create_working_hours;
