pub use super::appointment::Entity as Appointment;
pub use super::recurrence::Entity as Recurrence;
pub use super::service::Entity as Service;
pub use super::user::Entity as User;
pub use super::working_hours::Entity as WorkingHours;
