pub use super::client::Entity as Client;
pub use super::doctor::Entity as Doctor;
pub use super::doctor_specialization::Entity as DoctorSpecialization;
pub use super::leave::Entity as Leave;
pub use super::review::Entity as Review;
pub use super::specialization::Entity as Specialization;
pub use super::type_of_visit::Entity as TypeOfVisit;
pub use super::visit::Entity as Visit;
