pub mod prelude;

pub mod client;
pub mod doctor;
pub mod doctor_specialization;
pub mod leave;
pub mod review;
pub mod specialization;
pub mod type_of_visit;
pub mod visit;
