mod client;
mod doctor;
mod leave;
mod review;
mod specialization;
