pub mod inputs;
pub mod registration_service;

pub use inputs::{ActivityName, StudentEmail};
pub use registration_service::{
    ActivityDetails, ActivityListing, Confirmation, RegistrationError, RegistrationService,
};
