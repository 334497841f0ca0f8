mod contact_submission;
mod email_address;
mod quote_request;
mod sanitize;
mod validation;
mod vessel_type;

pub use contact_submission::ContactSubmission;
pub use email_address::EmailAddress;
pub use quote_request::QuoteRequest;
pub use sanitize::{sanitize, sanitize_optional, MAX_FIELD_LENGTH};
pub use validation::{require_fields, ValidationError};
pub use vessel_type::VesselType;
