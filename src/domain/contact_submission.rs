use crate::domain::EmailAddress;

/// A contact form message that passed sanitization and validation.
#[derive(Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub service_type: Option<String>,
    pub message: String,
}
