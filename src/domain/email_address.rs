use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern is not a valid regex")
});

#[derive(Debug, Clone, PartialEq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, ValidationError> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
