use crate::domain::ValidationError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use std::fmt::Formatter;
use uuid::Uuid;

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error("Failed to save your submission. Please try again later.")]
    StoreError(#[source] anyhow::Error),
    #[error("Failed to send notification email. Please try again later.")]
    NotificationError(#[source] anyhow::Error),
    #[error("The request body is not a valid submission.")]
    MalformedBody(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct FailureBody<'a> {
    success: bool,
    error: &'a str,
}

impl ResponseError for SubmissionError {
    // Every failure shares one status and one envelope.
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(FailureBody {
            success: false,
            error: &self.to_string(),
        })
    }
}

#[derive(serde::Serialize)]
pub struct SubmissionAccepted {
    success: bool,
    id: Uuid,
    #[serde(rename = "emailSent")]
    email_sent: bool,
}

impl SubmissionAccepted {
    pub fn new(id: Uuid) -> Self {
        Self {
            success: true,
            id,
            email_sent: true,
        }
    }
}

/// Route JSON extraction failures through the submission error envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    SubmissionError::MalformedBody(anyhow::anyhow!(err.to_string())).into()
}

/// CORS preflight. The headers themselves are added to every response at startup.
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
