use crate::domain::{
    require_fields, sanitize, sanitize_optional, ContactSubmission, EmailAddress, ValidationError,
};
use crate::notification::NotificationDispatcher;
use crate::routes::submission::{SubmissionAccepted, SubmissionError};
use crate::startup::DbConnectionKind;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    service_type: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = sanitize(form.name.as_deref().unwrap_or_default());
        let email = sanitize(form.email.as_deref().unwrap_or_default());
        let message = sanitize(form.message.as_deref().unwrap_or_default());

        require_fields(&[("name", &name), ("email", &email), ("message", &message)])?;

        Ok(ContactSubmission {
            name,
            email: EmailAddress::parse(email)?,
            phone: sanitize_optional(form.phone.as_deref()),
            service_type: sanitize_optional(form.service_type.as_deref()),
            message,
        })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, database, dispatcher),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty,
        submission_id = tracing::field::Empty
    )
)]
pub async fn send_contact_email(
    form: web::Json<ContactForm>,
    database: web::Data<DbConnectionKind>,
    dispatcher: web::Data<NotificationDispatcher>,
) -> Result<HttpResponse, SubmissionError> {
    let submission: ContactSubmission = form.0.try_into()?;
    tracing::Span::current()
        .record("submitter_email", &tracing::field::display(&submission.email))
        .record("submitter_name", &tracing::field::display(&submission.name));

    let submission_id = insert_contact_submission(&database, &submission)
        .await
        .context("Failed to insert the contact submission in the database.")
        .map_err(SubmissionError::StoreError)?;
    tracing::Span::current().record("submission_id", &tracing::field::display(&submission_id));

    dispatcher
        .dispatch(&submission, submission_id)
        .await
        .map_err(SubmissionError::NotificationError)?;

    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(submission_id)))
}

#[tracing::instrument(
    name = "Saving new contact submission in the database",
    skip(submission, database)
)]
pub async fn insert_contact_submission(
    database: &DbConnectionKind,
    submission: &ContactSubmission,
) -> Result<Uuid, sqlx::Error> {
    let submission_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO contact_submissions (name, email, phone, service_type, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(&submission.name)
    .bind(submission.email.as_str())
    .bind(submission.phone.as_deref())
    .bind(submission.service_type.as_deref())
    .bind(&submission.message)
    .bind(Utc::now())
    .fetch_one(database)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(submission_id)
}
