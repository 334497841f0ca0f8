//! Outbound notifications for stored submissions.
//!
//! Every stored record triggers two emails, sent one after the other: a
//! notification to the business inbox and a confirmation to the submitter.
//! Only the first one is allowed to fail the request.

mod contact;
mod quote_request;

use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use anyhow::Context;
use uuid::Uuid;

/// A stored record that can be rendered into the two notification emails.
pub trait Notification {
    /// Display name on the business notification's `from` header.
    const BUSINESS_SENDER: &'static str;

    fn submitter_email(&self) -> &EmailAddress;

    fn business_subject(&self) -> String;

    fn business_html(&self, submission_id: Uuid) -> String;

    fn confirmation_subject(&self, company_name: &str) -> String;

    fn confirmation_html(&self, submission_id: Uuid, company_name: &str) -> String;
}

pub struct NotificationDispatcher {
    email_client: EmailClient,
    business_inbox: EmailAddress,
    company_name: String,
}

impl NotificationDispatcher {
    pub fn new(email_client: EmailClient, business_inbox: EmailAddress, company_name: String) -> Self {
        Self {
            email_client,
            business_inbox,
            company_name,
        }
    }

    #[tracing::instrument(
        name = "Dispatching submission notifications",
        skip(self, record)
    )]
    pub async fn dispatch<N: Notification>(
        &self,
        record: &N,
        submission_id: Uuid,
    ) -> Result<(), anyhow::Error> {
        self.email_client
            .send_email(
                N::BUSINESS_SENDER,
                &self.business_inbox,
                &record.business_subject(),
                &record.business_html(submission_id),
            )
            .await
            .context("Failed to send the business notification email.")?;

        if let Err(e) = self
            .email_client
            .send_email(
                &self.company_name,
                record.submitter_email(),
                &record.confirmation_subject(&self.company_name),
                &record.confirmation_html(submission_id, &self.company_name),
            )
            .await
        {
            // The submitter is still told the request went through.
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the confirmation email to the submitter"
            );
        }
        Ok(())
    }
}

fn escape(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

/// Escaped free text with line breaks kept.
fn multiline(value: &str) -> String {
    escape(value).replace('\n', "<br>")
}

fn field(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, escape(value))
}

fn optional_field(label: &str, value: Option<&str>) -> String {
    value.map(|value| field(label, value)).unwrap_or_default()
}
