use super::{escape, field, multiline, optional_field, Notification};
use crate::domain::{ContactSubmission, EmailAddress};
use uuid::Uuid;

impl Notification for ContactSubmission {
    const BUSINESS_SENDER: &'static str = "Contact Form";

    fn submitter_email(&self) -> &EmailAddress {
        &self.email
    }

    fn business_subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    fn business_html(&self, submission_id: Uuid) -> String {
        format!(
            r#"<h2>New Contact Form Submission</h2>
{name}
{email}
{phone}
{service_type}
<p><strong>Message:</strong></p>
<p>{message}</p>
<hr>
<p><small>Submission ID: {submission_id}</small></p>"#,
            name = field("Name", &self.name),
            email = field("Email", self.email.as_str()),
            phone = optional_field("Phone", self.phone.as_deref()),
            service_type = optional_field("Service Type", self.service_type.as_deref()),
            message = multiline(&self.message),
            submission_id = submission_id,
        )
    }

    fn confirmation_subject(&self, company_name: &str) -> String {
        format!("Thank you for contacting {}", company_name)
    }

    fn confirmation_html(&self, submission_id: Uuid, company_name: &str) -> String {
        format!(
            r#"<h2>Thank you for contacting us, {name}!</h2>
<p>We have received your message and will get back to you as soon as possible.</p>
<p><strong>Your message:</strong></p>
<p>{message}</p>
<p>Best regards,<br>The {company} Team</p>
<p><small>Reference: {submission_id}</small></p>"#,
            name = escape(&self.name),
            message = multiline(&self.message),
            company = escape(company_name),
            submission_id = submission_id,
        )
    }
}
