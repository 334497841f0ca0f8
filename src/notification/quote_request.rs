use super::{escape, field, multiline, optional_field, Notification};
use crate::domain::{EmailAddress, QuoteRequest};
use uuid::Uuid;

impl Notification for QuoteRequest {
    const BUSINESS_SENDER: &'static str = "Quote Request";

    fn submitter_email(&self) -> &EmailAddress {
        &self.email
    }

    fn business_subject(&self) -> String {
        format!("New Quote Request from {}", self.name)
    }

    fn business_html(&self, submission_id: Uuid) -> String {
        let additional_notes = self
            .additional_notes
            .as_deref()
            .map(|notes| format!("<h3>Additional Notes</h3>\n<p>{}</p>", multiline(notes)))
            .unwrap_or_default();

        format!(
            r#"<h2>New Quote Request</h2>

<h3>Contact Information</h3>
{name}
{email}
{phone}
{company}

<h3>Port Information</h3>
{country}
{port_name}

<h3>Vessel Information</h3>
{vessel_type}
{grt_nrt}
{dwt}
{loa_beam}
{built}
{crane_capacity}

<h3>Cargo Information</h3>
{commodity}
{quantity}

{additional_notes}

<hr>
<p><small>Request ID: {submission_id}</small></p>"#,
            name = field("Name", &self.name),
            email = field("Email", self.email.as_str()),
            phone = optional_field("Phone", self.phone.as_deref()),
            company = optional_field("Company", self.company.as_deref()),
            country = field("Country", &self.country),
            port_name = field("Port Name", &self.port_name),
            vessel_type = field("Vessel Type", self.vessel_type.as_str()),
            grt_nrt = field("GRT/NRT", &self.grt_nrt),
            dwt = field("DWT", &self.dwt),
            loa_beam = field("LOA/BEAM", &self.loa_beam),
            built = field("Built", &self.built),
            crane_capacity = field("Crane Capacity", &self.crane_capacity),
            commodity = field("Commodity", &self.commodity),
            quantity = field("Quantity", &self.quantity),
            additional_notes = additional_notes,
            submission_id = submission_id,
        )
    }

    fn confirmation_subject(&self, company_name: &str) -> String {
        format!("Quote Request Received - {}", company_name)
    }

    fn confirmation_html(&self, submission_id: Uuid, company_name: &str) -> String {
        format!(
            r#"<h2>Thank you for your quote request, {name}!</h2>
<p>We have received your quote request and will prepare a detailed quotation for you as soon as possible.</p>

<h3>Your Request Details:</h3>
<p><strong>Port:</strong> {port_name}, {country}</p>
{vessel_type}
{commodity}
{quantity}

<p>Our team will review your requirements and contact you within 24 hours with a comprehensive quotation.</p>

<p>Best regards,<br>The {company} Team</p>
<p><small>Reference: {submission_id}</small></p>"#,
            name = escape(&self.name),
            port_name = escape(&self.port_name),
            country = escape(&self.country),
            vessel_type = field("Vessel Type", self.vessel_type.as_str()),
            commodity = field("Commodity", &self.commodity),
            quantity = field("Quantity", &self.quantity),
            company = escape(company_name),
            submission_id = submission_id,
        )
    }
}
