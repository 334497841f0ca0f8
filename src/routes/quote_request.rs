use crate::domain::{
    require_fields, sanitize, sanitize_optional, EmailAddress, QuoteRequest, ValidationError,
    VesselType,
};
use crate::notification::NotificationDispatcher;
use crate::routes::submission::{SubmissionAccepted, SubmissionError};
use crate::startup::DbConnectionKind;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct QuoteRequestForm {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    company: Option<String>,
    country: Option<String>,
    port_name: Option<String>,
    vessel_type: Option<String>,
    grt_nrt: Option<String>,
    dwt: Option<String>,
    loa_beam: Option<String>,
    built: Option<String>,
    crane_capacity: Option<String>,
    commodity: Option<String>,
    quantity: Option<String>,
    additional_notes: Option<String>,
}

fn required(value: &Option<String>) -> String {
    sanitize(value.as_deref().unwrap_or_default())
}

impl TryFrom<QuoteRequestForm> for QuoteRequest {
    type Error = ValidationError;

    fn try_from(form: QuoteRequestForm) -> Result<Self, Self::Error> {
        let name = required(&form.name);
        let email = required(&form.email);
        let country = required(&form.country);
        let port_name = required(&form.port_name);
        let vessel_type = required(&form.vessel_type);
        let grt_nrt = required(&form.grt_nrt);
        let dwt = required(&form.dwt);
        let loa_beam = required(&form.loa_beam);
        let built = required(&form.built);
        let crane_capacity = required(&form.crane_capacity);
        let commodity = required(&form.commodity);
        let quantity = required(&form.quantity);

        require_fields(&[
            ("name", &name),
            ("email", &email),
            ("country", &country),
            ("port_name", &port_name),
            ("vessel_type", &vessel_type),
            ("grt_nrt", &grt_nrt),
            ("dwt", &dwt),
            ("loa_beam", &loa_beam),
            ("built", &built),
            ("crane_capacity", &crane_capacity),
            ("commodity", &commodity),
            ("quantity", &quantity),
        ])?;

        Ok(QuoteRequest {
            name,
            email: EmailAddress::parse(email)?,
            phone: sanitize_optional(form.phone.as_deref()),
            company: sanitize_optional(form.company.as_deref()),
            country,
            port_name,
            vessel_type: VesselType::parse(&vessel_type)?,
            grt_nrt,
            dwt,
            loa_beam,
            built,
            crane_capacity,
            commodity,
            quantity,
            additional_notes: sanitize_optional(form.additional_notes.as_deref()),
        })
    }
}

#[tracing::instrument(
    name = "Handling a quote request",
    skip(form, database, dispatcher),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty,
        submission_id = tracing::field::Empty
    )
)]
pub async fn send_quote_request(
    form: web::Json<QuoteRequestForm>,
    database: web::Data<DbConnectionKind>,
    dispatcher: web::Data<NotificationDispatcher>,
) -> Result<HttpResponse, SubmissionError> {
    let request: QuoteRequest = form.0.try_into()?;
    tracing::Span::current()
        .record("submitter_email", &tracing::field::display(&request.email))
        .record("submitter_name", &tracing::field::display(&request.name));

    let request_id = insert_quote_request(&database, &request)
        .await
        .context("Failed to insert the quote request in the database.")
        .map_err(SubmissionError::StoreError)?;
    tracing::Span::current().record("submission_id", &tracing::field::display(&request_id));

    dispatcher
        .dispatch(&request, request_id)
        .await
        .map_err(SubmissionError::NotificationError)?;

    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(request_id)))
}

#[tracing::instrument(
    name = "Saving new quote request in the database",
    skip(request, database)
)]
pub async fn insert_quote_request(
    database: &DbConnectionKind,
    request: &QuoteRequest,
) -> Result<Uuid, sqlx::Error> {
    let request_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO quote_requests (
            name, email, phone, company, country, port_name, vessel_type, grt_nrt, dwt,
            loa_beam, built, crane_capacity, commodity, quantity, additional_notes, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING id
        "#,
    )
    .bind(&request.name)
    .bind(request.email.as_str())
    .bind(request.phone.as_deref())
    .bind(request.company.as_deref())
    .bind(&request.country)
    .bind(&request.port_name)
    .bind(request.vessel_type.as_str())
    .bind(&request.grt_nrt)
    .bind(&request.dwt)
    .bind(&request.loa_beam)
    .bind(&request.built)
    .bind(&request.crane_capacity)
    .bind(&request.commodity)
    .bind(&request.quantity)
    .bind(request.additional_notes.as_deref())
    .bind(Utc::now())
    .fetch_one(database)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        e
    })?;
    Ok(request_id)
}
