use crate::domain::{EmailAddress, VesselType};

/// A port call quotation request that passed sanitization and validation.
#[derive(Debug)]
pub struct QuoteRequest {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub country: String,
    pub port_name: String,
    pub vessel_type: VesselType,
    pub grt_nrt: String,
    pub dwt: String,
    pub loa_beam: String,
    pub built: String,
    pub crane_capacity: String,
    pub commodity: String,
    pub quantity: String,
    pub additional_notes: Option<String>,
}
