use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselType {
    ContainerShip,
    BulkCarrier,
    Tanker,
    GeneralCargo,
    RoRo,
    PassengerShip,
    FishingVessel,
    OffshoreVessel,
    TugBoat,
    Barge,
    Other,
}

impl VesselType {
    pub const ALL: [VesselType; 11] = [
        VesselType::ContainerShip,
        VesselType::BulkCarrier,
        VesselType::Tanker,
        VesselType::GeneralCargo,
        VesselType::RoRo,
        VesselType::PassengerShip,
        VesselType::FishingVessel,
        VesselType::OffshoreVessel,
        VesselType::TugBoat,
        VesselType::Barge,
        VesselType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VesselType::ContainerShip => "Container Ship",
            VesselType::BulkCarrier => "Bulk Carrier",
            VesselType::Tanker => "Tanker",
            VesselType::GeneralCargo => "General Cargo",
            VesselType::RoRo => "Ro-Ro",
            VesselType::PassengerShip => "Passenger Ship",
            VesselType::FishingVessel => "Fishing Vessel",
            VesselType::OffshoreVessel => "Offshore Vessel",
            VesselType::TugBoat => "Tug Boat",
            VesselType::Barge => "Barge",
            VesselType::Other => "Other",
        }
    }

    /// Labels must match exactly, as offered by the quote form.
    pub fn parse(s: &str) -> Result<VesselType, ValidationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|vessel_type| vessel_type.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownVesselType(s.to_string()))
    }
}
