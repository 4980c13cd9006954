//! Source records and derived view rows.

use serde::{Deserialize, Serialize};

/// A cargo item carried by a mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub id: String,
    /// Mass in kilograms. `None` means the mass is unknown and not counted.
    #[serde(default)]
    pub payload_mass_kg: Option<f64>,
    /// Country or organization the payload originates from.
    pub nationality: String,
}

/// A mission as it appears in the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDetail {
    pub id: String,
    pub name: String,
    /// Payload entries in source order; `None` entries carry no usable data.
    #[serde(default)]
    pub payloads: Vec<Option<Payload>>,
}

impl MissionDetail {
    /// Iterate over the payload entries that are present.
    pub fn present_payloads(&self) -> impl Iterator<Item = &Payload> {
        self.payloads.iter().flatten()
    }
}

/// One aggregated row of the card: a mission with its filtered total mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub name: String,
    pub color: String,
    pub total: f64,
}
