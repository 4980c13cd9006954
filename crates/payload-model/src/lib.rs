pub mod dataset;
pub mod error;
pub mod mission;

pub use dataset::Dataset;
pub use error::{PayloadError, Result};
pub use mission::{Mission, MissionDetail, Payload};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mass_key_reads_as_unknown() {
        let payload: Payload =
            serde_json::from_str(r#"{"id":"p1","nationality":"Japan"}"#).expect("parse payload");
        assert_eq!(payload.payload_mass_kg, None);
        assert_eq!(payload.nationality, "Japan");
    }

    #[test]
    fn mission_row_serializes() {
        let row = Mission {
            name: "CRS-20".to_string(),
            color: "#5eb87e".to_string(),
            total: 1977.0,
        };
        let json = serde_json::to_string(&row).expect("serialize row");
        let round: Mission = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
    }
}
