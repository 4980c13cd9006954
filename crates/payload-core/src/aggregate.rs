//! Per-mission payload mass totals.

use payload_model::{Mission, MissionDetail, Payload};

/// Number of id characters reused as the row color.
const COLOR_SEED_LEN: usize = 6;

/// Row color for a mission: `#` followed by the first six characters of its id.
///
/// Shorter ids yield a shorter string; nothing is validated or padded.
pub fn mission_color(id: &str) -> String {
    let seed: String = id.chars().take(COLOR_SEED_LEN).collect();
    format!("#{seed}")
}

fn qualifies(payload: &Payload, nationality: Option<&str>) -> Option<f64> {
    let mass = payload.payload_mass_kg?;
    match nationality {
        Some(filter) if filter != payload.nationality => None,
        _ => Some(mass),
    }
}

/// Summed mass of the payloads that match `nationality` (`None` matches all).
pub fn mission_total(mission: &MissionDetail, nationality: Option<&str>) -> f64 {
    mission
        .present_payloads()
        .filter_map(|payload| qualifies(payload, nationality))
        .sum()
}

/// Build one row per mission with a positive filtered total, in dataset order.
pub fn aggregate_missions(missions: &[MissionDetail], nationality: Option<&str>) -> Vec<Mission> {
    let rows: Vec<Mission> = missions
        .iter()
        .filter_map(|mission| {
            let total = mission_total(mission, nationality);
            (total > 0.0).then(|| Mission {
                name: mission.name.clone(),
                color: mission_color(&mission.id),
                total,
            })
        })
        .collect();
    tracing::debug!(
        missions = missions.len(),
        rows = rows.len(),
        nationality = nationality.unwrap_or("*"),
        "aggregated payload mass"
    );
    rows
}
