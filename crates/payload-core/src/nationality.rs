//! Nationality filter options derived from the dataset.

use std::collections::HashSet;

use payload_model::MissionDetail;

/// Label shown for the "no filter" menu entry.
pub const ALL_NATIONS: &str = "All Nations";

/// Distinct nationalities across every payload of every mission.
///
/// Values appear once each, in first-seen order. Null payload entries
/// contribute nothing.
pub fn nationality_options(missions: &[MissionDetail]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = Vec::new();
    for payload in missions.iter().flat_map(MissionDetail::present_payloads) {
        if seen.insert(payload.nationality.as_str()) {
            options.push(payload.nationality.clone());
        }
    }
    options
}

/// Nationality options in display order (ascending, code-point lexicographic).
pub fn sorted_nationality_options(missions: &[MissionDetail]) -> Vec<String> {
    let mut options = nationality_options(missions);
    options.sort();
    options
}

/// One entry of the nationality dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NationalityChoice {
    /// Filter value this entry selects; `None` clears the filter.
    pub value: Option<String>,
    pub selected: bool,
}

impl NationalityChoice {
    pub fn label(&self) -> &str {
        self.value.as_deref().unwrap_or(ALL_NATIONS)
    }
}

/// Dropdown entries: "All Nations" first, then each sorted nationality.
pub fn nationality_menu(
    missions: &[MissionDetail],
    current: Option<&str>,
) -> Vec<NationalityChoice> {
    let mut menu = vec![NationalityChoice {
        value: None,
        selected: current.is_none(),
    }];
    menu.extend(
        sorted_nationality_options(missions)
            .into_iter()
            .map(|value| NationalityChoice {
                selected: current == Some(value.as_str()),
                value: Some(value),
            }),
    );
    menu
}
