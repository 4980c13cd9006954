//! View state for the payload-per-mission card.

use payload_model::{Dataset, Mission, MissionDetail};

use crate::aggregate::aggregate_missions;
use crate::chart::ChartData;
use crate::nationality::{ALL_NATIONS, NationalityChoice, nationality_menu, sorted_nationality_options};
use crate::sort::{SortIndicator, SortKey, SortState};

/// User-controlled state of the card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardState {
    /// Selected nationality; `None` shows all nations.
    pub nationality: Option<String>,
    pub sort: SortState,
    pub dropdown_open: bool,
}

/// The card: a read-only dataset plus the state that shapes its views.
///
/// Every view is derived from scratch on request, so the table and the chart
/// always agree on row order and colors.
#[derive(Debug, Clone)]
pub struct PayloadCard {
    missions: Vec<MissionDetail>,
    state: CardState,
}

impl PayloadCard {
    pub fn new(missions: Vec<MissionDetail>) -> Self {
        Self {
            missions,
            state: CardState::default(),
        }
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self::new(dataset.missions)
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn toggle_dropdown(&mut self) {
        self.state.dropdown_open = !self.state.dropdown_open;
    }

    /// Apply a nationality filter (`None` for all nations) and close the dropdown.
    pub fn select_nationality(&mut self, nationality: Option<String>) {
        tracing::debug!(nationality = nationality.as_deref().unwrap_or(ALL_NATIONS), "filter selected");
        self.state.nationality = nationality;
        self.state.dropdown_open = false;
    }

    /// Restore a previously captured sort state.
    pub fn set_sort(&mut self, sort: SortState) {
        self.state.sort = sort;
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.state.sort.toggle(key);
    }

    pub fn nationality(&self) -> Option<&str> {
        self.state.nationality.as_deref()
    }

    /// Text on the dropdown button.
    pub fn filter_label(&self) -> &str {
        self.nationality().unwrap_or(ALL_NATIONS)
    }

    pub fn nationality_options(&self) -> Vec<String> {
        sorted_nationality_options(&self.missions)
    }

    pub fn nationality_menu(&self) -> Vec<NationalityChoice> {
        nationality_menu(&self.missions, self.nationality())
    }

    pub fn sort_indicator(&self, key: SortKey) -> Option<SortIndicator> {
        self.state.sort.indicator(key)
    }

    /// Filtered, ordered table rows.
    pub fn rows(&self) -> Vec<Mission> {
        let mut rows = aggregate_missions(&self.missions, self.nationality());
        self.state.sort.sort_rows(&mut rows);
        rows
    }

    /// Chart input aligned with [`PayloadCard::rows`].
    pub fn chart(&self) -> ChartData {
        ChartData::from_rows(&self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;

    #[test]
    fn starts_unfiltered_and_unsorted() {
        let card = PayloadCard::new(Vec::new());
        assert_eq!(card.filter_label(), ALL_NATIONS);
        assert_eq!(card.state().sort, SortState::default());
        assert!(!card.state().dropdown_open);
        assert!(card.rows().is_empty());
    }

    #[test]
    fn selecting_closes_dropdown() {
        let mut card = PayloadCard::new(Vec::new());
        card.toggle_dropdown();
        assert!(card.state().dropdown_open);
        card.select_nationality(Some("Japan".to_string()));
        assert!(!card.state().dropdown_open);
        assert_eq!(card.filter_label(), "Japan");
        card.select_nationality(None);
        assert_eq!(card.filter_label(), ALL_NATIONS);
    }

    #[test]
    fn dropdown_toggle_leaves_sort_alone() {
        let mut card = PayloadCard::new(Vec::new());
        card.toggle_sort(SortKey::Mass);
        card.toggle_dropdown();
        card.toggle_dropdown();
        assert_eq!(
            card.state().sort,
            SortState::new(Some(SortKey::Mass), SortDirection::Asc)
        );
    }
}
