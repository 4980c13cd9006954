//! Property tests for aggregation and ordering.

use std::collections::HashSet;

use payload_core::{SortDirection, SortKey, SortState, aggregate_missions, nationality_options};
use payload_model::{MissionDetail, Payload};
use proptest::prelude::*;

const NATIONS: &[&str] = &["Canada", "France", "Japan", "United States"];

fn payload_strategy() -> impl Strategy<Value = Option<Payload>> {
    prop::option::of((
        prop::option::of(0u32..10_000),
        prop::sample::select(NATIONS),
    ))
    .prop_map(|entry| {
        entry.map(|(mass, nationality)| Payload {
            id: "payload".to_string(),
            payload_mass_kg: mass.map(f64::from),
            nationality: nationality.to_string(),
        })
    })
}

fn missions_strategy() -> impl Strategy<Value = Vec<MissionDetail>> {
    prop::collection::vec(
        (
            "[0-9a-f]{4,10}",
            "[A-Za-z]{1,8}",
            prop::collection::vec(payload_strategy(), 0..5),
        ),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(id, name, payloads)| MissionDetail { id, name, payloads })
            .collect()
    })
}

fn filter_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(NATIONS).prop_map(str::to_string))
}

fn key_strategy() -> impl Strategy<Value = SortKey> {
    prop::sample::select(vec![SortKey::Mission, SortKey::Mass])
}

proptest! {
    #[test]
    fn rows_always_have_positive_totals(
        missions in missions_strategy(),
        filter in filter_strategy(),
    ) {
        let rows = aggregate_missions(&missions, filter.as_deref());
        prop_assert!(rows.iter().all(|row| row.total > 0.0));
    }

    #[test]
    fn totals_match_matching_payloads(
        missions in missions_strategy(),
        filter in filter_strategy(),
    ) {
        let rows = aggregate_missions(&missions, filter.as_deref());
        let expected: Vec<(String, f64)> = missions
            .iter()
            .map(|mission| {
                let total: f64 = mission
                    .payloads
                    .iter()
                    .flatten()
                    .filter(|payload| {
                        filter.as_deref().is_none_or(|nation| nation == payload.nationality)
                    })
                    .filter_map(|payload| payload.payload_mass_kg)
                    .sum();
                (mission.name.clone(), total)
            })
            .filter(|(_, total)| *total > 0.0)
            .collect();
        let actual: Vec<(String, f64)> =
            rows.into_iter().map(|row| (row.name, row.total)).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn mass_descending_reverses_ascending(missions in missions_strategy()) {
        let rows = aggregate_missions(&missions, None);
        let distinct: HashSet<u64> = rows.iter().map(|row| row.total.to_bits()).collect();
        prop_assume!(distinct.len() == rows.len());

        let mut ascending = rows.clone();
        SortState::new(Some(SortKey::Mass), SortDirection::Asc).sort_rows(&mut ascending);
        let mut descending = rows;
        SortState::new(Some(SortKey::Mass), SortDirection::Desc).sort_rows(&mut descending);
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn three_toggles_clear_the_sort(
        start in prop::option::of(key_strategy()),
        key in key_strategy(),
    ) {
        let mut state = SortState::new(start.filter(|k| *k != key), SortDirection::Asc);
        state.toggle(key);
        state.toggle(key);
        state.toggle(key);
        prop_assert_eq!(state, SortState::new(None, SortDirection::Asc));
    }

    #[test]
    fn nationality_options_are_distinct(missions in missions_strategy()) {
        let options = nationality_options(&missions);
        let distinct: HashSet<&String> = options.iter().collect();
        prop_assert_eq!(distinct.len(), options.len());
        for mission in &missions {
            for payload in mission.payloads.iter().flatten() {
                prop_assert!(options.contains(&payload.nationality));
            }
        }
    }
}
