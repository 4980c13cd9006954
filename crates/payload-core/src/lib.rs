//! Payload-per-mission card: aggregation, nationality filtering, sorting and
//! chart projection over a static mission dataset.

pub mod aggregate;
pub mod card;
pub mod chart;
pub mod format;
pub mod nationality;
pub mod sort;

pub use aggregate::{aggregate_missions, mission_color, mission_total};
pub use card::{CardState, PayloadCard};
pub use chart::{CHART_DATASET_LABEL, ChartData, ChartDataset, ChartSegment};
pub use format::MassFormat;
pub use nationality::{
    ALL_NATIONS, NationalityChoice, nationality_menu, nationality_options,
    sorted_nationality_options,
};
pub use sort::{SortDirection, SortIndicator, SortKey, SortState, compare_names};
