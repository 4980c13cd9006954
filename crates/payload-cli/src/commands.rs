use std::path::Path;

use anyhow::{Context, Result};
use payload_core::{PayloadCard, SortState};
use payload_model::Dataset;
use tracing::{info, info_span, warn};

use crate::render::{RenderOptions, print_card, print_nationalities};
use crate::types::ViewRequest;

/// Dataset shipped with the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/missions.json");

pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    let dataset = match path {
        Some(path) => {
            let _span = info_span!("load_dataset", path = %path.display()).entered();
            Dataset::from_path(path)
                .with_context(|| format!("load dataset {}", path.display()))?
        }
        None => Dataset::from_json_str(BUNDLED_DATASET).context("load bundled dataset")?,
    };
    info!(missions = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Load the dataset and bring the card into the requested state.
pub fn build_card(request: &ViewRequest) -> Result<PayloadCard> {
    let dataset = load_dataset(request.dataset.as_deref())?;
    let mut card = PayloadCard::from_dataset(dataset);

    if let Some(nationality) = &request.nationality
        && !card.nationality_options().contains(nationality)
    {
        warn!(nationality = %nationality, "no payload carries this nationality");
    }
    card.select_nationality(request.nationality.clone());

    if let Some((key, direction)) = request.sort {
        card.set_sort(SortState::new(Some(key), direction));
    }
    for click in &request.clicks {
        card.toggle_sort(*click);
    }
    Ok(card)
}

pub fn run_card(request: &ViewRequest, options: &RenderOptions) -> Result<()> {
    let card = build_card(request)?;
    print_card(&card, options);
    Ok(())
}

pub fn run_nationalities(request: &ViewRequest, options: &RenderOptions) -> Result<()> {
    let card = build_card(request)?;
    print_nationalities(&card, options);
    Ok(())
}

pub fn run_chart(request: &ViewRequest) -> Result<()> {
    let card = build_card(request)?;
    let json = serde_json::to_string_pretty(&card.chart()).context("serialize chart")?;
    println!("{json}");
    Ok(())
}
