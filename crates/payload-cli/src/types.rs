use std::path::PathBuf;

use payload_core::{SortDirection, SortKey};

/// What to load and how to shape the card before rendering.
#[derive(Debug, Clone, Default)]
pub struct ViewRequest {
    /// Dataset file; the bundled dataset when `None`.
    pub dataset: Option<PathBuf>,
    pub nationality: Option<String>,
    /// Initial sort, applied before `clicks`.
    pub sort: Option<(SortKey, SortDirection)>,
    /// Header activations replayed in order.
    pub clicks: Vec<SortKey>,
}
