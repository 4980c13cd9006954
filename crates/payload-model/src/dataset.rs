//! Loading the read-only mission dataset.

use std::fs;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::mission::MissionDetail;

/// The static collection of missions the card is built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub missions: Vec<MissionDetail>,
}

/// Accepted document shapes: `{ "missions": [...] }` or the API export
/// envelope `{ "data": { "missions": [...] } }`.
#[derive(Deserialize)]
struct DatasetDocument {
    #[serde(default)]
    data: Option<Dataset>,
    #[serde(default)]
    missions: Option<Vec<MissionDetail>>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let document: DatasetDocument = serde_json::from_str(text)?;
        match (document.data, document.missions) {
            (Some(dataset), _) => Ok(dataset),
            (None, Some(missions)) => Ok(Self { missions }),
            (None, None) => Err(serde_json::Error::missing_field("missions").into()),
        }
    }

    /// Read and parse a dataset file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }
}
