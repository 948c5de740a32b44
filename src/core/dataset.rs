use std::collections::BTreeSet;
use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::Variation;
use crate::error::{ChartError, ChartResult};

/// Raw per-day counters keyed by variation key.
///
/// Key order follows the source document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    #[serde(default)]
    pub visits: IndexMap<String, i64>,
    #[serde(default)]
    pub conversions: IndexMap<String, i64>,
}

impl DailyRecord {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            visits: IndexMap::new(),
            conversions: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_counts(mut self, key: impl Into<String>, visits: i64, conversions: i64) -> Self {
        let key = key.into();
        self.visits.insert(key.clone(), visits);
        self.conversions.insert(key, conversions);
        self
    }
}

/// Experiment document: ordered variations plus chronological daily records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Dataset {
    variations: Vec<Variation>,
    data: Vec<DailyRecord>,
}

#[derive(Debug, Deserialize)]
struct RawVariation {
    #[serde(default)]
    id: Option<i64>,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    variations: Vec<RawVariation>,
    #[serde(default)]
    data: Vec<DailyRecord>,
}

impl Dataset {
    /// Builds a dataset from variations with explicit ids.
    pub fn new(variations: Vec<Variation>, data: Vec<DailyRecord>) -> ChartResult<Self> {
        let mut seen = BTreeSet::new();
        for variation in &variations {
            if !seen.insert(variation.id) {
                return Err(ChartError::DuplicateVariationId { id: variation.id });
            }
        }
        Ok(Self { variations, data })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: RawDataset = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset json: {e}")))?;
        Self::from_raw(raw)
    }

    pub fn from_json_reader<Rd: Read>(reader: Rd) -> ChartResult<Self> {
        let raw: RawDataset = serde_json::from_reader(reader)
            .map_err(|e| ChartError::InvalidData(format!("failed to read dataset json: {e}")))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDataset) -> ChartResult<Self> {
        let variations = assign_variation_ids(
            raw.variations
                .into_iter()
                .map(|variation| (variation.id, variation.name))
                .collect(),
        )?;
        debug!(
            variations = variations.len(),
            records = raw.data.len(),
            "parsed dataset"
        );
        Ok(Self {
            variations,
            data: raw.data,
        })
    }

    #[must_use]
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    #[must_use]
    pub fn records(&self) -> &[DailyRecord] {
        &self.data
    }

    #[must_use]
    pub fn variation(&self, key: &str) -> Option<&Variation> {
        self.variations.iter().find(|variation| variation.key() == key)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize dataset: {e}")))
    }
}

/// Resolves optional ids into unique ones.
///
/// Explicit ids must be unique. The first variation without an id takes `0`
/// when no explicit variation uses it; later ones take the next integer above
/// every id assigned so far.
pub fn assign_variation_ids(raw: Vec<(Option<i64>, String)>) -> ChartResult<Vec<Variation>> {
    let mut used = BTreeSet::new();
    for id in raw.iter().filter_map(|(id, _)| *id) {
        if !used.insert(id) {
            return Err(ChartError::DuplicateVariationId { id });
        }
    }

    let mut variations = Vec::with_capacity(raw.len());
    for (id, name) in raw {
        let id = match id {
            Some(id) => id,
            None => {
                let synthetic = if used.contains(&0) {
                    let max = used.last().copied().unwrap_or(-1);
                    max.checked_add(1).ok_or_else(|| {
                        ChartError::InvalidData("no free variation id left".to_owned())
                    })?
                } else {
                    0
                };
                warn!(name = %name, id = synthetic, "variation without id, assigned synthetic id");
                used.insert(synthetic);
                synthetic
            }
        };
        variations.push(Variation { id, name });
    }
    Ok(variations)
}
