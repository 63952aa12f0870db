//! JSON output format for experiment tables and uplift results

use crate::experiment::{ExperimentResult, GroupSummary};
use crate::uplift::UpliftResult;
use serde::{Deserialize, Serialize};

/// Experiment table as JSON rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonExperiment {
    /// Control row first, then Variant
    pub rows: Vec<GroupSummary>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Crate version that produced the output
    pub version: String,
    /// Format name
    pub format: String,
    /// Simulated experiment (if one was generated)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiment: Option<JsonExperiment>,
    /// Uplift between the two groups (if requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uplift: Option<UpliftResult>,
}

impl JsonOutput {
    /// Create an empty JSON output structure
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "abtest-json-v1".to_string(),
            experiment: None,
            uplift: None,
        }
    }

    pub fn set_experiment(&mut self, result: &ExperimentResult) {
        self.experiment = Some(JsonExperiment {
            rows: result.rows().into_iter().cloned().collect(),
        });
    }

    pub fn set_uplift(&mut self, uplift: UpliftResult) {
        self.uplift = Some(uplift);
    }

    /// Serialize to JSON string
    ///
    /// Non-finite rates and uplifts are written as `null`.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}
