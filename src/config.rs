use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};

pub const DEFAULT_SECTION_MARKER: &str = "$ Module ID Range";

// ---------------------------------------------------------------------------
// Validator configuration
// ---------------------------------------------------------------------------

/// Column names and manifest marker used by a validation run.
///
/// Every key is optional in a JSON config file; absent keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Line prefix that opens the range section of the manifest.
    pub section_marker: String,
    /// Component name columns, in priority order. The first non-empty value wins.
    pub component_fields: Vec<String>,
    pub start_field: String,
    pub end_field: String,
    /// Column receiving "In Range" / "Out of Range".
    pub result_field: String,
    /// Appended to the dataset file stem to name the output file.
    pub output_suffix: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            component_fields: vec!["Items".to_string(), "Component".to_string()],
            start_field: "Start".to_string(),
            end_field: "End".to_string(),
            result_field: "Result".to_string(),
            output_suffix: "_validated".to_string(),
        }
    }
}

impl ValidatorConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ValidatorError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// `data/parts.csv` → `data/parts_validated.csv`
    pub fn output_path_for(&self, dataset: &Path) -> PathBuf {
        let stem = dataset
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        dataset.with_file_name(format!("{stem}{}.csv", self.output_suffix))
    }
}
