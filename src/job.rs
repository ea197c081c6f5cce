use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ValidatorConfig;
use crate::data::loader::{load_dataset, save_dataset};
use crate::data::manifest::load_manifest;
use crate::data::validate::{validate_with, ValidationSummary};
use crate::error::{Result, ValidatorError};

// ---------------------------------------------------------------------------
// One validation run
// ---------------------------------------------------------------------------

/// Everything a run needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct ValidationJob {
    pub manifest_path: PathBuf,
    pub dataset_path: PathBuf,
    /// Defaults to `<dataset stem><output_suffix>.csv` beside the dataset.
    pub output_path: Option<PathBuf>,
    pub config: ValidatorConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub output_path: PathBuf,
    pub manifest_entries: usize,
    pub summary: ValidationSummary,
}

impl ValidationJob {
    pub fn new(manifest_path: impl Into<PathBuf>, dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
            dataset_path: dataset_path.into(),
            output_path: None,
            config: ValidatorConfig::default(),
        }
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.config.output_path_for(&self.dataset_path))
    }

    /// Parse the manifest, annotate the dataset and write the output CSV.
    ///
    /// Refuses to run when the manifest has no range entries or the dataset
    /// header lacks every component column.
    pub fn run(&self) -> Result<JobReport> {
        require_file(&self.manifest_path)?;
        require_file(&self.dataset_path)?;

        let entries = load_manifest(&self.manifest_path, &self.config.section_marker)?;
        if entries.is_empty() {
            return Err(ValidatorError::EmptyManifest {
                marker: self.config.section_marker.clone(),
            });
        }

        let mut dataset = load_dataset(&self.dataset_path)?;
        let outcomes = validate_with(&mut dataset, &entries, &self.config)?;

        let output_path = self.resolved_output_path();
        save_dataset(&dataset, &output_path)?;
        log::info!("wrote {}", output_path.display());

        Ok(JobReport {
            output_path,
            manifest_entries: entries.len(),
            summary: ValidationSummary::from_outcomes(&outcomes),
        })
    }
}

fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ValidatorError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        ))
    }
}
