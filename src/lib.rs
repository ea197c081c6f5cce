//! Checks that the module ID ranges listed in a CSV dataset sit inside the
//! ranges a keyword manifest declares under its `$ Module ID Range` section.
//!
//! The library holds no state between calls: [`parse_manifest`] turns manifest
//! text into entries, [`validate`] annotates a [`Dataset`] against them, and
//! [`ValidationJob`] wires both to files.

pub mod config;
pub mod data;
pub mod error;
pub mod job;

pub use config::{ValidatorConfig, DEFAULT_SECTION_MARKER};
pub use data::loader::{load_dataset, read_dataset, save_dataset, write_dataset};
pub use data::manifest::{
    decode_manifest_bytes, load_manifest, parse_manifest, parse_manifest_with_marker,
};
pub use data::model::{Dataset, DatasetRow, ManifestEntry, RowOutcome, Verdict};
pub use data::normalize::{normalize_dataset_name, normalize_manifest_name};
pub use data::validate::{check_columns, classify_row, validate, validate_with, ValidationSummary};
pub use error::{Result, ValidatorError};
pub use job::{JobReport, ValidationJob};
