/// Data layer: name normalisation, manifest parsing, CSV I/O and validation.
///
/// Architecture:
/// ```text
///   manifest .k/.txt              dataset .csv
///        │                             │
///        ▼                             ▼
///   ┌──────────┐                  ┌──────────┐
///   │ manifest │ → ManifestEntry  │  loader  │ → Dataset
///   └──────────┘                  └──────────┘
///        │       ┌───────────┐         │
///        └──────▶│ normalize │◀────────┘
///                └───────────┘
///                      │
///                      ▼
///               ┌────────────┐
///               │  validate  │  annotate rows → Result column
///               └────────────┘
/// ```

pub mod loader;
pub mod manifest;
pub mod model;
pub mod normalize;
pub mod validate;
