/// Data layer: model types, text parsing, and JSON output.
///
/// Architecture:
/// ```text
///  bc03_models.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → ModelTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ModelTable │  wavelengths + six age series
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  serialize → bc03_models.json
///   └──────────┘
/// ```

pub mod error;
pub mod loader;
pub mod model;
pub mod writer;
