//! Data layer: modal dataset types and CSV loading.
//!
//! ```text
//!  yonghe_modal_fdd.csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse CSV → one mode row
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ ModalRecord  │  label + per-sample frequencies
//!   └─────────────┘
//! ```

pub mod loader;
pub mod model;
