//! Core library of the Intentmeter cricket-analytics dashboard.
//!
//! Everything here is framework-free and runs on the native host as well as
//! under WebAssembly: the backend response models, the combobox state
//! machine, the metric normalization pipeline, and the HTTP client with its
//! pure query builders. The Yew application in `main.rs` is a thin view
//! layer over these pieces.

pub mod api;
pub mod metrics;
pub mod models;
pub mod selector;

pub use api::{ApiError, MatchupOutcome};
pub use metrics::{format_count, format_number, format_pct, Advantage};
pub use models::{Mode, PhaseKey, Player};
pub use selector::{filter_players, find_by_key, position_of, SelectorState};
