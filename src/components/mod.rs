//! Reusable view components.

mod assistant;
mod combobox;
mod compare_table;
mod controls;
mod navbar;
mod phase_card;
mod stat_card;

pub use assistant::{AssistantMessageView, ChatMessage, ChatResults};
pub use combobox::PlayerCombobox;
pub use compare_table::CompareTable;
pub use controls::{option_pairs, SegmentedControl, SelectField, ToggleChip};
pub use navbar::Navbar;
pub use phase_card::PhaseCard;
pub use stat_card::StatCard;
