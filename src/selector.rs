//! State machine behind the player combobox.
//!
//! The machine owns only the transient editing state: whether the dropdown
//! is open, the typed filter text, and the highlighted row. The selected key
//! is a controlled value held by the caller — the machine reports commits
//! through [`KeyOutcome`] and the caller decides what to do with them. If
//! the entity list is replaced and the selected key vanishes, clearing the
//! selection is the caller's job.

use crate::models::Player;

/// Transient open/query/highlight state of one combobox instance.
///
/// While `open` is true, `highlighted` is an index into the *filtered* view
/// of the entity list; while closed it carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorState {
    open: bool,
    query: String,
    highlighted: usize,
}

/// What a keystroke did to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The dropdown opened (Enter/ArrowDown while closed).
    Opened,
    /// The highlight moved.
    Moved,
    /// The row at this filtered index was committed and the dropdown closed.
    Committed(usize),
    /// The dropdown closed without committing (Escape/Tab).
    Closed,
    /// The key is not part of the contract here.
    Ignored,
}

impl SelectorState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Open the dropdown: query resets to empty, highlight lands on the
    /// currently selected entity's position in the full list, or 0.
    pub fn open_at(&mut self, selected_pos: Option<usize>) {
        self.open = true;
        self.query.clear();
        self.highlighted = selected_pos.unwrap_or(0);
    }

    /// Close the dropdown and clear the filter text. Selection is untouched
    /// — it lives with the caller.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    /// Replace the filter text. Every keystroke resets the highlight to the
    /// top of the (re)filtered view, and typing into a closed box opens it.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.highlighted = 0;
        self.open = true;
    }

    /// Move the highlight forward, clamped to the last filtered row.
    pub fn move_down(&mut self, filtered_len: usize) {
        if filtered_len > 0 {
            self.highlighted = (self.highlighted + 1).min(filtered_len - 1);
        }
    }

    /// Move the highlight backward, clamped to the first row.
    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Pin the highlight to a specific filtered row (pointer hover).
    pub fn highlight(&mut self, index: usize) {
        self.highlighted = index;
    }

    /// Apply one keyboard event.
    ///
    /// `filtered_len` is the length of the current filtered view;
    /// `selected_pos` is the selected entity's position in the *full* list,
    /// used as the initial highlight when a closed box opens.
    pub fn handle_key(
        &mut self,
        key: &str,
        filtered_len: usize,
        selected_pos: Option<usize>,
    ) -> KeyOutcome {
        if !self.open {
            return match key {
                "Enter" | "ArrowDown" => {
                    self.open_at(selected_pos);
                    KeyOutcome::Opened
                }
                _ => KeyOutcome::Ignored,
            };
        }
        match key {
            "ArrowDown" => {
                self.move_down(filtered_len);
                KeyOutcome::Moved
            }
            "ArrowUp" => {
                self.move_up();
                KeyOutcome::Moved
            }
            "Enter" => {
                if self.highlighted < filtered_len {
                    let committed = self.highlighted;
                    self.close();
                    KeyOutcome::Committed(committed)
                } else {
                    // Empty filtered view: nothing to commit.
                    KeyOutcome::Ignored
                }
            }
            "Escape" | "Tab" => {
                self.close();
                KeyOutcome::Closed
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

/// Case-insensitive containment filter over display name and country.
/// An empty or whitespace-only query returns the full list.
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return players.iter().collect();
    }
    players
        .iter()
        .filter(|p| {
            p.display_name.to_lowercase().contains(&needle)
                || p.country
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Pure lookup of an entity by its key. Pages use this to rebuild the
/// "selected entity" display instead of caching derived state.
pub fn find_by_key<'a>(players: &'a [Player], key: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.unique_name == key)
}

/// Position of a key in the full list, for the initial open highlight.
pub fn position_of(players: &[Player], key: Option<&str>) -> Option<usize> {
    key.and_then(|k| players.iter().position(|p| p.unique_name == k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(key: &str, name: &str, country: &str) -> Player {
        Player {
            unique_name: key.into(),
            display_name: name.into(),
            country: Some(country.into()),
        }
    }

    fn sample() -> Vec<Player> {
        vec![
            player("a", "Kohli", "India"),
            player("b", "Rohit", "India"),
            player("c", "Rabada", "South Africa"),
        ]
    }

    #[test]
    fn filter_matches_display_name() {
        let players = sample();
        let hits = filter_players(&players, "ko");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].unique_name, "a");
    }

    #[test]
    fn filter_matches_country_case_insensitively() {
        let players = sample();
        let hits = filter_players(&players, "south");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].unique_name, "c");
    }

    #[test]
    fn empty_query_returns_full_list() {
        let players = sample();
        assert_eq!(filter_players(&players, "").len(), 3);
        assert_eq!(filter_players(&players, "   ").len(), 3);
    }

    #[test]
    fn open_highlights_current_selection() {
        let players = sample();
        let mut state = SelectorState::default();
        state.open_at(position_of(&players, Some("b")));
        assert!(state.is_open());
        assert_eq!(state.highlighted(), 1);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn open_without_selection_highlights_first_row() {
        let mut state = SelectorState::default();
        state.open_at(None);
        assert_eq!(state.highlighted(), 0);
    }

    #[test]
    fn enter_or_down_opens_closed_box() {
        let mut state = SelectorState::default();
        assert_eq!(state.handle_key("Enter", 3, None), KeyOutcome::Opened);
        let mut state = SelectorState::default();
        assert_eq!(state.handle_key("ArrowDown", 3, Some(2)), KeyOutcome::Opened);
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn down_down_enter_selects_third_row_and_closes() {
        let mut state = SelectorState::default();
        state.open_at(None);
        assert_eq!(state.handle_key("ArrowDown", 3, None), KeyOutcome::Moved);
        assert_eq!(state.handle_key("ArrowDown", 3, None), KeyOutcome::Moved);
        assert_eq!(state.handle_key("Enter", 3, None), KeyOutcome::Committed(2));
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut state = SelectorState::default();
        state.open_at(None);
        state.move_up();
        assert_eq!(state.highlighted(), 0);
        for _ in 0..10 {
            state.move_down(3);
        }
        assert_eq!(state.highlighted(), 2);
    }

    #[test]
    fn typing_resets_highlight_and_opens() {
        let mut state = SelectorState::default();
        state.open_at(Some(2));
        state.set_query("ro");
        assert_eq!(state.highlighted(), 0);
        assert!(state.is_open());

        let mut closed = SelectorState::default();
        closed.set_query("r");
        assert!(closed.is_open());
    }

    #[test]
    fn escape_closes_and_clears_query_without_committing() {
        let mut state = SelectorState::default();
        state.open_at(None);
        state.set_query("ko");
        assert_eq!(state.handle_key("Escape", 1, None), KeyOutcome::Closed);
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn tab_closes_without_committing() {
        let mut state = SelectorState::default();
        state.open_at(None);
        assert_eq!(state.handle_key("Tab", 3, None), KeyOutcome::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn enter_on_empty_filtered_view_is_inert() {
        let mut state = SelectorState::default();
        state.open_at(None);
        state.set_query("zzz");
        assert_eq!(state.handle_key("Enter", 0, None), KeyOutcome::Ignored);
        assert!(state.is_open());
    }

    #[test]
    fn find_by_key_is_a_plain_lookup() {
        let players = sample();
        assert_eq!(find_by_key(&players, "c").map(|p| p.display_name.as_str()), Some("Rabada"));
        assert!(find_by_key(&players, "nope").is_none());
        assert!(find_by_key(&[], "a").is_none());
    }
}
