//! Thread-local caches for session-stable reference data.
//!
//! The player list runs to ~17k entries and every page needs it, so it is
//! fetched once per session and shared through `hooks::use_players` instead
//! of being re-fetched on each navigation. Same for the much smaller team
//! list. Thread-local to avoid synchronization overhead in WASM.

use intentmeter::Player;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Player list shared across page instances for the session's lifetime.
    pub static PLAYERS_CACHE: RefCell<Option<Rc<Vec<Player>>>> = const { RefCell::new(None) };

    /// Team names for the explorer's opposition/team selects.
    pub static TEAMS_CACHE: RefCell<Option<Rc<Vec<String>>>> = const { RefCell::new(None) };
}
