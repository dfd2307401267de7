//! Shared application state.

use crate::schedule::{team, Person, WeekRosters};

/// Read-only state shared across request handlers.
///
/// Built once at startup and handed to the router behind an `Arc`; the
/// roster tables are never mutated afterwards, so handlers need no
/// locking.
pub struct AppState {
    pub rosters: WeekRosters,
    pub team: Vec<Person>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            rosters: WeekRosters::default(),
            team: team(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
