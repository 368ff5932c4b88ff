//! Enumerations for console session state.

use crate::fields::Status;

/// Current screen of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Main,
    Filter,
    List(Option<Status>),
    Search,
    Create,
    Detail { id: u64, origin: DetailOrigin },
    Edit { id: u64, origin: DetailOrigin },
    Exit,
}

/// Flow a detail screen was reached from.
///
/// The two entry flows resume in different places when the detail screen is
/// dismissed: the listing flow returns to the filter menu, the search flow
/// falls through to the main menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailOrigin {
    Listing,
    Search,
}

impl DetailOrigin {
    /// Screen the session resumes on when a detail view is dismissed.
    pub fn resume_screen(self) -> Screen {
        match self {
            DetailOrigin::Listing => Screen::Filter,
            DetailOrigin::Search => Screen::Main,
        }
    }
}
