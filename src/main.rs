//! # TC - Task Console
//!
//! An interactive, line-oriented task console: create, list, filter, search,
//! view, edit and delete tasks held in process memory for the duration of
//! one session.
//!
//! ## Key Features
//!
//! - **Menu Navigation**: every screen prints a fixed text block and reads
//!   one line of input, from the main menu down to per-field edits
//! - **Status Filters**: list everything or restrict to pending, in-progress
//!   or finished tasks
//! - **Title Search**: case-insensitive substring search over task titles
//! - **In-Place Editing**: description, status, difficulty and due date each
//!   update independently
//! - **Session Scope**: nothing touches the filesystem; the list lives and
//!   dies with the process
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the console
//! tc
//!
//! # Generate shell completions
//! tc completions bash
//! ```

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod fields;
pub mod store;
pub mod task;
pub mod console {
    pub mod app;
    pub mod enums;
    pub mod input;
}

use cli::Cli;
use cmd::*;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        None => cmd_session(),
    }
}
