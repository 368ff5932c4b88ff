//! Command implementations for the CLI interface.
//!
//! The default invocation (no subcommand) runs the interactive console
//! session; the only subcommand generates shell completion scripts.

use std::io;

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::console::app::ConsoleApp;
use crate::console::input::Console;

/// Name greeted at the top of the main menu.
const USER_NAME: &str = "Olivia";

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Run the interactive console session over stdin/stdout.
pub fn cmd_session() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut app = ConsoleApp::new(USER_NAME);

    if let Err(e) = app.run(&mut console) {
        eprintln!("Console session failed: {}", e);
        std::process::exit(1);
    }
}

/// Print a completion script for the given shell.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
