use clap::Parser;

use crate::cmd::Commands;

/// Interactive task console over standard input/output.
/// Tasks live in memory for the duration of one session.
#[derive(Parser)]
#[command(name = "tc", version, about = "Interactive terminal task console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}
