// Declare the display submodule
mod display;

// Declare the command definitions
mod args;

// Declare the command handlers
mod commands;

pub use args::{Cli, Command};
pub use commands::{run, Outcome};
