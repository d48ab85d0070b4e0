//! Command trait for the dfalex CLI.
//!
//! Every subcommand is a handler built from its arguments plus the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all dfalex commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args, config: Config) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
