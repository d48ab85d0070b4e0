//! Keywords command implementation.
//!
//! Prints the active keyword set (defaults plus configured extras), one per
//! line, sorted.

use std::io::{self, Write};

use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the keywords command.
#[derive(Debug, Clone, Default)]
pub struct KeywordsArgs {}

/// Keywords command handler.
pub struct KeywordsCommand {
    config: Config,
}

impl KeywordsCommand {
    /// Write the keyword list to `out`. Returns how many were written.
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<usize> {
        let lexicon = self.config.lexicon()?;
        let keywords = lexicon.keywords();
        for keyword in &keywords {
            writeln!(out, "{}", keyword)?;
        }
        Ok(keywords.len())
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;
    type Output = usize;

    fn new(_args: Self::Args, config: Config) -> Self {
        Self { config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = io::stdout();
        self.run_with(&mut stdout.lock())
    }

    fn name() -> &'static str {
        "keywords"
    }
}

/// Run the keywords command.
pub fn run_keywords(args: KeywordsArgs, config: Config) -> Result<()> {
    let command = KeywordsCommand::new(args, config);
    tracing::debug!("running {}", KeywordsCommand::name());
    command.execute().map(|_| ())
}
