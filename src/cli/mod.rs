//! Command-line interface wiring for pdf-summarizer.

use anyhow::Result;
use clap::Parser;

use crate::config::Settings;

pub mod summarize;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Extractive summaries and keywords for PDF and text documents",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    args: summarize::Args,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Run the summarization command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        summarize::run(self.args, settings).await
    }
}
