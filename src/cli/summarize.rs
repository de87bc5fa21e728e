//! CLI entry-point for summarizing a document and recording the result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::{error, info, instrument};

use crate::{
    config::Settings,
    data::{
        source,
        store::{JsonStore, RecordStore, SummaryRecord},
    },
    nlp::{self, Language, ScoringMethod, SummaryRequest},
};

/// Args for summarizing one document.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// PDF or UTF-8 text file to summarize.
    pub path: PathBuf,
    /// Number of sentences in the summary [default: 5].
    pub sentences: Option<usize>,
    /// Document language: `en` for English or `es` for Spanish.
    #[arg(default_value = "en")]
    pub language: String,
    /// JSON file the summary record is written to [default: summaries.json].
    #[arg(long)]
    pub store: Option<PathBuf>,
    /// Maximum number of keywords [default: 10].
    #[arg(long)]
    pub keywords: Option<usize>,
    /// Sentence scoring method.
    #[arg(long, value_enum, default_value_t = ScoringMethod::TfIdf)]
    pub method: ScoringMethod,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let language: Language = args.language.parse()?;
    let request = SummaryRequest::new(
        language,
        args.sentences.unwrap_or(settings.default_sentences),
    )
    .with_max_keywords(args.keywords.unwrap_or(settings.max_keywords))
    .with_method(args.method);

    info!(language = language.name(), method = ?args.method, "processing document");
    let text = source::read_document(&args.path).await?;
    let result = nlp::summarize(&text, &request)
        .with_context(|| format!("summarize {}", args.path.display()))?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    let name = source::document_name(&args.path);
    let mut store = JsonStore::new(args.store.unwrap_or(settings.store_path));
    let outcome = store
        .upsert(SummaryRecord::new(name.clone(), result))
        .inspect_err(|e| error!(error = %e, %name, "summary computed but not saved"))?;
    info!(
        %name,
        store = %store.path().display(),
        "summary and keywords {}",
        outcome.as_str()
    );
    Ok(())
}
