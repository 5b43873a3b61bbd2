pub mod openalex;

use anyhow::{Context, Result};
use openalex::{OpenAlexClient, DEFAULT_API_BASE};
use reqwest::Client;
use ris_core::doi::strip_doi_prefix;
use ris_core::persist::{save_ris, verify_ris, Verification};
use ris_core::{create_ris_entry, BibRecord};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TITLE: &str = "New technologies can cost effectively reduce oil and gas methane emissions";
pub const DEFAULT_OUTPUT: &str = "article_with_abstract.ris";
pub const DEFAULT_USER_AGENT: &str = "openalex-ris/0.1";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub title: String,
    pub output: PathBuf,
    pub api_base: String,
    /// Sent as `mailto` so OpenAlex routes us to the polite pool.
    pub mailto: Option<String>,
    /// `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub bare_doi: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            api_base: DEFAULT_API_BASE.to_string(),
            mailto: None,
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bare_doi: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoResults,
    Written { path: PathBuf, verification: Verification },
}

pub fn build_client(cfg: &FetchConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(cfg.user_agent.clone());
    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Search for `cfg.title`, turn the first hit into an RIS record and write it to `cfg.output`.
///
/// Progress lines meant for the user go to `report`. Request and write failures
/// are returned; an empty result set or a failed post-write check is not an error.
pub async fn run<W: Write>(cfg: &FetchConfig, report: &mut W) -> Result<Outcome> {
    let client = OpenAlexClient::new(build_client(cfg)?, &cfg.api_base, cfg.mailto.clone())?;
    let response = client.search_works(&cfg.title).await?;

    let Some(work) = response.into_first() else {
        tracing::info!(title = %cfg.title, "no results");
        writeln!(report, "No results found for the article name.")?;
        return Ok(Outcome::NoResults);
    };

    let mut record = work.into_record();
    if cfg.bare_doi {
        record.doi = record.doi.as_deref().map(strip_doi_prefix);
    }
    write_summary(&record, report)?;

    let ris = create_ris_entry(&record);
    save_ris(&cfg.output, &ris).with_context(|| format!("saving RIS file to {}", cfg.output.display()))?;
    writeln!(report, "RIS file successfully saved as '{}'.", cfg.output.display())?;

    let verification = verify_ris(&cfg.output);
    if verification.is_ok() {
        tracing::info!(path = %cfg.output.display(), ?verification, "ris file verified");
        writeln!(report, "RIS file verified (file is not empty).")?;
    } else {
        tracing::warn!(path = %cfg.output.display(), ?verification, "ris file failed verification");
        writeln!(report, "RIS file appears to be empty or missing.")?;
    }
    Ok(Outcome::Written { path: cfg.output.clone(), verification })
}

/// Print a failed run's error chain to the same sink `run` reports progress on.
pub fn report_failure<W: Write>(err: &anyhow::Error, report: &mut W) -> std::io::Result<()> {
    writeln!(report, "Error: {err:#}")
}

fn write_summary<W: Write>(record: &BibRecord, report: &mut W) -> Result<()> {
    writeln!(report, "Found article:")?;
    writeln!(report, "Title: {}", record.title)?;
    writeln!(report, "DOI: {}", record.doi.as_deref().unwrap_or("N/A"))?;
    match record.year {
        Some(year) => writeln!(report, "Publication Year: {year}")?,
        None => writeln!(report, "Publication Year: N/A")?,
    }
    if record.authors.is_empty() {
        writeln!(report, "Authors: N/A")?;
    } else {
        writeln!(report, "Authors: {}", record.authors.join(", "))?;
    }
    if record.has_abstract() {
        writeln!(report, "Abstract successfully reconstructed.")?;
    } else {
        writeln!(report, "No abstract available.")?;
    }
    Ok(())
}
