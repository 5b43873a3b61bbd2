use clap::Parser;
use fetcher::openalex::DEFAULT_API_BASE;
use fetcher::{report_failure, run, FetchConfig, DEFAULT_OUTPUT, DEFAULT_TITLE, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "fetcher")]
#[command(about = "Look up one article on OpenAlex by title and save it as an RIS record")]
struct Cli {
    /// Article title to search for
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,
    /// Output RIS file path (overwritten)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// OpenAlex API base URL
    #[arg(long, default_value = DEFAULT_API_BASE)]
    api_base: String,
    /// Contact email for the OpenAlex polite pool
    #[arg(long)]
    mailto: Option<String>,
    /// Request timeout seconds (client default when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// User-Agent header
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Write the DOI without its https://doi.org/ prefix
    #[arg(long, default_value_t = false)]
    bare_doi: bool,
}

impl From<Cli> for FetchConfig {
    fn from(args: Cli) -> Self {
        FetchConfig {
            title: args.title,
            output: args.output,
            api_base: args.api_base,
            mailto: args.mailto,
            timeout: args.timeout_secs.map(Duration::from_secs),
            user_agent: args.user_agent,
            bare_doi: args.bare_doi,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cfg: FetchConfig = Cli::parse().into();
    tracing::info!(title = %cfg.title, output = %cfg.output.display(), "fetching article");

    let mut report = std::io::stdout();
    match run(&cfg, &mut report).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // stdout is the only place the failure is printed
            let _ = report_failure(&err, &mut report);
            ExitCode::FAILURE
        }
    }
}
