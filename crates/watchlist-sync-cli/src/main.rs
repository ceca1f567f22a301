use clap::{ArgAction, Parser};
use color_eyre::eyre::Context;
use std::path::PathBuf;
use std::time::Duration;
use watchlist_config::{CredentialStore, RunPaths, DEFAULT_CREDENTIALS_FILE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use watchlist_core::{storage, SyncError, SyncOptions, WatchlistOrchestrator};
use watchlist_sources::{MalClient, MetadataClient, RetryPolicy, DEFAULT_MAX_ATTEMPTS};

mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watchlist-sync")]
#[command(about = "Enrich an anime watchlist with MyAnimeList titles and cover art")]
#[command(version)]
struct Cli {
    /// Raw watchlist to read
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Processed watchlist to write. An existing file is reused as the lookup cache.
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// JSON file holding the MyAnimeList client id ({"MALClientId": "..."})
    #[arg(long, default_value = DEFAULT_CREDENTIALS_FILE)]
    credentials: PathBuf,

    /// Total attempts per catalog lookup
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    retry_attempts: u32,

    /// Pause between attempts in milliseconds (default: retry immediately)
    #[arg(long, value_name = "MS")]
    retry_delay_ms: Option<u64>,

    /// Ignore the previous output and fetch every entry again
    #[arg(long, action = ArgAction::SetTrue)]
    no_cache: bool,

    /// Write indented JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Summary format
    #[arg(long = "output-format", default_value = "human", value_enum)]
    format: output::OutputFormat,

    /// Also write logs to this file (rotated daily)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.clone())
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.format, cli.quiet);

    let code = run(cli, &output).await?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Returns the process exit status for run-level failures; credential errors abort via `Err`.
async fn run(cli: Cli, output: &output::Output) -> color_eyre::Result<i32> {
    let paths = RunPaths::new(Some(cli.input), Some(cli.output), Some(cli.credentials));

    let input = match storage::load_input(paths.input_file()) {
        Ok(input) => input,
        Err(e) => return Ok(report_failure(output, &e)),
    };

    let mut cred_store = CredentialStore::new(paths.credentials_file().to_path_buf());
    cred_store
        .load()
        .wrap_err("Failed to read and parse MyAnimeList credentials")?;
    let client_id = cred_store
        .get_mal_client_id()
        .ok_or_else(|| color_eyre::eyre::eyre!("MyAnimeList client id is empty"))?;
    let client = MalClient::new(client_id.to_string());

    let mut policy = RetryPolicy::new(cli.retry_attempts);
    if let Some(ms) = cli.retry_delay_ms {
        policy = policy.with_delay(Duration::from_millis(ms));
    }
    tracing::debug!(?policy, ?client, "Catalog client ready");

    let options = SyncOptions {
        use_cache: !cli.no_cache,
        pretty: cli.pretty,
    };
    let orchestrator = WatchlistOrchestrator::new(MetadataClient::new(client).with_retry_policy(policy), options);

    match orchestrator.run_with_input(&paths, &input).await {
        Ok(report) => {
            output.report(&report);
            Ok(0)
        }
        Err(e) => Ok(report_failure(output, &e)),
    }
}

fn report_failure(output: &output::Output, e: &SyncError) -> i32 {
    tracing::error!(exit_code = e.exit_code(), "{}", e);
    output.error(e.to_string());
    e.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    fn cli_in(dir: &TempDir, input: &str, credentials: &str) -> Cli {
        let input = dir.path().join(input);
        let output = dir.path().join("WatchlistProcessed.json");
        let credentials = dir.path().join(credentials);
        Cli::try_parse_from([
            OsStr::new("watchlist-sync"),
            input.as_os_str(),
            output.as_os_str(),
            OsStr::new("--credentials"),
            credentials.as_os_str(),
            OsStr::new("--quiet"),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_bad_input_exits_before_credentials_are_read() {
        let dir = TempDir::new().unwrap();
        let cli = cli_in(&dir, "WatchlistRaw.json", "Credentials.json");
        let output = output::Output::new(output::OutputFormat::Human, true);

        let code = run(cli, &output).await.unwrap();

        assert_eq!(code, -1);
        assert!(!dir.path().join("WatchlistProcessed.json").exists());
    }

    #[tokio::test]
    async fn test_unparsable_input_exits_with_input_status() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("WatchlistRaw.json"), "[1, 2").unwrap();
        let cli = cli_in(&dir, "WatchlistRaw.json", "Credentials.json");
        let output = output::Output::new(output::OutputFormat::Human, true);

        assert_eq!(run(cli, &output).await.unwrap(), -1);
    }

    #[tokio::test]
    async fn test_missing_credentials_abort_after_good_input() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("WatchlistRaw.json"), r#"{"Watching": []}"#).unwrap();
        let cli = cli_in(&dir, "WatchlistRaw.json", "Credentials.json");
        let output = output::Output::new(output::OutputFormat::Human, true);

        let err = run(cli, &output).await.unwrap_err();

        assert!(err.to_string().contains("credentials"));
        assert!(!dir.path().join("WatchlistProcessed.json").exists());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["watchlist-sync"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("WatchlistRaw.json"));
        assert_eq!(cli.output, PathBuf::from("WatchlistProcessed.json"));
        assert_eq!(cli.credentials, PathBuf::from("Credentials.json"));
        assert_eq!(cli.retry_attempts, 3);
        assert_eq!(cli.retry_delay_ms, None);
        assert!(!cli.no_cache);
        assert!(!cli.pretty);
    }

    #[test]
    fn test_cli_positional_paths_and_flags() {
        let cli = Cli::try_parse_from([
            "watchlist-sync",
            "in.json",
            "out.json",
            "--retry-delay-ms",
            "250",
            "--no-cache",
            "-vv",
            "--output-format",
            "json-pretty",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.json"));
        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.retry_delay_ms, Some(250));
        assert!(cli.no_cache);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, output::OutputFormat::JsonPretty);
    }
}
