use animal_repository::app::{self, Outcome};
use animal_repository::config::{Config, DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS};
use animal_repository::fetcher::AnimalsClient;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "animal-repository")]
#[command(about = "Generate an HTML page of animal facts from the API Ninjas animals API")]
struct Args {
    /// Animal to look up (prompted for when omitted)
    animal: Option<String>,

    /// Where to write the page
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// API Ninjas key (or set API_NINJAS_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::from_env()
        .with_cli_api_key(args.api_key)
        .with_base_url(args.base_url)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_output(args.output);

    let query = match args.animal {
        Some(animal) => animal.trim().to_string(),
        None => {
            let stdin = std::io::stdin();
            app::prompt_animal(&mut stdin.lock(), &mut std::io::stdout())?
        }
    };
    info!("Query: {}", query);

    let outcome = match AnimalsClient::new(&config) {
        Ok(client) => app::generate_site(&client, &query, &config.output).await,
        Err(e) => Outcome::FetchFailed {
            message: e.to_string(),
        },
    };

    println!("{}", outcome.status_line());

    Ok(())
}
