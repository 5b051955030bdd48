use clap::{Parser, Subcommand};
use fanart_api::{
    API_KEY_ENV, CLIENT_KEY_ENV, ClientConfig, FanartClient, ImagesResult, LatestResult, QueryType,
};
use std::error::Error;
use std::process;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Query artwork from fanart.tv
#[derive(Debug, Parser)]
#[command(name = "fanart", version, about)]
struct Cli {
    /// Project API key
    #[arg(long, env = API_KEY_ENV, default_value = "", hide_env_values = true)]
    api_key: String,

    /// Personal client key
    #[arg(long, env = CLIENT_KEY_ENV, default_value = "", hide_env_values = true)]
    client_key: String,

    /// Abort the request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Print the normalized response as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the artwork of a movie, series, artist, album or label
    Images {
        /// movie, series, artist, album or label
        query_type: QueryType,
        /// IMDb, TMDb, TheTVDB or MusicBrainz id
        id: String,
    },
    /// List entities that recently received new artwork
    Latest {
        /// movie, series, artist, album or label
        query_type: QueryType,
    },
}

/// Prints the name, canonical id and per category image counts
fn print_images(result: &ImagesResult) {
    println!("{:?} ({})", result.name, result.id());

    for (category, images) in result.categories() {
        if !images.is_empty() {
            println!("  {:<18} {}", category, images.len());
        }
    }

    for (album_id, album) in &result.albums {
        println!("  Album {}", album_id);
        for (category, images) in album {
            println!("    {:<16} {}", category, images.len());
        }
    }

    println!("{} image(s) in total", result.image_count());
}

fn print_latest(latest: &[LatestResult]) {
    if latest.is_empty() {
        println!("No recent updates.");
        return;
    }

    for entry in latest {
        println!(
            "{:?} ({}) {}/{}",
            entry.name,
            entry.id(),
            entry.new_images,
            entry.total_images
        );
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = ClientConfig::default()
        .with_api_key(cli.api_key)
        .with_client_key(cli.client_key);
    let client = FanartClient::new(config);

    let cancel = CancellationToken::new();
    if let Some(seconds) = cli.timeout {
        let deadline = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(seconds)).await;
            deadline.cancel();
        });
    }

    match cli.command {
        Command::Images { query_type, id } => {
            let result = client.images(query_type, &id, &cancel).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_images(&result);
            }
        }
        Command::Latest { query_type } => {
            let latest = client.latest(query_type, &cancel).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&latest)?);
            } else {
                print_latest(&latest);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
