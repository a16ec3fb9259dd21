use clap::{Parser, Subcommand, ValueEnum};
use muvi_scrape::config::Config;
use muvi_scrape::dutamovie::DutamovieSite;
use muvi_scrape::ngefilm::NgefilmSite;
use muvi_scrape::{Feed, HttpFetcher, MovieSite, scrape_feed, scrape_search};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Site {
    Ngefilm,
    Dutamovie,
}

#[derive(Parser)]
#[command(name = "muvi-scrape")]
#[command(about = "Scrape movie listings into WordPress-ready media records")]
#[command(version)]
struct Cli {
    /// Site to scrape
    #[arg(short, long, value_enum, default_value = "ngefilm")]
    site: Site,

    /// Override the site base URL (defaults to SITE_URL / DUTAMOVIE_SITE)
    #[arg(short, long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Print the scrape events next to the records
    #[arg(long)]
    events: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latest movies
    Posts,
    /// TV shows
    Tv,
    /// TV episodes
    Episodes,
    /// Anime category
    Anime,
    /// Any listing URL; its post_type parameter picks the record kind
    Search {
        #[arg(long)]
        url: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    let site: Box<dyn MovieSite> = match cli.site {
        Site::Ngefilm => Box::new(NgefilmSite::new(
            cli.base_url.clone().unwrap_or(config.ngefilm_url),
        )),
        Site::Dutamovie => Box::new(DutamovieSite::new(
            cli.base_url.clone().unwrap_or(config.dutamovie_url),
        )),
    };

    let mut options = site.profile().fetch.clone();
    if let Some(secs) = cli.timeout_secs {
        options.timeout = Duration::from_secs(secs);
    }
    let fetcher = HttpFetcher::new(&options)?;

    let outcome = match cli.command {
        Command::Posts => scrape_feed(site.as_ref(), &fetcher, Feed::Posts).await?,
        Command::Tv => scrape_feed(site.as_ref(), &fetcher, Feed::TvShows).await?,
        Command::Episodes => scrape_feed(site.as_ref(), &fetcher, Feed::Episodes).await?,
        Command::Anime => scrape_feed(site.as_ref(), &fetcher, Feed::Anime).await?,
        Command::Search { url } => scrape_search(site.as_ref(), &fetcher, &url).await?,
    };

    let json = if cli.events {
        serde_json::to_string_pretty(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome.records)?
    };
    println!("{json}");

    Ok(())
}
