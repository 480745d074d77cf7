mod areas;
mod lookup;
mod search;

use clap::{Parser, Subcommand};
use propscan_scansan::ScansanClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "propscan")]
#[command(about = "UK property search against the ScanSan API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for properties by area, free text, or district and street
    Search {
        /// Area label from the catalog (see `areas`)
        #[arg(long, default_value = propscan_core::DEFAULT_AREA)]
        area: String,
        /// Free-text area name, e.g. a ward or postcode district
        #[arg(long, default_value = "")]
        query: String,
        /// Postcode district (e.g. SW1A), used together with --street
        #[arg(long, default_value = "")]
        district: String,
        /// Street name, used together with --district
        #[arg(long, default_value = "")]
        street: String,
        /// Sort order label, e.g. "Current Price: High to Low"
        #[arg(long, default_value = "Default")]
        sort: String,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the selectable area labels
    Areas,
    /// Show the raw area summary for an area code
    Summary {
        /// Area code (e.g. NG8)
        code: String,
        /// Optional district within the area code
        #[arg(long)]
        district: Option<String>,
    },
    /// Show the raw sale history for a postcode or area code
    Sales {
        code: String,
        /// Treat the code as a full postal code
        #[arg(long)]
        postal: bool,
    },
    /// Show the dated valuation history of one property
    History {
        code: String,
        /// Treat the code as a full postal code
        #[arg(long)]
        postal: bool,
        /// Property address to pick from the response
        #[arg(long)]
        address: Option<String>,
    },
    /// Search every catalog area and report which ones the API recognises
    ValidateAreas {
        /// Write the classification to this file as JSON
        #[arg(long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            area,
            query,
            district,
            street,
            sort,
            json,
        }) => {
            let args = search::SearchArgs {
                area,
                query,
                district,
                street,
                sort,
                json,
            };
            // Rejected input fails here, before config is read or a request made.
            let sort = search::check_args(&args)?;
            search::run_search(connect()?, &args, sort).await?;
        }
        Some(Commands::Areas) => areas::run_areas(),
        Some(Commands::Summary { code, district }) => {
            lookup::run_summary(&connect()?, &code, district.as_deref()).await?;
        }
        Some(Commands::Sales { code, postal }) => {
            lookup::run_sales(&connect()?, &code, postal).await?;
        }
        Some(Commands::History {
            code,
            postal,
            address,
        }) => lookup::run_history(&connect()?, &code, postal, address.as_deref()).await?,
        Some(Commands::ValidateAreas { output }) => {
            areas::run_validate_areas(&connect()?, output.as_deref()).await?;
        }
        None => println!("propscan ready; run `propscan --help` for commands"),
    }

    Ok(())
}

/// Loads configuration, installs logging and builds the API client.
fn connect() -> anyhow::Result<ScansanClient> {
    let config = propscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "configuration loaded");
    ScansanClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build ScanSan client: {e}"))
}
