mod browse;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taplist")]
#[command(about = "Seasonal beer catalog browser")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the seasonal catalog and render the beer list.
    Beers,
    /// Feature one beer and look up stores carrying it nearby.
    Stores {
        /// Catalog id of the beer to feature.
        #[arg(long)]
        product_id: i64,
        /// Commit a new postal code before the lookup.
        #[arg(long)]
        postal: Option<String>,
    },
    /// Manage the stored postal code.
    Postal {
        #[command(subcommand)]
        action: PostalAction,
    },
}

#[derive(Debug, Subcommand)]
enum PostalAction {
    /// Store a postal code for thirty days.
    Set { code: String },
    /// Forget the stored postal code.
    Clear,
    /// Print the stored postal code, if any.
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = taplist_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Beers => browse::run_browse_beers(config).await,
        Commands::Stores { product_id, postal } => {
            browse::run_find_stores(config, product_id, postal).await
        }
        Commands::Postal { action } => browse::run_postal(config, &action),
    }
}
