use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use posbridge_jdna::JdnaClient;

#[derive(Debug, Parser)]
#[command(name = "posbridge-cli")]
#[command(about = "POS provisioning bridge command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the partner store directory and print it as JSON.
    Stores {
        /// Banner to fetch ("spc" selects the Shoe Palace endpoint).
        #[arg(long)]
        banner: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = posbridge_core::load_app_config()?;

    // RUST_LOG wins over the configured level when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    match cli.command {
        Commands::Stores { banner } => {
            let request_id = uuid::Uuid::new_v4().to_string();
            let client = JdnaClient::new(
                &config.locations_api_url,
                &config.locations_api_client_id,
                &config.locations_api_client_secret,
                config.locations_api_timeout_secs,
            )?;

            let directory = client
                .get_locations(&request_id, config.env, banner.as_deref())
                .await?;

            tracing::info!(
                request_id = %request_id,
                entries = directory.len(),
                "store directory built"
            );
            println!("{}", serde_json::to_string_pretty(&directory)?);
        }
    }

    Ok(())
}
