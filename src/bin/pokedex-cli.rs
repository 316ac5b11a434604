use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use pokedex::config::load_or_default;
use pokedex::config::validation::validate_config;
use pokedex::config::ConfigError;
use pokedex::observability::logging;
use pokedex::{get_client, ClientProvider, NamedResourcePage, ResourceClient};

#[derive(Parser)]
#[command(name = "pokedex-cli")]
#[command(about = "Query the PokeAPI resource listing", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured API root.
    #[arg(short, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of pokemon
    List {
        #[arg(long)]
        offset: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,

        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.client.base_url = base_url;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }
    logging::init(&config.observability);

    let client = Arc::new(ResourceClient::new(&config.client)?);
    let provider = ClientProvider::new(client);

    provider.scope(run(cli.command)).await
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List { offset, limit, json } => {
            let page = get_client().list_page(offset, limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print_page(&page);
            }
        }
    }

    Ok(())
}

fn print_page(page: &NamedResourcePage) {
    for resource in &page.results {
        println!("{:<24} {}", resource.name, resource.url);
    }
    println!("-- {} of {} total", page.results.len(), page.count);
    if let Some(next) = &page.next {
        println!("next: {}", next);
    }
    if let Some(previous) = &page.previous {
        println!("previous: {}", previous);
    }
}
