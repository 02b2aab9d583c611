use dotenv::dotenv;
use std::env;
use tracing_subscriber::EnvFilter;

use github_search::{ClientConfig, SearchClient, SearchRequest};

#[tokio::main] // Marks the main function as asynchronous
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();
    let client = SearchClient::from_config(&config)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let keyword = if args.is_empty() {
        "rust async".to_string()
    } else {
        args.join(" ")
    };

    // Send the search request
    match client.search_repositories(&SearchRequest::new(&keyword)).await {
        Ok(response) => {
            println!("Found {} repositories:", response.total_count);
            for repo in response.items {
                println!("- {} ({} stars)", repo.full_name, repo.stargazers_count);
            }
        }
        Err(err) => {
            eprintln!("Error while searching: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
