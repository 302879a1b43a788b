//! d1-client CLI entry point.

use clap::Parser;
use d1_client::cli::{Cli, Commands, OutputFormat};
use d1_client::client::D1Client;
use d1_client::output::{format_output, pretty};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "d1_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.to_config();

    match &cli.command {
        Commands::Query(query_cmd) => {
            let params = query_cmd.wire_params()?;
            let client = D1Client::new(config)?;
            let payload = client.query(&query_cmd.sql, params).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&payload, cli.format)),
                OutputFormat::Pretty => {
                    if !cli.quiet {
                        println!("Query OK");
                    }
                    println!("{}", pretty::format_pretty(&payload));
                }
            }
        }
        Commands::Config => match cli.format {
            OutputFormat::Json => println!("{}", format_output(&config.status(), cli.format)),
            OutputFormat::Pretty => println!("{}", pretty::format_config(&config)),
        },
    }

    Ok(())
}
