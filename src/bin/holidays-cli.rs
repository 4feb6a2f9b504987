use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "holidays-cli")]
#[command(about = "Command-line client for the holiday service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported countries
    Countries,
    /// Look up public holidays for a country and year
    Holidays {
        #[arg(short, long)]
        country: String,
        #[arg(short, long)]
        year: String,
    },
    /// Dump the Prometheus metrics text
    Metrics,
    /// Check service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Countries => {
            let res = client.get(format!("{}/api/countries", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Holidays { country, year } => {
            let res = client
                .get(format!("{}/api/holidays", base))
                .query(&[("country", country.as_str()), ("year", year.as_str())])
                .send()
                .await?;
            print_json(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(format!("{}/metrics", base)).send().await?;
            let status = res.status();
            let text = res.text().await?;
            if status.is_success() {
                print!("{}", text);
            } else {
                eprintln!("Error: metrics endpoint returned status {}", status);
            }
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_json(res).await?;
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
