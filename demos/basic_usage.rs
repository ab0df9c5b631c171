//! Basic usage: authenticate, list organizations and campaigns, and print
//! a trailing 7-day spend summary.
//!
//! Requires the `APPLE_SEARCH_ADS_*` environment variables.

use searchads_sdk::{Credentials, SearchAdsClient};

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = SearchAdsClient::new(Credentials::from_env()?)?;

    println!("Fetching organizations...");
    let organizations = client.list_organizations().await?;

    println!("\nFound {} organizations:", organizations.len());
    for org in &organizations {
        println!("  - {} (ID: {})", org.org_name, org.org_id);
    }

    let Some(org) = organizations.first() else {
        println!("\nNo organizations available; nothing more to do");
        return Ok(());
    };

    println!("\nFetching campaigns...");
    let campaigns = client.list_campaigns(&org.org_id).await?;

    println!("\nFound {} campaigns:", campaigns.len());
    for campaign in campaigns.iter().take(5) {
        println!(
            "  - {} (ID: {}, Status: {})",
            campaign.name.as_deref().unwrap_or("N/A"),
            campaign.id,
            campaign.status.as_deref().unwrap_or("N/A")
        );
    }
    if campaigns.len() > 5 {
        println!("  ... and {} more", campaigns.len() - 5);
    }

    println!("\nFetching daily spend for the last 7 days...");
    let daily_spend = client.daily_spend(&org.org_id, 7).await?;

    if daily_spend.is_empty() {
        println!("No spend data found for the last 7 days");
        return Ok(());
    }

    println!("\nDaily spend summary:");
    for day in &daily_spend {
        println!(
            "  {}  ${:>8.2}  {:>6} installs  {:>6} clicks",
            day.date, day.spend, day.installs, day.clicks
        );
    }

    let total_spend: f64 = daily_spend.iter().map(|d| d.spend).sum();
    let total_installs: u64 = daily_spend.iter().map(|d| d.installs).sum();

    println!("\nTotal spend: ${:.2}", total_spend);
    println!("Total installs: {}", total_installs);
    if total_installs > 0 {
        println!("Average CPI: ${:.2}", total_spend / total_installs as f64);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
