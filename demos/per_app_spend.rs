//! Per-app spend tracking: aggregate the trailing 30 days of spend across
//! all organizations by linked app, print CPI/CTR/CVR, and export a CSV.
//!
//! Requires the `APPLE_SEARCH_ADS_*` environment variables.

use chrono::{Duration, Utc};
use searchads_sdk::{app_spend_csv, Credentials, SearchAdsClient};
use std::collections::BTreeMap;

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let client = SearchAdsClient::new(Credentials::from_env()?)?;

    let end_date = Utc::now().date_naive();
    let start_date = end_date - Duration::days(30);

    println!("Analyzing per-app spend from {} to {}", start_date, end_date);
    println!("{}", "=".repeat(60));

    println!("\nFetching per-app spend data...");
    let app_spend = client
        .daily_spend_by_app_all_orgs(start_date, end_date)
        .await?;

    if app_spend.is_empty() {
        println!("No spend data found for the specified period");
        return Ok(());
    }

    println!("\nSPEND BY APP (Last 30 days)");
    println!("{}", "-".repeat(60));

    // Roll daily groups up to one summary per app
    let mut per_app: BTreeMap<&str, (f64, u64, u64, u64, u64)> = BTreeMap::new();
    for row in &app_spend {
        let entry = per_app.entry(row.app_id.as_str()).or_default();
        entry.0 += row.spend;
        entry.1 += row.impressions;
        entry.2 += row.clicks;
        entry.3 += row.installs;
        entry.4 = entry.4.max(row.campaigns);
    }

    let mut ranked: Vec<_> = per_app.into_iter().collect();
    ranked.sort_by(|(_, a), (_, b)| b.0.total_cmp(&a.0));

    for (app_id, (spend, impressions, clicks, installs, campaigns)) in &ranked {
        println!("\nApp ID: {}", app_id);
        println!("  Total Spend: ${:.2}", spend);
        println!("  Installs: {}", installs);
        if *installs > 0 {
            println!("  CPI: ${:.2}", spend / *installs as f64);
        }
        if *impressions > 0 {
            println!("  CTR: {:.2}%", *clicks as f64 / *impressions as f64 * 100.0);
        }
        if *clicks > 0 {
            println!("  CVR: {:.2}%", *installs as f64 / *clicks as f64 * 100.0);
        }
        println!("  Active Campaigns: {}", campaigns);
    }

    println!("\nOVERALL SUMMARY");
    println!("{}", "-".repeat(60));

    let total_spend: f64 = app_spend.iter().map(|r| r.spend).sum();
    let total_installs: u64 = app_spend.iter().map(|r| r.installs).sum();

    println!("Total Apps: {}", ranked.len());
    println!("Total Spend: ${:.2}", total_spend);
    println!("Total Installs: {}", total_installs);
    if total_installs > 0 {
        println!("Overall CPI: ${:.2}", total_spend / total_installs as f64);
    } else {
        println!("Overall CPI: N/A");
    }

    let output_file = "app_spend_summary.csv";
    std::fs::write(output_file, app_spend_csv(&app_spend))?;
    println!("\nSummary exported to {}", output_file);

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
