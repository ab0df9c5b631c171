//! Verify Apple Search Ads credentials are working correctly.
//!
//! Checks the environment, validates the private key file, authenticates
//! against the token endpoint, and lists accessible organizations.
//! Exits 0 on success, 1 otherwise.

use searchads_sdk::search_ads::credentials::{
    ENV_CLIENT_ID, ENV_KEY_ID, ENV_PRIVATE_KEY_PATH, ENV_TEAM_ID,
};
use searchads_sdk::{Credentials, SearchAdsClient};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const REQUIRED_VARS: &[&str] = &[ENV_CLIENT_ID, ENV_TEAM_ID, ENV_KEY_ID, ENV_PRIVATE_KEY_PATH];

const PEM_MARKERS: &[&str] = &[
    "BEGIN PRIVATE KEY",
    "BEGIN EC PRIVATE KEY",
    "BEGIN RSA PRIVATE KEY",
];

async fn verify() -> bool {
    println!("Apple Search Ads Credential Verification");
    println!("{}", "=".repeat(50));

    println!("\n1. Checking environment variables:");
    let mut all_present = true;
    for var in REQUIRED_VARS {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => {
                let preview: String = value.chars().take(20).collect();
                println!("   ok {}: {}...", var, preview);
            }
            _ => {
                println!("   MISSING {}", var);
                all_present = false;
            }
        }
    }
    if !all_present {
        println!("\nMissing required environment variables!");
        return false;
    }

    println!("\n2. Checking private key file:");
    let key_path = std::env::var(ENV_PRIVATE_KEY_PATH).unwrap_or_default();
    let content = match std::fs::read_to_string(&key_path) {
        Ok(content) => {
            println!("   ok Private key exists at: {}", key_path);
            content
        }
        Err(e) => {
            println!("   FAILED to read private key at {}: {}", key_path, e);
            return false;
        }
    };
    if PEM_MARKERS.iter().any(|marker| content.contains(marker)) {
        println!("   ok File appears to be a valid private key");
    } else {
        println!("   FAILED: file doesn't appear to be a valid private key");
        return false;
    }

    println!("\n3. Testing authentication:");
    let client = match Credentials::from_env().and_then(SearchAdsClient::new) {
        Ok(client) => {
            println!("   ok Client created successfully");
            client
        }
        Err(e) => {
            println!("   FAILED to create client: {}", e);
            return false;
        }
    };

    match client.access_token().await {
        Ok(token) => {
            let preview: String = token.chars().take(20).collect();
            println!("   ok Access token obtained: {}...", preview);
        }
        Err(e) => {
            println!("\nError during authentication: {}", e);
            return false;
        }
    }

    println!("\n4. Fetching organizations:");
    match client.list_organizations().await {
        Ok(organizations) if organizations.is_empty() => {
            println!("   No organizations found (this might be normal for new accounts)");
        }
        Ok(organizations) => {
            println!("   ok Found {} organization(s):", organizations.len());
            for org in &organizations {
                println!("      - {} (ID: {})", org.org_name, org.org_id);
                if let Some(currency) = &org.currency {
                    println!("        Currency: {}", currency);
                }
                if let Some(payment_model) = &org.payment_model {
                    println!("        Payment Model: {}", payment_model);
                }
            }
        }
        Err(e) => {
            println!("\nError fetching organizations: {}", e);
            return false;
        }
    }

    println!("\nCredentials verified successfully!");
    true
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match dotenvy::dotenv() {
        Ok(_) => println!("Loaded credentials from .env file"),
        Err(_) => println!("Note: no .env file found. Using environment variables only."),
    }

    if verify().await {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
