//! Search Ads SDK
//!
//! A Rust library for the Apple Search Ads campaign management API.
//!
//! This SDK provides:
//! - Credential resolution from explicit values or `APPLE_SEARCH_ADS_*` environment variables
//! - OAuth2 client-credential authentication via ES256-signed JWT assertions
//! - Accessors for organizations, campaigns, and campaign performance reports
//! - Flattening of nested report responses into per-(campaign, day) rows
//! - Daily and per-app spend aggregation with CPI/CTR/CVR metrics and CSV export
//!
//! # Example
//!
//! ```no_run
//! use searchads_sdk::{Credentials, SearchAdsClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Resolve credentials from the environment
//! let client = SearchAdsClient::new(Credentials::from_env()?)?;
//!
//! // List accessible organizations
//! let organizations = client.list_organizations().await?;
//!
//! for org in &organizations {
//!     // Campaigns are always fetched under an explicit organization scope
//!     let campaigns = client.list_campaigns(&org.org_id).await?;
//!     println!("{}: {} campaigns", org.org_name, campaigns.len());
//!
//!     // Trailing 7-day spend, grouped per day
//!     for day in client.daily_spend(&org.org_id, 7).await? {
//!         println!("{}  ${:.2}  {} installs", day.date, day.spend, day.installs);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod search_ads;

// Re-export commonly used types and functions
pub use search_ads::{
    auth::{generate_assertion, AssertionClaims},
    client::{SearchAdsClient, API_BASE_URL, ORG_CONTEXT_HEADER},
    credentials::{CredentialConfig, Credentials},
    export::{app_spend_csv, daily_spend_csv},
    report::{daily_totals, daily_totals_by_app, AppSpend, DailySpend, ReportRow},
    resources::{Campaign, Granularity, Money, Organization, PageDetail},
    types::{ApiError, SearchAdsError},
};
