/// Apple Search Ads API integration module
///
/// This module provides credential resolution, assertion-based OAuth2
/// authentication, the REST client, and report aggregation.
///
/// ## Authentication Flow
///
/// 1. Credentials are resolved from explicit values or the environment
/// 2. An ES256-signed assertion is built from the credential material
/// 3. The assertion is exchanged at the OAuth2 token endpoint for a bearer token
/// 4. The bearer token authorizes one REST call; the next call repeats 2-3
pub mod auth;
pub mod client;
pub mod credentials;
pub mod export;
pub mod report;
pub mod resources;
pub mod types;

pub use client::SearchAdsClient;
pub use credentials::{CredentialConfig, Credentials};
pub use report::{daily_totals, daily_totals_by_app, AppSpend, DailySpend, ReportRow};
pub use resources::*;
pub use types::{ApiError, SearchAdsError};
