use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// List response envelope
///
/// Every listing endpoint wraps its payload in `data` plus an optional
/// pagination descriptor. A missing or empty `data` array is a valid
/// zero-result response, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<PageDetail>,
}

/// Pagination metadata attached to list and report responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetail {
    pub total_results: u64,
    #[serde(default)]
    pub start_index: u64,
    #[serde(default)]
    pub items_per_page: u64,
}

/// Advertiser organization, sourced from the `acls` endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "orgId")]
    pub org_id: String,
    #[serde(rename = "orgName")]
    pub org_name: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "paymentModel", default)]
    pub payment_model: Option<String>,
}

/// Currency amount as returned by budget and spend fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Campaign resource
///
/// `org_name` and `fetched_org_id` are not wire fields: the accessor layer
/// stamps them so multi-organization listings stay attributable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Linked app (App Store) identifier
    #[serde(rename = "adamId", default)]
    pub adam_id: Option<String>,
    #[serde(rename = "budgetAmount", default)]
    pub budget_amount: Option<Money>,
    #[serde(rename = "dailyBudgetAmount", default)]
    pub daily_budget_amount: Option<Money>,
    #[serde(default)]
    pub org_name: Option<String>,
    #[serde(default)]
    pub fetched_org_id: Option<String>,
}

/// Time-bucket size for performance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Granularity {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

/// Reporting request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub start_time: NaiveDate,
    pub end_time: NaiveDate,
    pub granularity: Granularity,
    pub selector: ReportSelector,
    pub return_records_with_no_metrics: bool,
    pub return_row_totals: bool,
    pub return_grand_totals: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSelector {
    pub order_by: Vec<ReportOrderBy>,
    pub pagination: ReportPagination,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOrderBy {
    pub field: String,
    pub sort_order: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportPagination {
    pub offset: u64,
    pub limit: u64,
}

/// Reporting response envelope: `data.reportingDataResponse.row[]`, each row
/// holding campaign metadata plus one bucket per reporting period
#[derive(Debug, Clone, Deserialize)]
pub struct ReportEnvelope {
    #[serde(default)]
    pub data: Option<ReportData>,
    #[serde(default)]
    pub pagination: Option<PageDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportData {
    #[serde(rename = "reportingDataResponse", default)]
    pub reporting_data_response: Option<ReportingDataResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingDataResponse {
    #[serde(default = "Vec::new")]
    pub row: Vec<ReportEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportEntry {
    pub metadata: CampaignMetadata,
    #[serde(default = "Vec::new")]
    pub granularity: Vec<GranularityBucket>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetadata {
    pub campaign_id: String,
    #[serde(default)]
    pub campaign_name: Option<String>,
    #[serde(default)]
    pub adam_id: Option<String>,
}

/// One reporting period for one campaign
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GranularityBucket {
    pub date: NaiveDate,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub taps: u64,
    #[serde(default)]
    pub total_installs: u64,
    #[serde(default)]
    pub local_spend: Option<Money>,
}
