//! Report flattening and spend aggregation
//!
//! The reporting endpoint nests one metadata entry per campaign, each holding
//! an array of per-period buckets. This module flattens that shape into one
//! row per (campaign, period) and rolls rows up into per-day and per-app
//! totals with derived metrics.

use crate::search_ads::resources::{Campaign, ReportEnvelope};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Group key used when a campaign's app identifier cannot be resolved
pub const UNKNOWN_APP_ID: &str = "unknown";

/// One flattened report row: a single campaign on a single reporting period
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub campaign_id: String,
    pub campaign_name: String,
    pub adam_id: Option<String>,
    pub impressions: u64,
    /// Raw tap count; aggregates expose this under the public `clicks` name
    pub taps: u64,
    pub installs: u64,
    pub spend: f64,
}

/// Per-day totals across all campaigns
#[derive(Debug, Clone, Serialize)]
pub struct DailySpend {
    pub date: NaiveDate,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub installs: u64,
    /// Cost per install; absent when no installs were recorded
    pub cpi: Option<f64>,
    /// Click-through rate in percent; absent when no impressions
    pub ctr: Option<f64>,
    /// Conversion rate in percent; absent when no clicks
    pub cvr: Option<f64>,
}

/// Per-(day, app) totals, joined to campaigns via their linked app id
#[derive(Debug, Clone, Serialize)]
pub struct AppSpend {
    pub date: NaiveDate,
    pub app_id: String,
    pub spend: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub installs: u64,
    /// Distinct campaigns contributing to this group
    pub campaigns: u64,
    pub cpi: Option<f64>,
    pub ctr: Option<f64>,
    pub cvr: Option<f64>,
}

/// Flatten a reporting response into one row per (campaign, period)
///
/// A response with no rows (or no `reportingDataResponse` at all) yields an
/// empty vector; zero activity is not an error.
pub fn flatten_report(envelope: &ReportEnvelope) -> Vec<ReportRow> {
    let entries = match envelope
        .data
        .as_ref()
        .and_then(|d| d.reporting_data_response.as_ref())
    {
        Some(response) => &response.row,
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for entry in entries {
        for bucket in &entry.granularity {
            rows.push(ReportRow {
                date: bucket.date,
                campaign_id: entry.metadata.campaign_id.clone(),
                campaign_name: entry
                    .metadata
                    .campaign_name
                    .clone()
                    .unwrap_or_default(),
                adam_id: entry.metadata.adam_id.clone(),
                impressions: bucket.impressions,
                taps: bucket.taps,
                installs: bucket.total_installs,
                spend: bucket.local_spend.as_ref().map(|m| m.amount).unwrap_or(0.0),
            });
        }
    }
    rows
}

#[derive(Default)]
struct Totals {
    spend: f64,
    impressions: u64,
    clicks: u64,
    installs: u64,
    campaign_ids: BTreeSet<String>,
}

impl Totals {
    fn add(&mut self, row: &ReportRow) {
        self.spend += row.spend;
        self.impressions += row.impressions;
        self.clicks += row.taps;
        self.installs += row.installs;
        self.campaign_ids.insert(row.campaign_id.clone());
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

/// Roll flattened rows into per-day totals, sorted ascending by date
///
/// The raw `taps` measure is summed under the public `clicks` name.
pub fn daily_totals(rows: &[ReportRow]) -> Vec<DailySpend> {
    let mut groups: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for row in rows {
        groups.entry(row.date).or_default().add(row);
    }

    groups
        .into_iter()
        .map(|(date, totals)| DailySpend {
            date,
            spend: totals.spend,
            impressions: totals.impressions,
            clicks: totals.clicks,
            installs: totals.installs,
            cpi: ratio(totals.spend, totals.installs as f64),
            ctr: ratio(totals.clicks as f64, totals.impressions as f64).map(|r| r * 100.0),
            cvr: ratio(totals.installs as f64, totals.clicks as f64).map(|r| r * 100.0),
        })
        .collect()
}

/// Roll flattened rows into per-(day, app) totals, sorted by date then app id
///
/// Each row's app id is resolved through the campaign roster first, falling
/// back to the row's own `adam_id`. Rows whose app cannot be resolved are
/// grouped under [`UNKNOWN_APP_ID`] rather than dropped.
pub fn daily_totals_by_app(rows: &[ReportRow], campaigns: &[Campaign]) -> Vec<AppSpend> {
    let roster: HashMap<&str, &str> = campaigns
        .iter()
        .filter_map(|c| c.adam_id.as_deref().map(|adam| (c.id.as_str(), adam)))
        .collect();

    let mut groups: BTreeMap<(NaiveDate, String), Totals> = BTreeMap::new();
    for row in rows {
        let app_id = roster
            .get(row.campaign_id.as_str())
            .copied()
            .or(row.adam_id.as_deref())
            .unwrap_or(UNKNOWN_APP_ID)
            .to_string();
        groups.entry((row.date, app_id)).or_default().add(row);
    }

    groups
        .into_iter()
        .map(|((date, app_id), totals)| AppSpend {
            date,
            app_id,
            spend: totals.spend,
            impressions: totals.impressions,
            clicks: totals.clicks,
            installs: totals.installs,
            campaigns: totals.campaign_ids.len() as u64,
            cpi: ratio(totals.spend, totals.installs as f64),
            ctr: ratio(totals.clicks as f64, totals.impressions as f64).map(|r| r * 100.0),
            cvr: ratio(totals.installs as f64, totals.clicks as f64).map(|r| r * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn row(d: &str, campaign_id: &str, spend: f64, impressions: u64, taps: u64, installs: u64) -> ReportRow {
        ReportRow {
            date: date(d),
            campaign_id: campaign_id.to_string(),
            campaign_name: format!("Campaign {}", campaign_id),
            adam_id: None,
            impressions,
            taps,
            installs,
            spend,
        }
    }

    fn campaign(id: &str, adam_id: Option<&str>) -> Campaign {
        Campaign {
            id: id.to_string(),
            name: None,
            status: None,
            adam_id: adam_id.map(String::from),
            budget_amount: None,
            daily_budget_amount: None,
            org_name: None,
            fetched_org_id: None,
        }
    }

    #[test]
    fn test_flatten_single_campaign_single_bucket() {
        let json = serde_json::json!({
            "data": {
                "reportingDataResponse": {
                    "row": [{
                        "metadata": {
                            "campaignId": "1",
                            "campaignName": "Test Campaign",
                            "adamId": "123456"
                        },
                        "granularity": [{
                            "date": "2024-01-01",
                            "impressions": 1000,
                            "taps": 50,
                            "totalInstalls": 10,
                            "localSpend": {"amount": 100.0, "currency": "USD"}
                        }]
                    }]
                }
            }
        });
        let envelope: ReportEnvelope = serde_json::from_value(json).unwrap();
        let rows = flatten_report(&envelope);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, date("2024-01-01"));
        assert_eq!(rows[0].campaign_name, "Test Campaign");
        assert_eq!(rows[0].adam_id.as_deref(), Some("123456"));
        assert_eq!(rows[0].spend, 100.0);
        assert_eq!(rows[0].taps, 50);
        assert_eq!(rows[0].installs, 10);
    }

    #[test]
    fn test_flatten_empty_response() {
        let envelope: ReportEnvelope = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(flatten_report(&envelope).is_empty());

        let envelope: ReportEnvelope = serde_json::from_value(serde_json::json!({
            "data": {"reportingDataResponse": {"row": []}}
        }))
        .unwrap();
        assert!(flatten_report(&envelope).is_empty());
    }

    #[test]
    fn test_daily_totals_groups_and_sorts() {
        let rows = vec![
            row("2024-01-02", "1", 75.0, 750, 40, 8),
            row("2024-01-01", "1", 100.0, 1000, 50, 10),
            row("2024-01-01", "2", 50.0, 500, 25, 5),
        ];

        let daily = daily_totals(&rows);
        assert_eq!(daily.len(), 2);

        // Ascending by date; taps surfaced under the clicks name
        assert_eq!(daily[0].date, date("2024-01-01"));
        assert_eq!(daily[0].spend, 150.0);
        assert_eq!(daily[0].clicks, 75);
        assert_eq!(daily[0].installs, 15);
        assert_eq!(daily[1].date, date("2024-01-02"));
        assert_eq!(daily[1].spend, 75.0);
    }

    #[test]
    fn test_daily_totals_empty_input() {
        assert!(daily_totals(&[]).is_empty());
    }

    #[test]
    fn test_daily_totals_by_app() {
        let campaigns = vec![campaign("1", Some("123456")), campaign("2", Some("789012"))];
        let rows = vec![
            row("2024-01-01", "1", 100.0, 1000, 50, 10),
            row("2024-01-01", "2", 50.0, 500, 25, 5),
            row("2024-01-02", "1", 75.0, 750, 40, 8),
        ];

        let by_app = daily_totals_by_app(&rows, &campaigns);
        assert_eq!(by_app.len(), 3);

        let app_ids: Vec<&str> = by_app.iter().map(|r| r.app_id.as_str()).collect();
        assert!(app_ids.contains(&"123456"));
        assert!(app_ids.contains(&"789012"));
        assert!(by_app.iter().all(|r| r.campaigns == 1));
    }

    #[test]
    fn test_by_app_counts_distinct_campaigns() {
        let campaigns = vec![campaign("1", Some("123456")), campaign("2", Some("123456"))];
        let rows = vec![
            row("2024-01-01", "1", 100.0, 1000, 50, 10),
            row("2024-01-01", "2", 50.0, 500, 25, 5),
        ];

        let by_app = daily_totals_by_app(&rows, &campaigns);
        assert_eq!(by_app.len(), 1);
        assert_eq!(by_app[0].app_id, "123456");
        assert_eq!(by_app[0].campaigns, 2);
        assert_eq!(by_app[0].spend, 150.0);
    }

    #[test]
    fn test_by_app_unresolvable_grouped_as_unknown() {
        let campaigns = vec![campaign("1", None)];
        let rows = vec![row("2024-01-01", "1", 100.0, 1000, 50, 10)];

        let by_app = daily_totals_by_app(&rows, &campaigns);
        assert_eq!(by_app.len(), 1);
        assert_eq!(by_app[0].app_id, UNKNOWN_APP_ID);
    }

    #[test]
    fn test_by_app_falls_back_to_row_adam_id() {
        let mut orphan = row("2024-01-01", "9", 10.0, 100, 5, 1);
        orphan.adam_id = Some("555".to_string());

        let by_app = daily_totals_by_app(&[orphan], &[]);
        assert_eq!(by_app[0].app_id, "555");
    }

    #[test]
    fn test_ratios_present_when_denominators_positive() {
        let daily = daily_totals(&[row("2024-01-01", "1", 100.0, 1000, 50, 10)]);
        assert_eq!(daily[0].cpi, Some(10.0));
        assert_eq!(daily[0].ctr, Some(5.0));
        assert_eq!(daily[0].cvr, Some(20.0));
    }

    #[test]
    fn test_ratios_absent_on_zero_denominators() {
        let daily = daily_totals(&[row("2024-01-01", "1", 100.0, 0, 0, 0)]);
        assert_eq!(daily[0].cpi, None);
        assert_eq!(daily[0].ctr, None);
        assert_eq!(daily[0].cvr, None);
    }
}
