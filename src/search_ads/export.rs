//! CSV serialization of aggregate results
//!
//! One row per group, header first, columns in the same order as the
//! aggregate struct fields. Fields containing a delimiter, quote, or line
//! break are quoted with embedded quotes doubled.

use crate::search_ads::report::{AppSpend, DailySpend};

const DAILY_SPEND_HEADERS: &[&str] = &[
    "date",
    "spend",
    "impressions",
    "clicks",
    "installs",
    "cpi",
    "ctr",
    "cvr",
];

const APP_SPEND_HEADERS: &[&str] = &[
    "date",
    "app_id",
    "spend",
    "impressions",
    "clicks",
    "installs",
    "campaigns",
    "cpi",
    "ctr",
    "cvr",
];

fn escape_field(field: &str) -> String {
    let needs_quoting = field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r');

    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row(out: &mut String, fields: &[String]) {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Not-available ratios render as empty cells
fn format_ratio(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Serialize per-day totals to CSV text
pub fn daily_spend_csv(rows: &[DailySpend]) -> String {
    let mut out = String::new();
    write_row(
        &mut out,
        &DAILY_SPEND_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>(),
    );

    for row in rows {
        write_row(
            &mut out,
            &[
                row.date.to_string(),
                format!("{:.2}", row.spend),
                row.impressions.to_string(),
                row.clicks.to_string(),
                row.installs.to_string(),
                format_ratio(row.cpi),
                format_ratio(row.ctr),
                format_ratio(row.cvr),
            ],
        );
    }
    out
}

/// Serialize per-(day, app) totals to CSV text
pub fn app_spend_csv(rows: &[AppSpend]) -> String {
    let mut out = String::new();
    write_row(
        &mut out,
        &APP_SPEND_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>(),
    );

    for row in rows {
        write_row(
            &mut out,
            &[
                row.date.to_string(),
                row.app_id.clone(),
                format!("{:.2}", row.spend),
                row.impressions.to_string(),
                row.clicks.to_string(),
                row.installs.to_string(),
                row.campaigns.to_string(),
                format_ratio(row.cpi),
                format_ratio(row.ctr),
                format_ratio(row.cvr),
            ],
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily(date: &str, spend: f64, installs: u64) -> DailySpend {
        DailySpend {
            date: date.parse::<NaiveDate>().unwrap(),
            spend,
            impressions: 1000,
            clicks: 50,
            installs,
            cpi: (installs > 0).then(|| spend / installs as f64),
            ctr: Some(5.0),
            cvr: (installs > 0).then(|| installs as f64 / 50.0 * 100.0),
        }
    }

    #[test]
    fn test_escape_field_simple() {
        assert_eq!(escape_field("simple"), "simple");
    }

    #[test]
    fn test_escape_field_with_delimiter() {
        assert_eq!(escape_field("hello,world"), "\"hello,world\"");
    }

    #[test]
    fn test_escape_field_with_quotes() {
        assert_eq!(escape_field("say \"hello\""), "\"say \"\"hello\"\"\"");
    }

    #[test]
    fn test_daily_spend_csv_headers_and_rows() {
        let csv = daily_spend_csv(&[daily("2024-01-01", 150.0, 15)]);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "date,spend,impressions,clicks,installs,cpi,ctr,cvr");
        assert_eq!(lines[1], "2024-01-01,150.00,1000,50,15,10.00,5.00,30.00");
    }

    #[test]
    fn test_daily_spend_csv_unavailable_ratios_are_empty() {
        let csv = daily_spend_csv(&[daily("2024-01-01", 100.0, 0)]);

        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].ends_with(",5.00,"));
        assert!(lines[1].contains(",0,,5.00,"));
    }

    #[test]
    fn test_app_spend_csv() {
        let row = AppSpend {
            date: "2024-01-01".parse().unwrap(),
            app_id: "123456".to_string(),
            spend: 100.0,
            impressions: 1000,
            clicks: 50,
            installs: 10,
            campaigns: 2,
            cpi: Some(10.0),
            ctr: Some(5.0),
            cvr: Some(20.0),
        };

        let csv = app_spend_csv(&[row]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "date,app_id,spend,impressions,clicks,installs,campaigns,cpi,ctr,cvr"
        );
        assert_eq!(lines[1], "2024-01-01,123456,100.00,1000,50,10,2,10.00,5.00,20.00");
    }

    #[test]
    fn test_empty_input_yields_header_only() {
        let csv = daily_spend_csv(&[]);
        assert_eq!(csv.lines().count(), 1);
    }
}
