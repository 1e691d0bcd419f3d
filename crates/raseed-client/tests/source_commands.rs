#[path = "support/source_testkit.rs"]
mod source_testkit;

use raseed_client::commands::analytics::{self, AnalyticsRunOptions};
use raseed_client::commands::common::SourceOptions;
use raseed_client::commands::transactions::{self, TableControls};
use raseed_client::commands::{categories, dash, facets};
use raseed_client::dashboard::analytics::SpendingPeriod;
use raseed_client::view::{SortDirection, SortKey};
use serde_json::{Value, json};
use source_testkit::{payload, record, row_ids, temp_home_in_tmp, write_config, write_fixture};

#[test]
fn json_file_source_feeds_the_table() {
    let temp = temp_home_in_tmp("raseed-json-source");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let rows = Value::Array(vec![
            record("a", "2024-01-03", "قهوة الصباح", -18.0, "طعام"),
            record("b", "2024-01-01", "راتب", 9000.0, "دخل"),
            record("c", "2024-01-02", "قهوة المساء", -22.5, "طعام"),
        ]);
        let fixture = write_fixture(dir.path(), "rows.json", &rows.to_string());
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let file = path.display().to_string();
            let controls = TableControls {
                search: Some("قهوة".to_string()),
                sort: Some(SortKey::Amount),
                direction: Some(SortDirection::Ascending),
                ..TableControls::default()
            };
            let value = payload(transactions::run(
                SourceOptions {
                    file: Some(&file),
                    home_override: Some(&home),
                    stdin_override: None,
                },
                &controls,
            ));

            assert_eq!(value["command"], "transactions");
            assert_eq!(value["data"]["source"]["kind"], "file");
            assert_eq!(value["data"]["source"]["rows"], 3);
            assert_eq!(value["data"]["filtered_count"], 2);
            assert_eq!(row_ids(&value), vec!["c", "a"]);
            assert_eq!(value["data"]["facets"]["categories"], json!(["طعام", "دخل"]));
        }
    }
}

#[test]
fn csv_from_stdin_generates_missing_ids() {
    let temp = temp_home_in_tmp("raseed-csv-stdin");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let csv = "date,description,amount,category,wallet\n\
                   2024-02-01,إيجار,-3000,سكن,الرئيسية\n\
                   2024-02-02,مطعم,-120.5,طعام,الثانوية\n";
        let value = payload(facets::run(SourceOptions {
            file: Some("-"),
            home_override: Some(&home),
            stdin_override: Some(csv),
        }));
        assert_eq!(value["data"]["source"]["kind"], "stdin");
        assert_eq!(value["data"]["categories"], json!(["سكن", "طعام"]));
        assert_eq!(value["data"]["wallets"], json!(["الرئيسية", "الثانوية"]));

        let listed = payload(transactions::run(
            SourceOptions {
                file: Some("-"),
                home_override: Some(&home),
                stdin_override: Some(csv),
            },
            &TableControls::default(),
        ));
        let ids = row_ids(&listed);
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().all(|id| id.starts_with("txn_")));
    }
}

#[test]
fn invalid_rows_reject_the_whole_source() {
    let temp = temp_home_in_tmp("raseed-invalid-rows");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let body = json!([
            {"date": "2024-13-01", "description": "x", "amount": 1, "category": "c", "wallet": "w"},
            {"date": "2024-01-01", "description": "", "amount": 1, "category": "c", "wallet": "w"}
        ]);
        let fixture = write_fixture(dir.path(), "bad.json", &body.to_string());
        assert!(fixture.is_ok());
        if let Ok(path) = fixture {
            let file = path.display().to_string();
            let result = transactions::run(
                SourceOptions {
                    file: Some(&file),
                    home_override: Some(&home),
                    stdin_override: None,
                },
                &TableControls::default(),
            );
            assert!(result.is_err());
            if let Err(error) = result {
                assert_eq!(error.code, "source_validation_failed");
                assert!(!error.is_internal());
            }
        }
    }
}

#[test]
fn missing_file_is_a_read_failure() {
    let temp = temp_home_in_tmp("raseed-missing-file");
    assert!(temp.is_ok());
    if let Ok((dir, home)) = temp {
        let file = dir.path().join("absent.json").display().to_string();
        let result = categories::run(SourceOptions {
            file: Some(&file),
            home_override: Some(&home),
            stdin_override: None,
        });
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "source_read_failed");
        }
    }
}

#[test]
fn configured_source_and_page_size_are_used() {
    let temp = temp_home_in_tmp("raseed-configured-source");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let rows = Value::Array(
            (1..=7)
                .map(|day| {
                    record(
                        &format!("r{day}"),
                        &format!("2024-03-{day:02}"),
                        "تسوق",
                        -(day as f64) * 10.0,
                        "تسوق",
                    )
                })
                .collect(),
        );
        assert!(write_fixture(&home, "ledger.json", &rows.to_string()).is_ok());
        let config = json!({
            "page_size": 3,
            "source": "ledger.json",
            "currency_label": "SAR",
        });
        assert!(write_config(&home, &config).is_ok());

        let controls = TableControls {
            page: Some(9),
            ..TableControls::default()
        };
        let value = payload(transactions::run(
            SourceOptions {
                file: None,
                home_override: Some(&home),
                stdin_override: None,
            },
            &controls,
        ));
        assert_eq!(value["data"]["currency_label"], "SAR");
        assert_eq!(value["data"]["page"]["page"], 3);
        assert_eq!(value["data"]["page"]["total_pages"], 3);
        assert_eq!(row_ids(&value), vec!["r7"]);
    }
}

#[test]
fn dash_combines_every_panel() {
    let temp = temp_home_in_tmp("raseed-dash");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let value = payload(dash::run(SourceOptions {
            file: None,
            home_override: Some(&home),
            stdin_override: None,
        }));
        assert_eq!(value["command"], "dash");
        assert_eq!(value["data"]["source"]["kind"], "sample-snapshot");
        assert_eq!(value["data"]["wallets"]["total_balance"], 24450.0);
        assert_eq!(value["data"]["expenses"]["total"], 1080.0);
        assert_eq!(value["data"]["spending"]["current_total"], 19000.0);
        assert_eq!(
            value["data"]["quick_actions"].as_array().map(Vec::len),
            Some(4)
        );
        assert_eq!(value["data"]["transactions"]["page"]["total_pages"], 2);
    }
}

#[test]
fn quarterly_analytics_uses_home_config() {
    let temp = temp_home_in_tmp("raseed-analytics");
    assert!(temp.is_ok());
    if let Ok((_dir, home)) = temp {
        let value = payload(analytics::run_with_options(AnalyticsRunOptions {
            period: SpendingPeriod::Quarter,
            category: Some("طعام".to_string()),
            home_override: Some(&home),
        }));
        assert_eq!(value["command"], "analytics");
        assert_eq!(value["data"]["currency_label"], "ر.س");
        assert_eq!(value["data"]["analytics"]["category"], "طعام");
        assert_eq!(
            value["data"]["analytics"]["buckets"].as_array().map(Vec::len),
            Some(4)
        );
    }
}
