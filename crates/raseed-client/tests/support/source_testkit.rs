use std::fs;
use std::path::{Path, PathBuf};

use raseed_client::SuccessEnvelope;
use serde_json::{Value, json};
use tempfile::{Builder, TempDir};

pub fn temp_home_in_tmp(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let home = dir.path().join("raseed-home");
    fs::create_dir_all(&home)?;
    Ok((dir, home))
}

pub fn write_fixture(dir: &Path, name: &str, body: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    Ok(path)
}

pub fn write_config(home: &Path, config: &Value) -> std::io::Result<PathBuf> {
    write_fixture(home, "config.json", &config.to_string())
}

pub fn record(id: &str, date: &str, description: &str, amount: f64, category: &str) -> Value {
    json!({
        "id": id,
        "date": date,
        "description": description,
        "amount": amount,
        "category": category,
        "wallet": "الرئيسية",
    })
}

pub fn payload(result: raseed_client::ClientResult<SuccessEnvelope>) -> Value {
    assert!(result.is_ok());
    if let Ok(success) = result {
        let value = serde_json::to_value(success);
        assert!(value.is_ok());
        if let Ok(value) = value {
            return value;
        }
    }
    Value::Null
}

pub fn row_ids(payload: &Value) -> Vec<String> {
    payload["data"]["rows"]
        .as_array()
        .map(|rows| {
            rows.iter()
                .filter_map(|row| row["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
