use serde::{Deserialize, Serialize};

use crate::{ClientError, ClientResult};

const MONTHS_PER_QUARTER: usize = 3;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpendingPeriod {
    Month,
    Quarter,
    #[default]
    Year,
}

impl SpendingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "month" => Some(Self::Month),
            "quarter" => Some(Self::Quarter),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

/// Monthly spend for the current and previous year, index-aligned with `labels`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingSeries {
    pub labels: Vec<String>,
    pub current_year: Vec<f64>,
    pub previous_year: Vec<f64>,
    pub current_label: String,
    pub previous_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingBucket {
    pub label: String,
    pub current: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingAnalytics {
    pub period: SpendingPeriod,
    pub category: Option<String>,
    pub current_label: String,
    pub previous_label: String,
    pub buckets: Vec<SpendingBucket>,
    /// Chart scale: the largest value across both series of `buckets`.
    pub max_value: f64,
    pub current_total: f64,
    pub previous_total: f64,
    pub change_percent: Option<f64>,
}

pub fn spending_analytics(
    series: &SpendingSeries,
    period: SpendingPeriod,
    category: Option<&str>,
) -> ClientResult<SpendingAnalytics> {
    if series.current_year.len() != series.labels.len()
        || series.previous_year.len() != series.labels.len()
    {
        return Err(ClientError::invalid_argument(&format!(
            "Spending series lengths differ: {} labels, {} current values, {} previous values.",
            series.labels.len(),
            series.current_year.len(),
            series.previous_year.len()
        )));
    }

    let monthly = series
        .labels
        .iter()
        .zip(series.current_year.iter().zip(series.previous_year.iter()))
        .map(|(label, (current, previous))| SpendingBucket {
            label: label.clone(),
            current: *current,
            previous: *previous,
        })
        .collect::<Vec<SpendingBucket>>();

    let buckets = match period {
        SpendingPeriod::Year => monthly,
        SpendingPeriod::Quarter => quarterly(&monthly),
        SpendingPeriod::Month => monthly.last().cloned().into_iter().collect(),
    };

    let max_value = buckets
        .iter()
        .flat_map(|bucket| [bucket.current, bucket.previous])
        .fold(0.0_f64, f64::max);
    let current_total = buckets.iter().map(|bucket| bucket.current).sum::<f64>();
    let previous_total = buckets.iter().map(|bucket| bucket.previous).sum::<f64>();
    let change_percent = if previous_total == 0.0 {
        None
    } else {
        Some((current_total - previous_total) / previous_total * 100.0)
    };

    Ok(SpendingAnalytics {
        period,
        category: category
            .filter(|value| !value.is_empty() && *value != "all")
            .map(str::to_string),
        current_label: series.current_label.clone(),
        previous_label: series.previous_label.clone(),
        buckets,
        max_value,
        current_total,
        previous_total,
        change_percent,
    })
}

fn quarterly(monthly: &[SpendingBucket]) -> Vec<SpendingBucket> {
    monthly
        .chunks(MONTHS_PER_QUARTER)
        .enumerate()
        .map(|(index, months)| SpendingBucket {
            label: format!("Q{}", index + 1),
            current: months.iter().map(|month| month.current).sum(),
            previous: months.iter().map(|month| month.previous).sum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{SpendingPeriod, spending_analytics};
    use crate::fixtures::sample_spending_series;

    #[test]
    fn yearly_view_keeps_each_month() {
        let analytics = spending_analytics(&sample_spending_series(), SpendingPeriod::Year, None);
        assert!(analytics.is_ok());
        if let Ok(value) = analytics {
            assert_eq!(value.buckets.len(), 12);
            assert_eq!(value.max_value, 2000.0);
            assert_eq!(value.current_total, 19000.0);
            assert_eq!(value.previous_total, 16600.0);
        }
    }

    #[test]
    fn quarterly_view_sums_three_months() {
        let analytics =
            spending_analytics(&sample_spending_series(), SpendingPeriod::Quarter, None);
        assert!(analytics.is_ok());
        if let Ok(value) = analytics {
            let current = value
                .buckets
                .iter()
                .map(|bucket| bucket.current)
                .collect::<Vec<_>>();
            assert_eq!(current, vec![3700.0, 4500.0, 5300.0, 5500.0]);
            assert_eq!(value.buckets[0].label, "Q1");
            assert_eq!(value.buckets[0].previous, 3100.0);
            assert_eq!(value.max_value, 5500.0);
        }
    }

    #[test]
    fn monthly_view_shows_latest_month() {
        let analytics = spending_analytics(
            &sample_spending_series(),
            SpendingPeriod::Month,
            Some("food"),
        );
        assert!(analytics.is_ok());
        if let Ok(value) = analytics {
            assert_eq!(value.buckets.len(), 1);
            assert_eq!(value.buckets[0].label, "Dec");
            assert_eq!(value.category.as_deref(), Some("food"));
        }
    }

    #[test]
    fn all_category_means_unfiltered() {
        let analytics =
            spending_analytics(&sample_spending_series(), SpendingPeriod::Year, Some("all"));
        assert!(analytics.is_ok());
        if let Ok(value) = analytics {
            assert_eq!(value.category, None);
        }
    }

    #[test]
    fn mismatched_series_is_rejected() {
        let mut series = sample_spending_series();
        series.previous_year.pop();
        let analytics = spending_analytics(&series, SpendingPeriod::Year, None);
        assert!(analytics.is_err());
        if let Err(error) = analytics {
            assert_eq!(error.code, "invalid_argument");
        }
    }
}
