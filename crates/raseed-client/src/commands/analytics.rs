use std::path::Path;

use crate::ClientResult;
use crate::config::load_config;
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::AnalyticsData;
use crate::dashboard::analytics::{SpendingPeriod, spending_analytics};
use crate::fixtures::{SAMPLE_SOURCE, sample_spending_series};

#[derive(Debug, Clone, Default)]
pub struct AnalyticsRunOptions<'a> {
    pub period: SpendingPeriod,
    pub category: Option<String>,
    pub home_override: Option<&'a Path>,
}

pub fn run(period: SpendingPeriod, category: Option<&str>) -> ClientResult<SuccessEnvelope> {
    run_with_options(AnalyticsRunOptions {
        period,
        category: category.map(str::to_string),
        home_override: None,
    })
}

pub fn run_with_options(options: AnalyticsRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let config = load_config(options.home_override)?;
    let analytics = spending_analytics(
        &sample_spending_series(),
        options.period,
        options.category.as_deref(),
    )?;

    success(
        "analytics",
        AnalyticsData {
            source: SAMPLE_SOURCE.to_string(),
            currency_label: config.currency_label,
            analytics,
        },
    )
}
