use contracts::dashboards::d400_statistics::dto::{
    DailyTransactionPoint, PlatformVolume, RechargeStats, StatisticsOverview,
};

use crate::shared::error::AppError;
use crate::shared::http::{send_json, ApiRequest};

const API_BASE: &str = "statistics/";

pub async fn fetch_overview() -> Result<StatisticsOverview, AppError> {
    send_json(ApiRequest::get(format!("{}overview/", API_BASE))).await
}

pub async fn fetch_recharges() -> Result<RechargeStats, AppError> {
    send_json(ApiRequest::get(format!("{}recharges/", API_BASE))).await
}

/// Daily series over the last `days` days, oldest first.
pub async fn fetch_daily(days: u32) -> Result<Vec<DailyTransactionPoint>, AppError> {
    send_json(
        ApiRequest::get(format!("{}transactions/daily/", API_BASE))
            .params(vec![("days".to_string(), days.to_string())]),
    )
    .await
}

pub async fn fetch_platforms() -> Result<Vec<PlatformVolume>, AppError> {
    send_json(ApiRequest::get(format!("{}platforms/", API_BASE))).await
}
