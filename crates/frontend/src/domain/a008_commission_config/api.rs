use contracts::domain::a008_commission_config::aggregate::{
    CommissionConfig, UpdateCommissionConfigDto,
};
use contracts::shared::pagination::ListPayload;

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};

const RESOURCE: &str = "commission-configs/";

/// The endpoint sends every configuration at once.
pub async fn fetch_all() -> Result<Vec<CommissionConfig>, AppError> {
    send_json::<ListPayload<CommissionConfig>>(ApiRequest::get(RESOURCE))
        .await
        .map(ListPayload::into_items)
}

pub async fn update(id: i64, dto: UpdateCommissionConfigDto) -> Result<(), AppError> {
    send_empty(ApiRequest::patch(format!("{}{}/", RESOURCE, id)).json(&dto)?).await
}
