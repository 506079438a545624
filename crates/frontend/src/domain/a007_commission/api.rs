use contracts::domain::a007_commission::aggregate::{Commission, PayCommissionDto};
use contracts::shared::pagination::Paginated;

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "commissions/";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Commission>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

pub async fn pay(id: i64, dto: PayCommissionDto) -> Result<(), AppError> {
    send_empty(ApiRequest::post(format!("{}{}/pay/", RESOURCE, id)).json(&dto)?).await
}
