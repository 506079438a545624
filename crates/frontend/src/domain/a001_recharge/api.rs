use contracts::domain::a001_recharge::aggregate::RechargeRequest;
use contracts::shared::pagination::Paginated;
use contracts::shared::review::{ReviewDecision, ReviewRequest};

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "recharge-requests/";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<RechargeRequest>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

/// `POST recharge-requests/{id}/approve|reject/`
pub async fn review(id: i64, decision: ReviewDecision, admin_notes: String) -> Result<(), AppError> {
    let path = format!("{}{}/{}/", RESOURCE, id, decision.action_path());
    send_empty(ApiRequest::post(path).json(&ReviewRequest { admin_notes })?).await
}
