use contracts::domain::a002_cancellation::aggregate::CancellationRequest;
use contracts::shared::pagination::Paginated;
use contracts::shared::review::{ReviewDecision, ReviewRequest};

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "cancellation-requests/";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<CancellationRequest>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

/// `POST cancellation-requests/{id}/approve|reject/`. Approval reverses the
/// linked transaction on the server.
pub async fn review(id: i64, decision: ReviewDecision, admin_notes: String) -> Result<(), AppError> {
    let path = format!("{}{}/{}/", RESOURCE, id, decision.action_path());
    send_empty(ApiRequest::post(path).json(&ReviewRequest { admin_notes })?).await
}
