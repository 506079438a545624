use contracts::domain::a009_transaction::aggregate::Transaction;
use contracts::shared::pagination::Paginated;

use crate::shared::error::AppError;
use crate::shared::http::{send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "admin/transactions/";

/// Filter names match the query parameters of the endpoint.
pub const FILTER_TYPE: &str = "type_trans";
pub const FILTER_STATUS: &str = "status";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Transaction>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

pub async fn fetch_one(id: i64) -> Result<Transaction, AppError> {
    send_json(ApiRequest::get(format!("{}{}/", RESOURCE, id))).await
}
