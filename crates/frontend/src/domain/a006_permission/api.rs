use contracts::domain::a006_permission::aggregate::{Permission, UpdatePermissionDto};
use contracts::shared::pagination::Paginated;

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "permissions/";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Permission>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

pub async fn update(id: i64, dto: UpdatePermissionDto) -> Result<(), AppError> {
    send_empty(ApiRequest::patch(format!("{}{}/", RESOURCE, id)).json(&dto)?).await
}

pub async fn delete(id: i64) -> Result<(), AppError> {
    send_empty(ApiRequest::delete(format!("{}{}/", RESOURCE, id))).await
}
