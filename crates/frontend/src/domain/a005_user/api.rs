use contracts::domain::a005_user::aggregate::{AppUser, UserStatusAction, Wallet};
use contracts::domain::a006_permission::aggregate::{AddPermissionDto, Permission};
use contracts::domain::a009_transaction::aggregate::Transaction;
use contracts::shared::pagination::{ListPayload, Paginated};

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "users/";

/// Latest transactions shown in the user panel.
const RECENT_TRANSACTIONS: u32 = 10;

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<AppUser>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

/// `POST users/{id}/activate/` or `POST users/{id}/deactivate/`
pub async fn set_status(id: i64, action: UserStatusAction) -> Result<(), AppError> {
    send_empty(ApiRequest::post(format!("{}{}/{}/", RESOURCE, id, action.action_path()))).await
}

pub async fn fetch_wallet(id: i64) -> Result<Wallet, AppError> {
    send_json(ApiRequest::get(format!("{}{}/wallet/", RESOURCE, id))).await
}

pub async fn fetch_transactions(id: i64) -> Result<Vec<Transaction>, AppError> {
    let payload: ListPayload<Transaction> = send_json(
        ApiRequest::get(format!("{}{}/transactions/", RESOURCE, id)).params(vec![
            ("page".to_string(), "1".to_string()),
            ("page_size".to_string(), RECENT_TRANSACTIONS.to_string()),
        ]),
    )
    .await?;
    Ok(payload.into_items())
}

pub async fn fetch_permissions(id: i64) -> Result<Vec<Permission>, AppError> {
    let payload: ListPayload<Permission> =
        send_json(ApiRequest::get(format!("{}{}/permissions/", RESOURCE, id))).await?;
    Ok(payload.into_items())
}

pub async fn add_permission(id: i64, dto: AddPermissionDto) -> Result<Permission, AppError> {
    send_json(ApiRequest::post(format!("{}{}/permissions/", RESOURCE, id)).json(&dto)?).await
}
