use contracts::domain::a004_cash_desk::aggregate::{
    CashDesk, CreateCashDeskDto, UpdateCashDeskCredentialsDto, UpdateCashDeskStatusDto,
};
use contracts::shared::pagination::Paginated;

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "cashdesks/";

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<CashDesk>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

pub async fn create(dto: &CreateCashDeskDto) -> Result<CashDesk, AppError> {
    send_json(ApiRequest::post(RESOURCE).json(dto)?).await
}

pub async fn update_status(id: i64, dto: UpdateCashDeskStatusDto) -> Result<(), AppError> {
    send_empty(ApiRequest::patch(format!("{}{}/status/", RESOURCE, id)).json(&dto)?).await
}

pub async fn update_credentials(id: i64, dto: &UpdateCashDeskCredentialsDto) -> Result<(), AppError> {
    send_empty(ApiRequest::patch(format!("{}{}/credentials/", RESOURCE, id)).json(dto)?).await
}
