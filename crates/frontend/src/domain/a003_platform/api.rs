use contracts::domain::a003_platform::aggregate::{Platform, PlatformDto, PlatformStats};
use contracts::shared::pagination::Paginated;

use crate::shared::error::AppError;
use crate::shared::http::{send_empty, send_json, ApiRequest};
use crate::shared::list_controller::ListQuery;

const RESOURCE: &str = "platforms/";

/// Upper bound of platforms offered in selects.
const OPTIONS_PAGE_SIZE: u32 = 200;

pub async fn fetch_page(query: ListQuery) -> Result<Paginated<Platform>, AppError> {
    send_json(ApiRequest::get(RESOURCE).params(query.to_params())).await
}

pub async fn fetch_stats(id: i64) -> Result<PlatformStats, AppError> {
    send_json(ApiRequest::get(format!("{}{}/stats/", RESOURCE, id))).await
}

pub async fn create(dto: &PlatformDto) -> Result<Platform, AppError> {
    send_json(ApiRequest::post(RESOURCE).json(dto)?).await
}

pub async fn update(id: i64, dto: &PlatformDto) -> Result<(), AppError> {
    send_empty(ApiRequest::patch(format!("{}{}/", RESOURCE, id)).json(dto)?).await
}

/// `(id, name)` of every platform, for selects in other screens.
pub async fn fetch_options() -> Result<Vec<(i64, String)>, AppError> {
    let page: Paginated<Platform> = send_json(ApiRequest::get(RESOURCE).params(vec![
        ("page".to_string(), "1".to_string()),
        ("page_size".to_string(), OPTIONS_PAGE_SIZE.to_string()),
    ]))
    .await?;
    Ok(page.results.into_iter().map(|p| (p.id, p.name)).collect())
}
