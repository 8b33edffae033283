use axum::Json;
use axum::extract::State;
use crowdfund_domain::CampaignKind;
use tower_sessions::Session;

use crate::dto::CampaignTypePreference;
use crate::error::ApiResult;
use crate::session_bridge::with_platform_store;
use crate::state::AppState;

pub async fn campaign_type_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<CampaignTypePreference>> {
    let platform = &state.platform_service;
    let kind = with_platform_store(&session, platform, |store| platform.campaign_type(store)).await?;

    Ok(Json(CampaignTypePreference::from(kind)))
}

pub async fn update_campaign_type_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CampaignTypePreference>,
) -> ApiResult<Json<CampaignTypePreference>> {
    let kind = CampaignKind::parse(payload.campaign_type.as_str())?;
    let platform = &state.platform_service;
    with_platform_store(&session, platform, |store| {
        platform.set_campaign_type(store, kind)
    })
    .await?;

    Ok(Json(CampaignTypePreference::from(kind)))
}
