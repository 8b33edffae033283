use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use crowdfund_application::DonationForm;
use crowdfund_domain::{CampaignId, CampaignKind};
use tower_sessions::Session;
use uuid::Uuid;

use crate::dto::{
    CampaignDetailsResponse, CampaignSummaryResponse, CreateCampaignRequest,
    DonationReceiptResponse, DonationRequest, OverviewResponse, PlatformStatsResponse,
};
use crate::error::ApiResult;
use crate::session_bridge::with_platform_store;
use crate::state::AppState;

pub async fn overview_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<OverviewResponse>> {
    let platform = &state.platform_service;
    let (stats, campaigns) = with_platform_store(&session, platform, |store| {
        Ok((platform.stats(store)?, platform.list_campaigns(store)?))
    })
    .await?;

    Ok(Json(OverviewResponse {
        stats: PlatformStatsResponse::from(stats),
        campaigns: campaigns
            .into_iter()
            .map(CampaignSummaryResponse::from)
            .collect(),
    }))
}

pub async fn list_campaigns_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<Vec<CampaignSummaryResponse>>> {
    let platform = &state.platform_service;
    let campaigns =
        with_platform_store(&session, platform, |store| platform.list_campaigns(store)).await?;

    Ok(Json(
        campaigns
            .into_iter()
            .map(CampaignSummaryResponse::from)
            .collect(),
    ))
}

pub async fn campaign_details_handler(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<Uuid>,
) -> ApiResult<Json<CampaignDetailsResponse>> {
    let platform = &state.platform_service;
    let campaign = with_platform_store(&session, platform, |store| {
        platform.campaign(store, CampaignId::from_uuid(campaign_id))
    })
    .await?;

    Ok(Json(CampaignDetailsResponse::from(campaign)))
}

pub async fn create_campaign_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCampaignRequest>,
) -> ApiResult<(StatusCode, Json<CampaignDetailsResponse>)> {
    let platform = &state.platform_service;
    let campaign = with_platform_store(&session, platform, |store| {
        let kind = match payload.campaign_type.as_deref() {
            Some(label) => {
                let kind = CampaignKind::parse(label)?;
                platform.set_campaign_type(store, kind)?;
                kind
            }
            None => platform.campaign_type(store)?,
        };

        platform.submit_campaign(store, &payload.into_form(kind))
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CampaignDetailsResponse::from(campaign)),
    ))
}

pub async fn donate_handler(
    State(state): State<AppState>,
    session: Session,
    Path(campaign_id): Path<Uuid>,
    Json(payload): Json<DonationRequest>,
) -> ApiResult<(StatusCode, Json<DonationReceiptResponse>)> {
    let platform = &state.platform_service;
    let receipt = with_platform_store(&session, platform, |store| {
        let form = DonationForm::from(payload);
        platform.submit_donation(store, CampaignId::from_uuid(campaign_id), &form)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(DonationReceiptResponse::from(receipt)),
    ))
}
