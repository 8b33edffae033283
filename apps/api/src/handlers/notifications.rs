use axum::Json;
use axum::extract::State;
use tower_sessions::Session;

use crate::dto::{DonationReceiptResponse, LastDonationResponse};
use crate::error::ApiResult;
use crate::session_bridge::with_platform_store;
use crate::state::AppState;

pub async fn last_donation_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<LastDonationResponse>> {
    let platform = &state.platform_service;
    let receipt =
        with_platform_store(&session, platform, |store| platform.take_last_donation(store))
            .await?;

    Ok(Json(LastDonationResponse {
        donation: receipt.map(DonationReceiptResponse::from),
    }))
}
