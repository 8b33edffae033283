use crowdfund_application::PlatformStats;
use serde::Serialize;
use ts_rs::TS;

use super::campaigns::CampaignSummaryResponse;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Platform-wide totals.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/platform-stats-response.ts"
)]
pub struct PlatformStatsResponse {
    pub total_campaigns: usize,
    pub total_raised: String,
    pub total_donors: usize,
}

impl From<PlatformStats> for PlatformStatsResponse {
    fn from(value: PlatformStats) -> Self {
        Self {
            total_campaigns: value.total_campaigns,
            total_raised: value.total_raised.to_string(),
            total_donors: value.total_donors,
        }
    }
}

/// Home page payload: totals plus every campaign row.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/overview-response.ts"
)]
pub struct OverviewResponse {
    pub stats: PlatformStatsResponse,
    pub campaigns: Vec<CampaignSummaryResponse>,
}
