use crowdfund_domain::CampaignKind;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Selected campaign type, as stored for the session.
#[derive(Debug, Deserialize, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/campaign-type-preference.ts"
)]
pub struct CampaignTypePreference {
    #[ts(type = "\"Medical\" | \"Community\"")]
    pub campaign_type: String,
}

impl From<CampaignKind> for CampaignTypePreference {
    fn from(value: CampaignKind) -> Self {
        Self {
            campaign_type: value.label().to_owned(),
        }
    }
}
