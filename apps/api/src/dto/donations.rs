use crowdfund_application::DonationForm;
use crowdfund_domain::DonationReceipt;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming donation form.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/donation-request.ts"
)]
pub struct DonationRequest {
    pub donor_name: String,
    pub donor_email: String,
    pub donor_phone: String,
    pub amount: String,
}

impl From<DonationRequest> for DonationForm {
    fn from(value: DonationRequest) -> Self {
        Self {
            donor_name: value.donor_name,
            donor_email: value.donor_email,
            donor_phone: value.donor_phone,
            amount: value.amount,
        }
    }
}

/// Thank-you payload for an accepted donation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/donation-receipt-response.ts"
)]
pub struct DonationReceiptResponse {
    pub message: String,
    pub donor_name: String,
    pub amount: String,
    pub campaign_title: String,
}

impl From<DonationReceipt> for DonationReceiptResponse {
    fn from(value: DonationReceipt) -> Self {
        Self {
            message: value.to_string(),
            donor_name: value.donor_name().to_owned(),
            amount: value.amount().to_string(),
            campaign_title: value.campaign_title().to_owned(),
        }
    }
}

/// Pending thank-you message, present at most once per donation.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/last-donation-response.ts"
)]
pub struct LastDonationResponse {
    pub donation: Option<DonationReceiptResponse>,
}
