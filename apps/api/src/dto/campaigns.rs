use crowdfund_application::{CampaignForm, CampaignFormDetails, CampaignSummary};
use crowdfund_domain::{Campaign, CampaignKind, Donation};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of donors shown on the details page.
pub const RECENT_DONOR_LIMIT: usize = 5;

/// One row of the campaign listing.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/campaign-summary-response.ts"
)]
pub struct CampaignSummaryResponse {
    pub position: usize,
    pub campaign_id: String,
    pub title: String,
    pub raised: String,
    pub target: String,
    pub progress: String,
    pub kind: String,
}

impl From<CampaignSummary> for CampaignSummaryResponse {
    fn from(value: CampaignSummary) -> Self {
        Self {
            position: value.position,
            campaign_id: value.id.to_string(),
            title: value.title,
            raised: value.raised.to_string(),
            target: value.target.to_string(),
            progress: value.progress.to_string(),
            kind: value.kind.label().to_owned(),
        }
    }
}

/// Labelled detail line.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/campaign-field-response.ts"
)]
pub struct CampaignFieldResponse {
    pub label: String,
    pub value: String,
}

/// Public view of one donation. Donor emails are not exposed.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/donor-response.ts"
)]
pub struct DonorResponse {
    pub name: String,
    pub amount: String,
}

impl From<Donation> for DonorResponse {
    fn from(value: Donation) -> Self {
        Self {
            name: value.name().to_owned(),
            amount: value.amount().to_string(),
        }
    }
}

/// Campaign details page payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/campaign-details-response.ts"
)]
pub struct CampaignDetailsResponse {
    pub campaign_id: String,
    pub title: String,
    pub kind: String,
    pub heading: String,
    pub fields: Vec<CampaignFieldResponse>,
    pub raised: String,
    pub target: String,
    pub progress_percent: String,
    pub donor_count: usize,
    pub recent_donors: Vec<DonorResponse>,
}

impl From<Campaign> for CampaignDetailsResponse {
    fn from(value: Campaign) -> Self {
        let description = value.describe();

        Self {
            campaign_id: value.id().to_string(),
            title: value.title().to_owned(),
            kind: value.kind().label().to_owned(),
            heading: description.heading,
            fields: description
                .fields
                .into_iter()
                .map(|field| CampaignFieldResponse {
                    label: field.label.to_owned(),
                    value: field.value,
                })
                .collect(),
            raised: description.raised.to_string(),
            target: description.target.to_string(),
            progress_percent: description.progress_percent.to_string(),
            donor_count: value.donor_count(),
            recent_donors: value
                .recent_donors(RECENT_DONOR_LIMIT)
                .into_iter()
                .map(DonorResponse::from)
                .collect(),
        }
    }
}

/// Incoming create-campaign form.
///
/// Variant fields that do not belong to the chosen type are ignored. When
/// `campaign_type` is omitted the stored preference decides the type.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-campaign-request.ts"
)]
pub struct CreateCampaignRequest {
    pub campaign_type: Option<String>,
    pub creator_name: String,
    pub creator_email: String,
    pub title: String,
    pub target: String,
    pub patient_name: String,
    pub condition: String,
    pub hospital: String,
    pub location: String,
    pub organization: String,
}

impl CreateCampaignRequest {
    /// Builds the core form for the given campaign type.
    pub fn into_form(self, kind: CampaignKind) -> CampaignForm {
        let details = match kind {
            CampaignKind::Medical => CampaignFormDetails::Medical {
                patient_name: self.patient_name,
                condition: self.condition,
                hospital: self.hospital,
            },
            CampaignKind::Community => CampaignFormDetails::Community {
                location: self.location,
                organization: self.organization,
            },
        };

        CampaignForm {
            creator_name: self.creator_name,
            creator_email: self.creator_email,
            title: self.title,
            target: self.target,
            details,
        }
    }
}
