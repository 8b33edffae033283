use crowdfund_domain::{Campaign, CampaignId, CampaignKind};
use rust_decimal::Decimal;

/// One row of the campaign listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignSummary {
    /// 1-based display position.
    pub position: usize,
    /// Campaign id.
    pub id: CampaignId,
    /// Campaign title.
    pub title: String,
    /// Amount raised so far.
    pub raised: Decimal,
    /// Funding target.
    pub target: Decimal,
    /// Progress clamped to `[0, 1]`.
    pub progress: Decimal,
    /// Variant tag.
    pub kind: CampaignKind,
}

impl CampaignSummary {
    pub(super) fn from_campaign(position: usize, campaign: &Campaign) -> Self {
        Self {
            position,
            id: campaign.id(),
            title: campaign.title().to_owned(),
            raised: campaign.raised(),
            target: campaign.target(),
            progress: campaign.clamped_progress(),
            kind: campaign.kind(),
        }
    }
}

/// Platform-wide totals, derived on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    /// Number of campaigns.
    pub total_campaigns: usize,
    /// Sum of raised amounts across campaigns.
    pub total_raised: Decimal,
    /// Sum of ledger entries across campaigns.
    pub total_donors: usize,
}

impl PlatformStats {
    pub(super) fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            total_campaigns: campaigns.len(),
            total_raised: campaigns.iter().map(Campaign::raised).sum(),
            total_donors: campaigns.iter().map(Campaign::donor_count).sum(),
        }
    }
}
