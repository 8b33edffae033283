use crowdfund_core::{AppError, AppResult};
use crowdfund_domain::{Campaign, CampaignId, CampaignKind, DonationReceipt};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info};

use super::seed::sample_campaigns;
use super::views::{CampaignSummary, PlatformStats};
use super::{PlatformService, read_session, write_session};
use crate::platform_ports::{
    SESSION_CAMPAIGN_TYPE_KEY, SESSION_CAMPAIGNS_KEY, SESSION_LAST_DONATION_KEY, SessionStore,
};

impl PlatformService {
    /// Prepares the session store for platform use.
    ///
    /// Seeds the sample campaigns only when the store has no campaign
    /// sequence yet; existing campaigns, donations and preferences are kept.
    pub fn initialize(&self, store: &mut dyn SessionStore) -> AppResult<()> {
        if !store.contains_key(SESSION_CAMPAIGNS_KEY)? {
            let campaigns = sample_campaigns();
            debug!(count = campaigns.len(), "seeding sample campaigns");
            write_session(store, SESSION_CAMPAIGNS_KEY, &campaigns)?;
        }

        if !store.contains_key(SESSION_LAST_DONATION_KEY)? {
            store.insert_value(SESSION_LAST_DONATION_KEY, Value::Null)?;
        }

        if !store.contains_key(SESSION_CAMPAIGN_TYPE_KEY)? {
            write_session(store, SESSION_CAMPAIGN_TYPE_KEY, &CampaignKind::default())?;
        }

        Ok(())
    }

    /// Appends a campaign to the end of the sequence.
    pub fn add_campaign(&self, store: &mut dyn SessionStore, campaign: Campaign) -> AppResult<()> {
        let mut campaigns = load_campaigns(store)?;
        info!(
            campaign_id = %campaign.id(),
            kind = campaign.kind().label(),
            "campaign added"
        );
        campaigns.push(campaign);
        write_session(store, SESSION_CAMPAIGNS_KEY, &campaigns)
    }

    /// Lists campaigns in insertion order with their display stats.
    pub fn list_campaigns(&self, store: &dyn SessionStore) -> AppResult<Vec<CampaignSummary>> {
        Ok(load_campaigns(store)?
            .iter()
            .enumerate()
            .map(|(index, campaign)| CampaignSummary::from_campaign(index + 1, campaign))
            .collect())
    }

    /// Returns platform-wide totals.
    pub fn stats(&self, store: &dyn SessionStore) -> AppResult<PlatformStats> {
        Ok(PlatformStats::from_campaigns(&load_campaigns(store)?))
    }

    /// Returns one campaign by id.
    pub fn campaign(&self, store: &dyn SessionStore, campaign_id: CampaignId) -> AppResult<Campaign> {
        load_campaigns(store)?
            .into_iter()
            .find(|campaign| campaign.id() == campaign_id)
            .ok_or_else(|| AppError::NotFound(format!("campaign '{campaign_id}' does not exist")))
    }

    /// Records an already validated donation and fills the thank-you slot.
    pub fn record_donation(
        &self,
        store: &mut dyn SessionStore,
        campaign_id: CampaignId,
        amount: Decimal,
        donor_name: &str,
        donor_email: Option<String>,
    ) -> AppResult<DonationReceipt> {
        let mut campaigns = load_campaigns(store)?;
        let campaign = campaigns
            .iter_mut()
            .find(|campaign| campaign.id() == campaign_id)
            .ok_or_else(|| AppError::NotFound(format!("campaign '{campaign_id}' does not exist")))?;

        let receipt = campaign.add_donation(amount, donor_name, donor_email);
        info!(campaign_id = %campaign_id, amount = %amount, "donation recorded");

        write_session(store, SESSION_CAMPAIGNS_KEY, &campaigns)?;
        write_session(store, SESSION_LAST_DONATION_KEY, &receipt)?;

        Ok(receipt)
    }

    /// Returns the pending thank-you message and clears the slot.
    pub fn take_last_donation(
        &self,
        store: &mut dyn SessionStore,
    ) -> AppResult<Option<DonationReceipt>> {
        let receipt = read_session::<Option<DonationReceipt>>(store, SESSION_LAST_DONATION_KEY)?
            .flatten();
        if receipt.is_some() {
            debug!("clearing last donation message");
            store.insert_value(SESSION_LAST_DONATION_KEY, Value::Null)?;
        }

        Ok(receipt)
    }

    /// Returns the selected campaign type preference.
    pub fn campaign_type(&self, store: &dyn SessionStore) -> AppResult<CampaignKind> {
        read_session(store, SESSION_CAMPAIGN_TYPE_KEY)?.ok_or_else(not_initialized)
    }

    /// Stores the selected campaign type preference.
    pub fn set_campaign_type(
        &self,
        store: &mut dyn SessionStore,
        kind: CampaignKind,
    ) -> AppResult<()> {
        write_session(store, SESSION_CAMPAIGN_TYPE_KEY, &kind)
    }
}

fn load_campaigns(store: &dyn SessionStore) -> AppResult<Vec<Campaign>> {
    read_session(store, SESSION_CAMPAIGNS_KEY)?.ok_or_else(not_initialized)
}

fn not_initialized() -> AppError {
    AppError::Internal("platform session is not initialized".to_owned())
}
