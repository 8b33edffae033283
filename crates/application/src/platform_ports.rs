//! Ports and input payloads for the crowdfunding platform.

mod inputs;
mod session_store;

pub use inputs::{CampaignForm, CampaignFormDetails, DonationForm};
pub use session_store::{
    SESSION_CAMPAIGN_TYPE_KEY, SESSION_CAMPAIGNS_KEY, SESSION_LAST_DONATION_KEY, SessionStore,
};
