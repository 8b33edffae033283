//! Application services and ports.

#![forbid(unsafe_code)]

mod platform_ports;
mod platform_service;

pub use platform_ports::{
    CampaignForm, CampaignFormDetails, DonationForm, SESSION_CAMPAIGN_TYPE_KEY,
    SESSION_CAMPAIGNS_KEY, SESSION_LAST_DONATION_KEY, SessionStore,
};
pub use platform_service::{
    CampaignSummary, DONATION_MAX, DONATION_MIN, PlatformService, PlatformStats, TARGET_MAX,
    TARGET_MIN,
};
