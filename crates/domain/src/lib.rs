//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod campaign;
mod donation;
mod validation;

pub use campaign::{
    Campaign, CampaignCreator, CampaignDescription, CampaignDetails, CampaignId, CampaignKind,
    CommunityDetails, DescriptionField, MedicalDetails,
};
pub use donation::{Donation, DonationReceipt};
pub use validation::{RuleCatalogEntry, RuleName, ValidationError, Validator};
