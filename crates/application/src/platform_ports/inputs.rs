use crowdfund_domain::CampaignKind;
use serde::{Deserialize, Serialize};

/// Raw donation form text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationForm {
    /// Donor name (required).
    pub donor_name: String,
    /// Donor email; empty when not provided.
    #[serde(default)]
    pub donor_email: String,
    /// Donor phone; validated when provided but never stored.
    #[serde(default)]
    pub donor_phone: String,
    /// Donation amount (required).
    pub amount: String,
}

/// Raw create-campaign form text as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignForm {
    /// Creator name.
    pub creator_name: String,
    /// Creator email.
    pub creator_email: String,
    /// Campaign title.
    pub title: String,
    /// Target amount.
    pub target: String,
    /// Variant-specific fields.
    pub details: CampaignFormDetails,
}

/// Variant-specific create-campaign fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CampaignFormDetails {
    /// Medical campaign fields.
    Medical {
        /// Patient name (required).
        patient_name: String,
        /// Medical condition (required).
        condition: String,
        /// Hospital; empty when not provided.
        #[serde(default)]
        hospital: String,
    },
    /// Community campaign fields.
    Community {
        /// Project location (required).
        location: String,
        /// Organization; empty when not provided.
        #[serde(default)]
        organization: String,
    },
}

impl CampaignFormDetails {
    /// Returns the campaign kind this form creates.
    #[must_use]
    pub fn kind(&self) -> CampaignKind {
        match self {
            Self::Medical { .. } => CampaignKind::Medical,
            Self::Community { .. } => CampaignKind::Community,
        }
    }
}
