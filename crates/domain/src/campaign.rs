//! Campaign entity and its two variants.
//!
//! Medical and community campaigns share every base field and behavior; the
//! variant payload only changes the descriptive fields and the labels used
//! when a campaign is described to a renderer.

use std::fmt::{Display, Formatter};

use crowdfund_core::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::donation::{Donation, DonationReceipt};

/// Unique identifier for a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CampaignId(Uuid);

impl CampaignId {
    /// Creates a new random campaign identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a campaign identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }
}

impl Default for CampaignId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CampaignId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Campaign variant tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignKind {
    /// Funding for a patient's treatment.
    #[default]
    Medical,
    /// Funding for a local community project.
    Community,
}

impl CampaignKind {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Medical => "Medical",
            Self::Community => "Community",
        }
    }

    /// Parses a display label into a campaign kind.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "Medical" => Ok(Self::Medical),
            "Community" => Ok(Self::Community),
            _ => Err(AppError::Validation(format!(
                "unknown campaign type '{value}'"
            ))),
        }
    }
}

/// Person who created a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCreator {
    name: String,
    email: String,
}

impl CampaignCreator {
    /// Creates creator details.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the creator name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the creator email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Fields specific to medical campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalDetails {
    patient_name: String,
    condition: String,
    hospital: Option<String>,
}

impl MedicalDetails {
    /// Creates medical campaign details.
    #[must_use]
    pub fn new(
        patient_name: impl Into<String>,
        condition: impl Into<String>,
        hospital: Option<String>,
    ) -> Self {
        Self {
            patient_name: patient_name.into(),
            condition: condition.into(),
            hospital,
        }
    }

    /// Returns the patient name.
    #[must_use]
    pub fn patient_name(&self) -> &str {
        self.patient_name.as_str()
    }

    /// Returns the medical condition.
    #[must_use]
    pub fn condition(&self) -> &str {
        self.condition.as_str()
    }

    /// Returns the treating hospital, if known.
    #[must_use]
    pub fn hospital(&self) -> Option<&str> {
        self.hospital.as_deref()
    }
}

/// Fields specific to community campaigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityDetails {
    location: String,
    organization: Option<String>,
}

impl CommunityDetails {
    /// Creates community campaign details.
    #[must_use]
    pub fn new(location: impl Into<String>, organization: Option<String>) -> Self {
        Self {
            location: location.into(),
            organization,
        }
    }

    /// Returns the project location.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// Returns the backing organization, if any.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.organization.as_deref()
    }
}

/// Variant payload of a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CampaignDetails {
    /// Medical campaign fields.
    Medical(MedicalDetails),
    /// Community campaign fields.
    Community(CommunityDetails),
}

impl CampaignDetails {
    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> CampaignKind {
        match self {
            Self::Medical(_) => CampaignKind::Medical,
            Self::Community(_) => CampaignKind::Community,
        }
    }
}

/// Labelled value in a campaign description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionField {
    /// Field label, e.g. `Patient`.
    pub label: &'static str,
    /// Field value.
    pub value: String,
}

/// Data a renderer needs to show a campaign's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDescription {
    /// Heading such as `Medical Campaign: Heart Surgery Fund`.
    pub heading: String,
    /// Variant fields followed by the creator, in display order.
    pub fields: Vec<DescriptionField>,
    /// Amount raised so far.
    pub raised: Decimal,
    /// Funding target.
    pub target: Decimal,
    /// Unclamped progress in percent, one decimal place.
    pub progress_percent: Decimal,
}

/// Funding campaign with its donor ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    id: CampaignId,
    title: String,
    target: Decimal,
    creator: CampaignCreator,
    raised: Decimal,
    donors: Vec<Donation>,
    details: CampaignDetails,
}

impl Campaign {
    /// Creates a campaign with a fresh id and an empty ledger.
    ///
    /// Field values are taken as given; callers validate form input first.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        target: Decimal,
        creator: CampaignCreator,
        details: CampaignDetails,
    ) -> Self {
        Self {
            id: CampaignId::new(),
            title: title.into(),
            target,
            creator,
            raised: Decimal::ZERO,
            donors: Vec::new(),
            details,
        }
    }

    /// Returns the campaign id.
    #[must_use]
    pub fn id(&self) -> CampaignId {
        self.id
    }

    /// Returns the campaign title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the funding target.
    #[must_use]
    pub fn target(&self) -> Decimal {
        self.target
    }

    /// Returns the campaign creator.
    #[must_use]
    pub fn creator(&self) -> &CampaignCreator {
        &self.creator
    }

    /// Returns the amount raised so far.
    #[must_use]
    pub fn raised(&self) -> Decimal {
        self.raised
    }

    /// Returns the variant payload.
    #[must_use]
    pub fn details(&self) -> &CampaignDetails {
        &self.details
    }

    /// Returns the variant tag.
    #[must_use]
    pub fn kind(&self) -> CampaignKind {
        self.details.kind()
    }

    /// Appends a donation to the ledger and returns the thank-you receipt.
    ///
    /// Raised amounts may exceed the target.
    pub fn add_donation(
        &mut self,
        amount: Decimal,
        donor_name: impl Into<String>,
        donor_email: Option<String>,
    ) -> DonationReceipt {
        let donor_name = donor_name.into();
        self.raised += amount;
        self.donors
            .push(Donation::new(donor_name.clone(), donor_email, amount));

        DonationReceipt::new(donor_name, amount, self.title.clone())
    }

    /// Returns a snapshot of the donor ledger in donation order.
    #[must_use]
    pub fn donors(&self) -> Vec<Donation> {
        self.donors.clone()
    }

    /// Returns the number of ledger entries.
    #[must_use]
    pub fn donor_count(&self) -> usize {
        self.donors.len()
    }

    /// Returns up to `limit` of the most recent donations, oldest first.
    #[must_use]
    pub fn recent_donors(&self, limit: usize) -> Vec<Donation> {
        let start = self.donors.len().saturating_sub(limit);
        self.donors[start..].to_vec()
    }

    /// Returns `raised / target`, unclamped. Zero when the target is zero.
    #[must_use]
    pub fn progress_fraction(&self) -> Decimal {
        self.raised
            .checked_div(self.target)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the progress fraction clamped to `[0, 1]` for progress bars.
    #[must_use]
    pub fn clamped_progress(&self) -> Decimal {
        self.progress_fraction().clamp(Decimal::ZERO, Decimal::ONE)
    }

    /// Describes the campaign for a details view.
    #[must_use]
    pub fn describe(&self) -> CampaignDescription {
        let mut fields = Vec::new();
        let heading = match &self.details {
            CampaignDetails::Medical(medical) => {
                fields.push(field("Patient", medical.patient_name()));
                fields.push(field("Condition", medical.condition()));
                if let Some(hospital) = medical.hospital() {
                    fields.push(field("Hospital", hospital));
                }
                format!("Medical Campaign: {}", self.title)
            }
            CampaignDetails::Community(community) => {
                fields.push(field("Location", community.location()));
                if let Some(organization) = community.organization() {
                    fields.push(field("Organization", organization));
                }
                format!("Community Project: {}", self.title)
            }
        };
        fields.push(field("Campaign Creator", self.creator.name()));

        CampaignDescription {
            heading,
            fields,
            raised: self.raised,
            target: self.target,
            progress_percent: (self.progress_fraction() * Decimal::ONE_HUNDRED).round_dp(1),
        }
    }
}

fn field(label: &'static str, value: &str) -> DescriptionField {
    DescriptionField {
        label,
        value: value.to_owned(),
    }
}
