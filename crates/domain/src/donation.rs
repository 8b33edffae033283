use std::fmt::{Display, Formatter};

use crowdfund_core::format_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ledger entry recorded against a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donation {
    name: String,
    email: Option<String>,
    amount: Decimal,
}

impl Donation {
    /// Creates a ledger entry.
    #[must_use]
    pub fn new(name: impl Into<String>, email: Option<String>, amount: Decimal) -> Self {
        Self {
            name: name.into(),
            email,
            amount,
        }
    }

    /// Returns the donor name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the donor email, if one was given.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the donated amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Thank-you payload produced by a recorded donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationReceipt {
    donor_name: String,
    amount: Decimal,
    campaign_title: String,
}

impl DonationReceipt {
    /// Creates a receipt.
    #[must_use]
    pub fn new(
        donor_name: impl Into<String>,
        amount: Decimal,
        campaign_title: impl Into<String>,
    ) -> Self {
        Self {
            donor_name: donor_name.into(),
            amount,
            campaign_title: campaign_title.into(),
        }
    }

    /// Returns the donor name.
    #[must_use]
    pub fn donor_name(&self) -> &str {
        self.donor_name.as_str()
    }

    /// Returns the donated amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the title of the campaign that received the donation.
    #[must_use]
    pub fn campaign_title(&self) -> &str {
        self.campaign_title.as_str()
    }
}

impl Display for DonationReceipt {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Thanks {}! Donated ${} to {}",
            self.donor_name,
            format_money(self.amount),
            self.campaign_title
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::DonationReceipt;

    #[test]
    fn receipt_renders_thank_you_message() {
        let receipt = DonationReceipt::new("Alice", Decimal::from(1_250), "Heart Surgery Fund");
        assert_eq!(
            receipt.to_string(),
            "Thanks Alice! Donated $1,250.00 to Heart Surgery Fund"
        );
    }
}
