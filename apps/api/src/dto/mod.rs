mod campaigns;
mod common;
mod donations;
mod preferences;
mod validation;

pub use campaigns::{
    CampaignDetailsResponse, CampaignFieldResponse, CampaignSummaryResponse, CreateCampaignRequest,
    DonorResponse,
};
pub use common::{HealthResponse, OverviewResponse, PlatformStatsResponse};
pub use donations::{DonationReceiptResponse, DonationRequest, LastDonationResponse};
pub use preferences::CampaignTypePreference;
pub use validation::{RuleCheckRequest, RuleCheckResponse, ValidationRuleResponse};

#[cfg(test)]
mod tests {
    use crowdfund_application::CampaignFormDetails;
    use crowdfund_domain::{
        Campaign, CampaignCreator, CampaignDetails, CampaignKind, CommunityDetails,
        DonationReceipt, MedicalDetails, Validator,
    };
    use rust_decimal::Decimal;
    use ts_rs::{Config, TS};

    use super::{
        CampaignDetailsResponse, CampaignFieldResponse, CampaignSummaryResponse,
        CampaignTypePreference, CreateCampaignRequest, DonationReceiptResponse, DonationRequest,
        DonorResponse, HealthResponse, LastDonationResponse, OverviewResponse,
        PlatformStatsResponse, RuleCheckRequest, RuleCheckResponse, ValidationRuleResponse,
    };
    use crate::error::{ErrorResponse, FieldErrorResponse};

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        HealthResponse::export(&config)?;
        PlatformStatsResponse::export(&config)?;
        OverviewResponse::export(&config)?;
        CampaignSummaryResponse::export(&config)?;
        CampaignFieldResponse::export(&config)?;
        DonorResponse::export(&config)?;
        CampaignDetailsResponse::export(&config)?;
        CreateCampaignRequest::export(&config)?;
        DonationRequest::export(&config)?;
        DonationReceiptResponse::export(&config)?;
        LastDonationResponse::export(&config)?;
        CampaignTypePreference::export(&config)?;
        ValidationRuleResponse::export(&config)?;
        RuleCheckRequest::export(&config)?;
        RuleCheckResponse::export(&config)?;
        ErrorResponse::export(&config)?;
        FieldErrorResponse::export(&config)?;

        Ok(())
    }

    fn heart_surgery_fund() -> Campaign {
        Campaign::new(
            "Heart Surgery Fund",
            Decimal::from(35_000),
            CampaignCreator::new("David Brown", "david@gmail.com"),
            CampaignDetails::Medical(MedicalDetails::new(
                "Michael Brown",
                "Heart Valve Replacement",
                None,
            )),
        )
    }

    #[test]
    fn details_response_keeps_last_five_donors_without_emails() {
        let mut campaign = heart_surgery_fund();
        for index in 1..=7 {
            campaign.add_donation(
                Decimal::from(index * 10),
                format!("Donor {index}").as_str(),
                Some("donor@example.com".to_owned()),
            );
        }

        let response = CampaignDetailsResponse::from(campaign);

        assert_eq!(response.heading, "Medical Campaign: Heart Surgery Fund");
        assert_eq!(response.donor_count, 7);
        assert_eq!(response.raised, "280");
        assert_eq!(response.recent_donors.len(), 5);
        assert_eq!(response.recent_donors[0].name, "Donor 3");
        assert_eq!(response.recent_donors[4].amount, "70");
        let labels: Vec<&str> = response
            .fields
            .iter()
            .map(|field| field.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Patient", "Condition", "Campaign Creator"]);
    }

    #[test]
    fn create_request_builds_form_for_requested_kind() {
        let request = CreateCampaignRequest {
            creator_name: "Mary Wilson".to_owned(),
            location: "Main Street".to_owned(),
            patient_name: "ignored".to_owned(),
            ..CreateCampaignRequest::default()
        };

        let form = request.into_form(CampaignKind::Community);

        assert_eq!(form.creator_name, "Mary Wilson");
        assert_eq!(
            form.details,
            CampaignFormDetails::Community {
                location: "Main Street".to_owned(),
                organization: String::new(),
            }
        );
    }

    #[test]
    fn receipt_response_carries_thank_you_text() {
        let receipt = DonationReceipt::new("Alice", Decimal::from(100), "Central Park Renovation");

        let response = DonationReceiptResponse::from(receipt);

        assert_eq!(
            response.message,
            "Thanks Alice! Donated $100.00 to Central Park Renovation"
        );
        assert_eq!(response.amount, "100");
    }

    #[test]
    fn preference_uses_variant_label() {
        let campaign = Campaign::new(
            "Central Park Renovation",
            Decimal::from(20_000),
            CampaignCreator::new("Mary Wilson", "mary@parkfriends.org"),
            CampaignDetails::Community(CommunityDetails::new("Central Park, Downtown", None)),
        );
        let preference = CampaignTypePreference::from(campaign.kind());

        assert_eq!(preference.campaign_type, "Community");
    }

    #[test]
    fn rule_catalog_entries_convert_in_order() {
        let rules: Vec<ValidationRuleResponse> = Validator::catalog()
            .into_iter()
            .map(ValidationRuleResponse::from)
            .collect();

        assert_eq!(rules.len(), 8);
        assert_eq!(rules[0].name, "name");
        assert_eq!(rules[3].title, "Campaign Title");
    }
}
