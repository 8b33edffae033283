use crowdfund_domain::{
    Campaign, CampaignCreator, CampaignDetails, CommunityDetails, MedicalDetails,
};
use rust_decimal::Decimal;

/// Sample campaigns placed in every fresh session.
pub(super) fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign::new(
            "Cancer Treatment for Sarah",
            Decimal::from(50_000),
            CampaignCreator::new("John Smith", "john@example.com"),
            CampaignDetails::Medical(MedicalDetails::new(
                "Sarah Johnson",
                "Breast Cancer Treatment",
                Some("City General Hospital".to_owned()),
            )),
        ),
        Campaign::new(
            "Central Park Renovation",
            Decimal::from(20_000),
            CampaignCreator::new("Mary Wilson", "mary@parkfriends.org"),
            CampaignDetails::Community(CommunityDetails::new(
                "Central Park, Downtown",
                Some("Friends of Central Park".to_owned()),
            )),
        ),
        Campaign::new(
            "Heart Surgery Fund",
            Decimal::from(35_000),
            CampaignCreator::new("David Brown", "david@gmail.com"),
            CampaignDetails::Medical(MedicalDetails::new(
                "Michael Brown",
                "Heart Valve Replacement",
                Some("St. Mary's Medical Center".to_owned()),
            )),
        ),
    ]
}
