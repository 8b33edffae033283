use crowdfund_core::{AppError, AppResult, FieldError};
use crowdfund_domain::{
    Campaign, CampaignCreator, CampaignDetails, CampaignId, CommunityDetails, DonationReceipt,
    MedicalDetails, RuleName, ValidationError, Validator,
};
use rust_decimal::Decimal;
use tracing::{error, warn};

use super::{DONATION_MAX, DONATION_MIN, PlatformService, TARGET_MAX, TARGET_MIN};
use crate::platform_ports::{CampaignForm, CampaignFormDetails, DonationForm, SessionStore};

impl PlatformService {
    /// Validates a donation form and records it when every field passes.
    ///
    /// The phone number is checked when present but never stored.
    pub fn submit_donation(
        &self,
        store: &mut dyn SessionStore,
        campaign_id: CampaignId,
        form: &DonationForm,
    ) -> AppResult<DonationReceipt> {
        let mut check = FormCheck::new(&self.validator);
        check.required("Name", RuleName::Name, &form.donor_name)?;
        check.optional("Email", RuleName::Email, &form.donor_email)?;
        check.optional("Phone", RuleName::Phone, &form.donor_phone)?;
        let amount = check.amount("Amount", &form.amount, DONATION_MIN, DONATION_MAX)?;
        let amount = check.finish("donation", amount)?;

        self.record_donation(
            store,
            campaign_id,
            amount,
            form.donor_name.trim(),
            optional_text(&form.donor_email),
        )
    }

    /// Validates a create-campaign form and appends the campaign when every
    /// field passes.
    pub fn submit_campaign(
        &self,
        store: &mut dyn SessionStore,
        form: &CampaignForm,
    ) -> AppResult<Campaign> {
        let mut check = FormCheck::new(&self.validator);
        check.required("Creator Name", RuleName::Name, &form.creator_name)?;
        check.required("Creator Email", RuleName::Email, &form.creator_email)?;
        check.required("Campaign Title", RuleName::CampaignTitle, &form.title)?;
        let target = check.amount("Target Amount", &form.target, TARGET_MIN, TARGET_MAX)?;

        match &form.details {
            CampaignFormDetails::Medical {
                patient_name,
                condition,
                hospital,
            } => {
                check.required("Patient Name", RuleName::Name, patient_name)?;
                check.required("Medical Condition", RuleName::MedicalCondition, condition)?;
                check.optional("Hospital", RuleName::Organization, hospital)?;
            }
            CampaignFormDetails::Community {
                location,
                organization,
            } => {
                check.required("Location", RuleName::Location, location)?;
                check.optional("Organization", RuleName::Organization, organization)?;
            }
        }

        let target = check.finish("campaign", target)?;

        let details = match &form.details {
            CampaignFormDetails::Medical {
                patient_name,
                condition,
                hospital,
            } => CampaignDetails::Medical(MedicalDetails::new(
                patient_name.trim(),
                condition.trim(),
                optional_text(hospital),
            )),
            CampaignFormDetails::Community {
                location,
                organization,
            } => CampaignDetails::Community(CommunityDetails::new(
                location.trim(),
                optional_text(organization),
            )),
        };
        let campaign = Campaign::new(
            form.title.trim(),
            target,
            CampaignCreator::new(form.creator_name.trim(), form.creator_email.trim()),
            details,
        );

        self.add_campaign(store, campaign.clone())?;
        Ok(campaign)
    }
}

/// Collects every failing field of one form submission.
struct FormCheck<'a> {
    validator: &'a Validator,
    errors: Vec<FieldError>,
}

impl<'a> FormCheck<'a> {
    fn new(validator: &'a Validator) -> Self {
        Self {
            validator,
            errors: Vec::new(),
        }
    }

    fn required(&mut self, field: &str, rule: RuleName, raw_text: &str) -> AppResult<()> {
        let result = self.validator.check(rule, raw_text);
        self.record(field, result).map(|_| ())
    }

    /// Checks the field only when the user typed something into it.
    fn optional(&mut self, field: &str, rule: RuleName, raw_text: &str) -> AppResult<()> {
        if raw_text.is_empty() {
            return Ok(());
        }

        self.required(field, rule, raw_text)
    }

    fn amount(
        &mut self,
        field: &str,
        raw_text: &str,
        min: Decimal,
        max: Decimal,
    ) -> AppResult<Option<Decimal>> {
        let result = self.validator.validate_amount_range(raw_text, min, max);
        self.record(field, result)
    }

    fn record<T>(
        &mut self,
        field: &str,
        result: Result<T, ValidationError>,
    ) -> AppResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(failure) if failure.is_defect() => {
                error!(field, %failure, "validation defect");
                Err(failure.into())
            }
            Err(failure) => {
                self.errors.push(FieldError::new(field, failure.to_string()));
                Ok(None)
            }
        }
    }

    /// Rejects the submission if any field failed; otherwise returns the
    /// validated value.
    fn finish<T>(self, form: &str, value: Option<T>) -> AppResult<T> {
        if !self.errors.is_empty() {
            let fields: Vec<&str> = self.errors.iter().map(|error| error.field.as_str()).collect();
            warn!(form, ?fields, "submission rejected");
            return Err(AppError::Rejected(self.errors));
        }

        value.ok_or_else(|| AppError::Internal(format!("{form} form accepted without a value")))
    }
}

fn optional_text(raw_text: &str) -> Option<String> {
    let trimmed = raw_text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
