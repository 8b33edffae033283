//! Crowdfunding platform registry and form submission flows.
//!
//! The registry keeps its whole state in the caller's [`SessionStore`]: the
//! campaign sequence, the single-slot thank-you message and the sticky
//! campaign type preference. Every entry point receives the store explicitly.

use crowdfund_core::{AppError, AppResult};
use crowdfund_domain::Validator;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::platform_ports::SessionStore;

mod registry;
mod seed;
mod submissions;
mod views;


pub use views::{CampaignSummary, PlatformStats};

/// Smallest accepted donation.
pub const DONATION_MIN: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Largest accepted donation.
pub const DONATION_MAX: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// Smallest accepted campaign target.
pub const TARGET_MIN: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Largest accepted campaign target.
pub const TARGET_MAX: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Application service for the crowdfunding platform.
#[derive(Debug, Clone)]
pub struct PlatformService {
    validator: Validator,
}

impl PlatformService {
    /// Creates a platform service around a compiled rule table.
    #[must_use]
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    /// Returns the rule table used by submission flows.
    #[must_use]
    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

fn read_session<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> AppResult<Option<T>> {
    store
        .get_value(key)?
        .map(|value| {
            serde_json::from_value(value).map_err(|error| {
                AppError::Internal(format!("failed to decode session value '{key}': {error}"))
            })
        })
        .transpose()
}

fn write_session<T: Serialize>(store: &mut dyn SessionStore, key: &str, value: &T) -> AppResult<()> {
    let value = serde_json::to_value(value).map_err(|error| {
        AppError::Internal(format!("failed to encode session value '{key}': {error}"))
    })?;
    store.insert_value(key, value)
}
