use crowdfund_core::AppResult;
use serde_json::Value;

/// Session key holding the ordered campaign sequence.
pub const SESSION_CAMPAIGNS_KEY: &str = "campaigns";

/// Session key holding the single-slot thank-you notification.
pub const SESSION_LAST_DONATION_KEY: &str = "last_donation";

/// Session key holding the sticky campaign type preference.
pub const SESSION_CAMPAIGN_TYPE_KEY: &str = "campaign_type";

/// Keyed per-user session area owned by the presentation layer.
///
/// Values outlive a single request but only for the lifetime of the session.
/// Each session owns its own store; implementations need no locking.
pub trait SessionStore: Send {
    /// Returns the value stored under `key`, if any.
    fn get_value(&self, key: &str) -> AppResult<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn insert_value(&mut self, key: &str, value: Value) -> AppResult<()>;

    /// Returns whether a value is stored under `key`.
    fn contains_key(&self, key: &str) -> AppResult<bool> {
        Ok(self.get_value(key)?.is_some())
    }
}
