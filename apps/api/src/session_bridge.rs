//! Moves platform state between the cookie session and the synchronous core.

use crowdfund_application::{
    PlatformService, SESSION_CAMPAIGN_TYPE_KEY, SESSION_CAMPAIGNS_KEY, SESSION_LAST_DONATION_KEY,
};
use crowdfund_core::{AppError, AppResult};
use crowdfund_infrastructure::InMemorySessionStore;
use serde_json::Value;
use tower_sessions::Session;

const PLATFORM_SESSION_KEYS: [&str; 3] = [
    SESSION_CAMPAIGNS_KEY,
    SESSION_LAST_DONATION_KEY,
    SESSION_CAMPAIGN_TYPE_KEY,
];

/// Runs one platform operation against the caller's session.
///
/// The registry is initialized first. Values written during the call are
/// copied back even when the operation fails, so seeded campaigns keep
/// their ids across requests.
///
/// Nothing guards a session against overlapping calls: two requests in the
/// same session that both write (a double-submitted donation) race, and the
/// later write-back wins. Callers must serialize requests within a session.
pub async fn with_platform_store<T, F>(
    session: &Session,
    platform_service: &PlatformService,
    operation: F,
) -> AppResult<T>
where
    F: FnOnce(&mut InMemorySessionStore) -> AppResult<T>,
{
    let mut store = load_store(session).await?;
    platform_service.initialize(&mut store)?;

    let outcome = operation(&mut store);
    save_store(session, &store).await?;

    outcome
}

async fn load_store(session: &Session) -> AppResult<InMemorySessionStore> {
    let mut values: Vec<(String, Value)> = Vec::with_capacity(PLATFORM_SESSION_KEYS.len());
    for key in PLATFORM_SESSION_KEYS {
        let value = session.get_value(key).await.map_err(|error| {
            AppError::Internal(format!("failed to read session value '{key}': {error}"))
        })?;

        if let Some(value) = value {
            values.push((key.to_owned(), value));
        }
    }

    Ok(InMemorySessionStore::from_values(values))
}

async fn save_store(session: &Session, store: &InMemorySessionStore) -> AppResult<()> {
    for (key, value) in store.changed_values() {
        session.insert_value(&key, value).await.map_err(|error| {
            AppError::Internal(format!("failed to write session value '{key}': {error}"))
        })?;
    }

    Ok(())
}
