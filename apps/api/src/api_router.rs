mod cors;

use axum::Router;
use axum::routing::{get, post};
use crowdfund_core::AppError;
use tower_http::trace::TraceLayer;
use tower_sessions::cookie::SameSite;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::api_config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

use self::cors::build_cors_layer;

pub fn build_session_layer(config: &ApiConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.cookie_secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_idle_minutes,
        )))
}

pub fn build_router(
    app_state: AppState,
    frontend_url: &str,
    session_layer: SessionManagerLayer<MemoryStore>,
) -> Result<Router, AppError> {
    let cors_layer = build_cors_layer(frontend_url)?;

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route("/api/overview", get(handlers::campaigns::overview_handler))
        .route(
            "/api/campaigns",
            get(handlers::campaigns::list_campaigns_handler)
                .post(handlers::campaigns::create_campaign_handler),
        )
        .route(
            "/api/campaigns/{campaign_id}",
            get(handlers::campaigns::campaign_details_handler),
        )
        .route(
            "/api/campaigns/{campaign_id}/donations",
            post(handlers::campaigns::donate_handler),
        )
        .route(
            "/api/notifications/last-donation",
            get(handlers::notifications::last_donation_handler),
        )
        .route(
            "/api/preferences/campaign-type",
            get(handlers::preferences::campaign_type_handler)
                .put(handlers::preferences::update_campaign_type_handler),
        )
        .route(
            "/api/validation/rules",
            get(handlers::validation::list_rules_handler),
        )
        .route(
            "/api/validation/rules/{rule_name}/check",
            post(handlers::validation::check_rule_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(session_layer)
        .with_state(app_state))
}

#[cfg(test)]
mod tests;
