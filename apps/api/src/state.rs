use crowdfund_application::PlatformService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub platform_service: PlatformService,
}

impl AppState {
    pub fn new(platform_service: PlatformService) -> Self {
        Self { platform_service }
    }
}
