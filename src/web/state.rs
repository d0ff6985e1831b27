use crate::database::activity_registry::ActivityRegistry;
use crate::services::activities_service::{self, SharedRegistry};

#[derive(Clone)]
pub struct AppState {
    pub registry: SharedRegistry,
}

impl AppState {
    pub fn new(registry: ActivityRegistry) -> Self {
        Self {
            registry: activities_service::shared(registry),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ActivityRegistry::seeded())
    }
}
