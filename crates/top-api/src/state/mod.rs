//! Shared handler state

use std::sync::Arc;

use top_common::AppConfig;
use top_core::entities::{Product, User};
use top_db::PgPool;
use top_service::{MovieService, ResourceService, ServiceContext};

/// Cloned into every handler; both halves are behind `Arc`
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pool behind the repositories, used by the readiness probe
    pub fn pool(&self) -> &PgPool {
        self.services.pool()
    }

    pub fn users(&self) -> ResourceService<'_, User> {
        self.services.users()
    }

    pub fn products(&self) -> ResourceService<'_, Product> {
        self.services.products()
    }

    pub fn movies(&self) -> MovieService<'_> {
        self.services.movies()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .field("env", &self.config.app.env)
            .finish()
    }
}
