use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::store::{PgStore, RecipeStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = PgStore::connect(&config.db)
            .await
            .context("connect to database")?;

        Ok(Self::from_parts(
            Arc::new(store) as Arc<dyn RecipeStore>,
            Arc::new(config),
        ))
    }

    pub fn from_parts(store: Arc<dyn RecipeStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::DbConfig;
        use crate::testing::MemoryStore;

        let config = Arc::new(AppConfig {
            db: DbConfig {
                host: "localhost".into(),
                port: 5432,
                username: "test".into(),
                password: "test".into(),
                database: "test".into(),
            },
            app_host: "127.0.0.1".into(),
            app_port: 0,
        });
        Self::from_parts(Arc::new(MemoryStore::seeded()), config)
    }
}
