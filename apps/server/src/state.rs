//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    auth::AuthManager,
    config::Config,
    db::{
        BusinessStore, DropListStore, PostgresBusinessStore, PostgresDropListStore,
        PostgresReviewStore, PostgresUserStore, ReviewStore, UserStore,
    },
    services::{BusinessService, DropListService, ReviewService},
    Error, Result,
};

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    pub run_migrations: bool,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
        }
    }
}

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub auth: Arc<AuthManager>,
    pub business_service: Arc<BusinessService>,
    pub drop_list_service: Arc<DropListService>,
    pub review_service: Arc<ReviewService>,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    /// Initialize the application state.
    pub async fn new(config: Config) -> Result<Self> {
        Self::new_with_options(config, AppStateOptions::default()).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let config = Arc::new(config);

        let db_pool = create_db_pool(config.as_ref()).await?;

        if options.run_migrations {
            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&db_pool)
                .await
                .map_err(|e| Error::Internal(format!("Migration failed: {e}")))?;
        }

        let auth = Arc::new(AuthManager::new(&config.auth));

        let business_store: Arc<dyn BusinessStore> =
            Arc::new(PostgresBusinessStore::new(db_pool.clone()));
        let drop_list_store: Arc<dyn DropListStore> =
            Arc::new(PostgresDropListStore::new(db_pool.clone()));
        let review_store: Arc<dyn ReviewStore> =
            Arc::new(PostgresReviewStore::new(db_pool.clone()));
        let users: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(db_pool.clone()));

        let business_service = Arc::new(BusinessService::new(
            business_store.clone(),
            &config.search,
        ));
        let drop_list_service = Arc::new(DropListService::new(
            drop_list_store,
            business_store.clone(),
        ));
        let review_service = Arc::new(ReviewService::new(
            review_store,
            business_store,
            &config.search,
        ));

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            config,
            db_pool,
            auth,
            business_service,
            drop_list_service,
            review_service,
            users,
        })
    }
}

pub async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let statement_timeout = config.database.statement_timeout_seconds;
    let lock_timeout = config.database.lock_timeout_seconds;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                // Bound query execution and lock waits per connection.
                sqlx::query(&format!("SET statement_timeout = '{statement_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;

                sqlx::query(&format!("SET lock_timeout = '{lock_timeout}s'"))
                    .execute(&mut *conn)
                    .await?;

                Ok(())
            })
        })
        .connect(&config.database.url)
        .await
        .map_err(Error::Database)?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
