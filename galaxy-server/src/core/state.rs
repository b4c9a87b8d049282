use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::admin_user;
use crate::services::ImageStore;
use crate::utils::AppError;

/// Shared application state
///
/// Holds the handles every request needs. Cloning is cheap (pool and
/// paths only), one clone per router.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable runtime configuration |
/// | db | SQLite pool wrapper |
/// | images | Upload directory handle |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub images: ImageStore,
}

impl ServerState {
    /// Open the database, run migrations, seed the default admin account
    /// and prepare the upload directory.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;

        admin_user::ensure_default_admin(&db.pool).await?;

        let images = ImageStore::new(&config.upload_dir)?;

        Ok(Self {
            config: config.clone(),
            db,
            images,
        })
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }
}
