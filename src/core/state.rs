use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    EmployeeRepository, LeaveRequestRepository, ShiftOfferRepository, ShiftRepository,
    SwapRequestRepository,
};
use crate::utils::AppError;

/// Server state — shared handles for every request handler.
///
/// Cloning is shallow: the database handle and JWT service are
/// reference-counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize the server state:
    /// 1. create the work directory layout
    /// 2. open the database at work_dir/database
    /// 3. seed the default admin account when ADMIN_PASSWORD is set
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_dir()).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self::new(config.clone(), db_service.db, jwt_service);

        if let Some(ref password) = config.admin_password {
            state
                .employees()
                .ensure_default_admin(&config.admin_email, password)
                .await?;
        } else {
            tracing::warn!("ADMIN_PASSWORD not set, skipping default admin seeding");
        }

        Ok(state)
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    // Repository accessors — repositories are cheap wrappers over the
    // shared database handle.

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.db.clone())
    }

    pub fn shifts(&self) -> ShiftRepository {
        ShiftRepository::new(self.db.clone())
    }

    pub fn shift_offers(&self) -> ShiftOfferRepository {
        ShiftOfferRepository::new(self.db.clone())
    }

    pub fn swap_requests(&self) -> SwapRequestRepository {
        SwapRequestRepository::new(self.db.clone())
    }

    pub fn leave_requests(&self) -> LeaveRequestRepository {
        LeaveRequestRepository::new(self.db.clone())
    }
}
