use crate::auth::JwtConfig;
use chrono_tz::Tz;
use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/roster | Work directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | UTC | Business timezone (IANA name) |
/// | ENVIRONMENT | development | Runtime environment |
/// | ADMIN_EMAIL | admin@localhost | Seeded admin account email |
/// | ADMIN_PASSWORD | - | Seeded admin account password |
/// | JWT_SECRET | - | Token signing secret (required in release builds) |
/// | JWT_EXPIRATION_MINUTES | 1440 | Token lifetime |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/roster HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone: "today" and week bounds are computed in it
    pub timezone: Tz,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Email for the seeded admin account
    pub admin_email: String,
    /// Password for the seeded admin account (None skips seeding)
    pub admin_password: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults where unset.
    pub fn from_env() -> Self {
        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(_) => {
                    tracing::warn!(value = %tz, "Unknown TIMEZONE, falling back to UTC");
                    None
                }
            })
            .unwrap_or(chrono_tz::UTC);

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/roster".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone,
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Directory for the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Directory for rolling log files
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// Create the work directory layout if missing.
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
