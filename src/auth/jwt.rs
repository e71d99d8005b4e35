//! JWT token service
//!
//! Token generation, validation, and the authenticated-user context.

use crate::db::models::{JobRole, UserRole};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match load_jwt_secret() {
            Ok(key) => key,
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT configuration error: {}, using emergency key", e);
                    "emergency-fallback-key-must-be-replaced-in-production".to_string()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440), // 24 hours
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "roster-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "roster-clients".to_string()),
        }
    }
}

/// Claims stored inside the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Employee ID (subject), "employee:xyz"
    pub sub: String,
    /// Display name
    pub name: String,
    /// Access role ("admin" / "hr" / "employee")
    pub role: String,
    /// Functional job role ("cashier", ...)
    pub job_role: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a printable random signing key (development fallback)
pub fn generate_printable_jwt_secret() -> Result<String, JwtError> {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut bytes = [0u8; 64];
    rng.fill(&mut bytes).map_err(|_| {
        JwtError::KeyGenerationFailed("Failed to generate secure random key".to_string())
    })?;

    Ok(bytes
        .iter()
        .map(|b| {
            let idx = (*b as usize) % allowed_chars.len();
            allowed_chars.as_bytes()[idx] as char
        })
        .collect())
}

/// Load the signing secret from the environment. Missing secrets are fatal
/// in release builds; debug builds fall back to a generated key.
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, generating temporary key for development");
                generate_printable_jwt_secret()
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production".to_string(),
                ))
            }
        }
    }
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a new access token for an employee
    pub fn generate_token(
        &self,
        employee_id: &str,
        name: &str,
        role: UserRole,
        job_role: JobRole,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: employee_id.to_string(),
            name: name.to_string(),
            role: role.as_str().to_string(),
            job_role: job_role.as_str().to_string(),
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Authenticated employee context, parsed from JWT claims.
///
/// Created by the auth middleware and injected into request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Employee ID, "employee:xyz"
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub job_role: JobRole,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&claims.role)
            .ok_or_else(|| JwtError::InvalidToken(format!("Unknown role: {}", claims.role)))?;
        let job_role = JobRole::parse(&claims.job_role).ok_or_else(|| {
            JwtError::InvalidToken(format!("Unknown job role: {}", claims.job_role))
        })?;

        Ok(Self {
            id: claims.sub,
            name: claims.name,
            role,
            job_role,
        })
    }
}

impl CurrentUser {
    /// Admin and HR share the management capability set
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-key-that-is-long-enough!".to_string(),
            expiration_minutes: 60,
            issuer: "roster-server".to_string(),
            audience: "roster-clients".to_string(),
        })
    }

    #[test]
    fn generation_and_validation_round_trip() {
        let service = test_service();
        let token = service
            .generate_token("employee:abc", "Alice", UserRole::Employee, JobRole::Cashier)
            .expect("generate");

        let claims = service.validate_token(&token).expect("validate");
        assert_eq!(claims.sub, "employee:abc");
        assert_eq!(claims.name, "Alice");
        assert_eq!(claims.role, "employee");
        assert_eq!(claims.job_role, "cashier");

        let user = CurrentUser::try_from(claims).expect("parse claims");
        assert_eq!(user.role, UserRole::Employee);
        assert_eq!(user.job_role, JobRole::Cashier);
        assert!(!user.is_manager());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let service = test_service();
        let token = service
            .generate_token("employee:abc", "Alice", UserRole::Admin, JobRole::Kitchen)
            .expect("generate");

        let mut tampered = token.clone();
        tampered.push('x');
        assert!(service.validate_token(&tampered).is_err());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let service = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-key-also-long-enough!".to_string(),
            ..service.config.clone()
        });

        let token = service
            .generate_token("employee:abc", "Alice", UserRole::Hr, JobRole::FoodPacker)
            .expect("generate");
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn job_role_with_space_survives_claims() {
        let service = test_service();
        let token = service
            .generate_token("employee:p", "Pat", UserRole::Employee, JobRole::FoodPacker)
            .expect("generate");
        let claims = service.validate_token(&token).expect("validate");
        assert_eq!(claims.job_role, "food packer");
        let user = CurrentUser::try_from(claims).expect("parse");
        assert_eq!(user.job_role, JobRole::FoodPacker);
    }
}
