//! Employee Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Access role — gates aggregate views and management endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Hr,
    Employee,
}

impl UserRole {
    /// Admin and HR share the management capability set
    pub fn is_manager(self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Hr)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Hr => "hr",
            UserRole::Employee => "employee",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "hr" => Some(UserRole::Hr),
            "employee" => Some(UserRole::Employee),
            _ => None,
        }
    }
}

/// Functional job category — gates swap/offer eligibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobRole {
    #[serde(rename = "food packer")]
    FoodPacker,
    #[serde(rename = "cashier")]
    Cashier,
    #[serde(rename = "kitchen")]
    Kitchen,
}

impl JobRole {
    pub fn as_str(self) -> &'static str {
        match self {
            JobRole::FoodPacker => "food packer",
            JobRole::Cashier => "cashier",
            JobRole::Kitchen => "kitchen",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "food packer" => Some(JobRole::FoodPacker),
            "cashier" => Some(JobRole::Cashier),
            "kitchen" => Some(JobRole::Kitchen),
            _ => None,
        }
    }
}

/// Employment type — selects the weekly hour ceiling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentType {
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
}

impl EmploymentType {
    /// Maximum cumulative shift hours per calendar week
    pub fn weekly_hour_cap(self) -> f64 {
        match self {
            EmploymentType::FullTime => 56.0,
            EmploymentType::PartTime => 24.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
        }
    }
}

/// Employee model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: UserRole,
    pub job_role: JobRole,
    pub employment_type: EmploymentType,
    pub mobile: String,
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

fn default_true() -> bool {
    true
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub job_role: JobRole,
    pub employment_type: EmploymentType,
    pub mobile: String,
    pub address: Option<String>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<JobRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Employee view without credential material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub job_role: JobRole,
    pub employment_type: EmploymentType,
    pub mobile: String,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            email: e.email,
            role: e.role,
            job_role: e.job_role,
            employment_type: e.employment_type,
            mobile: e.mobile,
            address: e.address,
            is_active: e.is_active,
            created_at: e.created_at,
        }
    }
}

impl Employee {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
