//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    Employee, EmployeeCreate, EmployeeUpdate, EmploymentType, JobRole, UserRole,
};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing = self.base.parse_id(id, "employee")?;
        let emp: Option<Employee> = self.base.db().select(thing).await?;
        Ok(emp)
    }

    /// Find employee by email (login path)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        let email = data.email.to_lowercase();

        // Check duplicate email
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                email
            )));
        }

        let hash_pass = Employee::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    name = $name,
                    email = $email,
                    hash_pass = $hash_pass,
                    role = $role,
                    job_role = $job_role,
                    employment_type = $employment_type,
                    mobile = $mobile,
                    address = $address,
                    is_active = true,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("email", email))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .bind(("job_role", data.job_role))
            .bind(("employment_type", data.employment_type))
            .bind(("mobile", data.mobile))
            .bind(("address", data.address))
            .bind(("now", now_millis()))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing = self.base.parse_id(id, "employee")?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate email if changing
        let email = data.email.map(|e| e.to_lowercase());
        if let Some(ref new_email) = email
            && new_email != &existing.email
            && self.find_by_email(new_email).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Email '{}' already registered",
                new_email
            )));
        }

        let hash_pass = match data.password {
            Some(ref password) => Some(
                Employee::hash_password(password)
                    .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?,
            ),
            None => None,
        };

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    email = $email OR email,
                    hash_pass = $hash_pass OR hash_pass,
                    role = IF $has_role THEN $role ELSE role END,
                    job_role = IF $has_job_role THEN $job_role ELSE job_role END,
                    employment_type = IF $has_employment THEN $employment_type ELSE employment_type END,
                    mobile = $mobile OR mobile,
                    address = IF $has_address THEN $address ELSE address END,
                    is_active = IF $has_is_active THEN $is_active ELSE is_active END,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("email", email))
            .bind(("hash_pass", hash_pass))
            .bind(("has_role", data.role.is_some()))
            .bind(("role", data.role))
            .bind(("has_job_role", data.job_role.is_some()))
            .bind(("job_role", data.job_role))
            .bind(("has_employment", data.employment_type.is_some()))
            .bind(("employment_type", data.employment_type))
            .bind(("mobile", data.mobile))
            .bind(("has_address", data.address.is_some()))
            .bind(("address", data.address))
            .bind(("has_is_active", data.is_active.is_some()))
            .bind(("is_active", data.is_active))
            .bind(("now", now_millis()))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = self.base.parse_id(id, "employee")?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    /// Seed the default admin account on first boot
    pub async fn ensure_default_admin(&self, email: &str, password: &str) -> RepoResult<()> {
        if self.find_by_email(email).await?.is_some() {
            return Ok(());
        }

        self.create(EmployeeCreate {
            name: "Administrator".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role: UserRole::Admin,
            job_role: JobRole::Kitchen,
            employment_type: EmploymentType::FullTime,
            mobile: String::new(),
            address: None,
        })
        .await?;

        tracing::info!(email = %email, "Default admin account created");
        Ok(())
    }
}
