//! Access policy
//!
//! All record-visibility and self-vs-others decisions flow through
//! [`AccessScope`] so handlers never compare role strings ad hoc.
//! Management roles (admin, hr) see every employee's records; the employee
//! role is limited to its own.

use crate::auth::CurrentUser;
use crate::utils::AppError;

/// How much of a record collection a caller may see or touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessScope {
    /// Every employee's records (admin, hr)
    All,
    /// Only the caller's own records
    SelfOnly,
}

impl CurrentUser {
    /// The caller's scope over employee-owned records
    pub fn access_scope(&self) -> AccessScope {
        if self.is_manager() {
            AccessScope::All
        } else {
            AccessScope::SelfOnly
        }
    }

    /// Reject access to a record owned by `owner_id` unless the caller's
    /// scope covers it.
    pub fn authorize_record(&self, owner_id: &str) -> Result<(), AppError> {
        match self.access_scope() {
            AccessScope::All => Ok(()),
            AccessScope::SelfOnly if self.id == owner_id => Ok(()),
            AccessScope::SelfOnly => Err(AppError::forbidden(
                "You can only access your own records",
            )),
        }
    }

    /// Reject unless the caller holds a management role.
    pub fn require_manager(&self) -> Result<(), AppError> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Management role required for this operation",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{JobRole, UserRole};

    fn user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: "employee:me".to_string(),
            name: "Me".to_string(),
            role,
            job_role: JobRole::Cashier,
        }
    }

    #[test]
    fn managers_see_everything() {
        for role in [UserRole::Admin, UserRole::Hr] {
            let u = user(role);
            assert_eq!(u.access_scope(), AccessScope::All);
            assert!(u.authorize_record("employee:other").is_ok());
            assert!(u.require_manager().is_ok());
        }
    }

    #[test]
    fn employees_are_scoped_to_self() {
        let u = user(UserRole::Employee);
        assert_eq!(u.access_scope(), AccessScope::SelfOnly);
        assert!(u.authorize_record("employee:me").is_ok());
        assert!(u.authorize_record("employee:other").is_err());
        assert!(u.require_manager().is_err());
    }
}
