//! Employee Repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeePatch};
use crate::pf;
use shared::models::{EmployeeCreate, EmployeeUpdate};

/// Derived-field rewrite applied after the field merge
#[derive(Serialize)]
struct PfPatch {
    #[serde(with = "rust_decimal::serde::float")]
    total_pf: Decimal,
}

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

    /// Find all employees, storage order
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by business identifier
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE employee_id = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find all employees with the given job role (empty result is not an error)
    pub async fn find_by_role(&self, role: &str) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE job_role = $job_role")
            .bind(("job_role", role.to_string()))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Create a new employee with the uploaded photo URL. PF starts at zero.
    pub async fn create(&self, data: EmployeeCreate, photo_url: &str) -> RepoResult<Employee> {
        // Friendly duplicate check; the unique index is the real guard
        if self.find_by_employee_id(&data.employee_id).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee ID '{}' already exists",
                data.employee_id
            )));
        }

        let record = Employee::from_create(data, photo_url);
        let created: Option<Employee> = self.base.db().create("employee").content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee by business identifier.
    ///
    /// Fields absent from `data` keep their stored value. The overlay
    /// is a single MERGE statement, so concurrent partial updates
    /// cannot drop each other's fields; `total_pf` is then recomputed
    /// from the merged salary and joining month as of `today`. A write
    /// racing between the two statements can only leave the derived
    /// field stale, never lose a field.
    pub async fn update(
        &self,
        employee_id: &str,
        data: EmployeeUpdate,
        today: NaiveDate,
    ) -> RepoResult<Employee> {
        let patch = EmployeePatch::from(data);
        let merged: Vec<Employee> = self
            .base
            .db()
            .query("UPDATE employee MERGE $data WHERE employee_id = $employee_id RETURN AFTER")
            .bind(("data", patch))
            .bind(("employee_id", employee_id.to_string()))
            .await?
            .take(0)?;
        let merged = merged
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", employee_id)))?;

        let id = merged
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Stored employee missing record id".to_string()))?;

        let total_pf = pf::total_pf(merged.salary, merged.joining_month, today);
        let updated: Option<Employee> = self
            .base
            .db()
            .update(id)
            .merge(PfPatch { total_pf })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", employee_id)))
    }

    /// Delete an employee by business identifier, returning the
    /// removed record.
    pub async fn delete(&self, employee_id: &str) -> RepoResult<Employee> {
        let existing = self
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", employee_id)))?;

        let id = existing
            .id
            .clone()
            .ok_or_else(|| RepoError::Database("Stored employee missing record id".to_string()))?;

        let _: Option<Employee> = self.base.db().delete(id).await?;
        Ok(existing)
    }
}
