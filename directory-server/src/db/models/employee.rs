//! Employee storage model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};

/// Employee record as stored in the `employee` table
///
/// The record id is assigned by the store; `employee_id` is the
/// business identifier every operation addresses records by.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub employee_id: String,
    pub name: String,
    pub age: u32,
    pub job_role: String,
    pub mobile_no: String,
    pub email: String,
    pub address: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub joining_month: NaiveDate,
    pub photo: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_pf: Decimal,
}

impl Employee {
    /// Build a fresh record from a create payload and the uploaded
    /// photo URL. PF always starts at zero.
    pub fn from_create(data: EmployeeCreate, photo_url: &str) -> Self {
        Self {
            id: None,
            employee_id: data.employee_id,
            name: data.name,
            age: data.age,
            job_role: data.job_role,
            mobile_no: data.mobile_no,
            email: data.email,
            address: data.address,
            salary: data.salary,
            joining_month: data.joining_month,
            photo: photo_url.to_string(),
            total_pf: Decimal::ZERO,
        }
    }

    /// Convert to the wire representation.
    pub fn into_response(self) -> EmployeeResponse {
        EmployeeResponse {
            id: self.id.map(|id| id.to_string()).unwrap_or_default(),
            employee_id: self.employee_id,
            name: self.name,
            age: self.age,
            job_role: self.job_role,
            mobile_no: self.mobile_no,
            email: self.email,
            address: self.address,
            salary: self.salary,
            joining_month: self.joining_month,
            photo: self.photo,
            total_pf: self.total_pf,
        }
    }
}

/// Storage-keyed patch for an `UPDATE ... MERGE` statement; absent
/// fields are skipped so they keep their stored value.
#[derive(Debug, Default, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_month: Option<NaiveDate>,
}

impl From<EmployeeUpdate> for EmployeePatch {
    fn from(update: EmployeeUpdate) -> Self {
        Self {
            name: update.name,
            age: update.age,
            job_role: update.job_role,
            mobile_no: update.mobile_no,
            email: update.email,
            address: update.address,
            salary: update.salary,
            joining_month: update.joining_month,
        }
    }
}
