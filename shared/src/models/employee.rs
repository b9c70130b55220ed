//! Employee payload and response types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Create employee payload
///
/// The photo travels as a separate multipart `file` part and is not a
/// field here; the server assigns the stored photo URL itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
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
}

/// Update employee payload
///
/// Every field is optional; absent fields leave the stored value
/// untouched. `employeeId` and `photo` are immutable after creation
/// and `totalPF` is always derived, so none of them appear here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
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
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_month: Option<NaiveDate>,
}

/// Employee record as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    /// Storage record id (`employee:xxxx`)
    pub id: String,
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
    #[serde(rename = "totalPF", with = "rust_decimal::serde::float")]
    pub total_pf: Decimal,
}
