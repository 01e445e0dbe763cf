//! Storage seam for the HR entities.
//!
//! The trait exposes list/get/create/replace/patch/delete per entity plus
//! the status-transition and aggregation queries, so route handlers can be
//! exercised against an in-memory table set in tests and in the default
//! deployment alike.

pub mod memory;

pub use memory::InMemoryHrStore;

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplicationStatus, Department, DepartmentDraft, DepartmentPatch, Employee, EmployeeDraft,
    EmployeePatch, JobApplication, JobApplicationDraft, JobApplicationPatch, JobPosting,
    JobPostingDraft, JobPostingPatch, LeaveDraft, LeavePatch, LeaveRequest, LeaveStatus,
};

/// Read model joining an employee to its department. `employee_id` is
/// recomputed on every read and shifts when earlier-created colleagues in
/// the same department are deleted; callers must not treat it as stable.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRecord {
    #[serde(flatten)]
    pub employee: Employee,
    pub department_name: String,
    pub employee_id: String,
    pub full_name: String,
}

/// Read model joining a leave request to its employee and department.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRecord {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub employee_name: String,
    pub employee_last_name: String,
    pub department_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobPostingRecord {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub department_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplicationRecord {
    #[serde(flatten)]
    pub application: JobApplication,
    pub job_title: String,
}

/// Optional, combinable employee list filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    /// Case-insensitive substring match against the department's name.
    pub department: Option<String>,
    /// Exact status label match; an unknown label matches nothing.
    pub status: Option<String>,
}

/// Counters for the dashboard endpoint, computed fresh per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub employees_on_leave: u64,
    pub pending_requests: u64,
    pub open_positions: u64,
    pub pending_applications: u64,
}

/// Field-keyed validation messages, serialized as `{"field": ["msg", ..]}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationError {
    #[serde(flatten)]
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ok when no messages were recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Storage-access interface for the five HR entities.
///
/// Deletes cascade toward the dependent side and are atomic relative to
/// the store: a department takes its employees and postings with it, and
/// those take their leave requests and applications.
pub trait HrStore: Send + Sync {
    fn create_department(&self, draft: DepartmentDraft) -> Result<Department, StoreError>;
    fn list_departments(&self) -> Result<Vec<Department>, StoreError>;
    fn get_department(&self, id: u64) -> Result<Department, StoreError>;
    fn replace_department(&self, id: u64, draft: DepartmentDraft)
        -> Result<Department, StoreError>;
    fn patch_department(&self, id: u64, patch: DepartmentPatch) -> Result<Department, StoreError>;
    fn delete_department(&self, id: u64) -> Result<(), StoreError>;

    fn create_employee(&self, draft: EmployeeDraft) -> Result<EmployeeRecord, StoreError>;
    fn list_employees(&self, filter: &EmployeeFilter) -> Result<Vec<EmployeeRecord>, StoreError>;
    fn get_employee(&self, id: u64) -> Result<EmployeeRecord, StoreError>;
    fn replace_employee(&self, id: u64, draft: EmployeeDraft)
        -> Result<EmployeeRecord, StoreError>;
    fn patch_employee(&self, id: u64, patch: EmployeePatch) -> Result<EmployeeRecord, StoreError>;
    fn delete_employee(&self, id: u64) -> Result<(), StoreError>;

    fn create_leave_request(&self, draft: LeaveDraft) -> Result<LeaveRecord, StoreError>;
    fn list_leave_requests(&self) -> Result<Vec<LeaveRecord>, StoreError>;
    fn get_leave_request(&self, id: u64) -> Result<LeaveRecord, StoreError>;
    fn replace_leave_request(&self, id: u64, draft: LeaveDraft) -> Result<LeaveRecord, StoreError>;
    fn patch_leave_request(&self, id: u64, patch: LeavePatch) -> Result<LeaveRecord, StoreError>;
    fn delete_leave_request(&self, id: u64) -> Result<(), StoreError>;
    /// Force a leave request to the given status, overwriting (not
    /// appending) `manager_comments`. No guard on the current status.
    fn resolve_leave_request(
        &self,
        id: u64,
        status: LeaveStatus,
        comments: String,
    ) -> Result<LeaveRecord, StoreError>;

    fn create_job_posting(&self, draft: JobPostingDraft) -> Result<JobPostingRecord, StoreError>;
    /// Lists active postings only; inactive ones stay reachable by id.
    fn list_job_postings(&self) -> Result<Vec<JobPostingRecord>, StoreError>;
    fn get_job_posting(&self, id: u64) -> Result<JobPostingRecord, StoreError>;
    fn replace_job_posting(
        &self,
        id: u64,
        draft: JobPostingDraft,
    ) -> Result<JobPostingRecord, StoreError>;
    fn patch_job_posting(
        &self,
        id: u64,
        patch: JobPostingPatch,
    ) -> Result<JobPostingRecord, StoreError>;
    fn delete_job_posting(&self, id: u64) -> Result<(), StoreError>;

    fn create_job_application(
        &self,
        draft: JobApplicationDraft,
    ) -> Result<JobApplicationRecord, StoreError>;
    fn list_job_applications(&self) -> Result<Vec<JobApplicationRecord>, StoreError>;
    fn get_job_application(&self, id: u64) -> Result<JobApplicationRecord, StoreError>;
    fn replace_job_application(
        &self,
        id: u64,
        draft: JobApplicationDraft,
    ) -> Result<JobApplicationRecord, StoreError>;
    fn patch_job_application(
        &self,
        id: u64,
        patch: JobApplicationPatch,
    ) -> Result<JobApplicationRecord, StoreError>;
    fn delete_job_application(&self, id: u64) -> Result<(), StoreError>;
    /// Force an application to the given status. No guard on the current
    /// status; `interview`/`hired` arrive through generic updates instead.
    fn set_application_status(
        &self,
        id: u64,
        status: ApplicationStatus,
    ) -> Result<JobApplicationRecord, StoreError>;

    fn dashboard_stats(&self, today: NaiveDate) -> Result<DashboardStats, StoreError>;
}
