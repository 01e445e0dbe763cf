use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

/// A request for time off. No ordering constraint between `start_date` and
/// `end_date` is enforced, and overlapping requests are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: u64,
    #[serde(rename = "employee")]
    pub employee_id: u64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub manager_comments: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Whether an approved request covers the given day.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.status == LeaveStatus::Approved && self.start_date <= day && self.end_date >= day
    }
}

/// Payload accepted on create and full update. Status is writable so the
/// generic update path can force any state, matching the transition rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveDraft {
    #[serde(rename = "employee")]
    pub employee_id: u64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    #[serde(default)]
    pub manager_comments: String,
}

/// Partial-update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeavePatch {
    #[serde(default, rename = "employee")]
    pub employee_id: Option<u64>,
    #[serde(default)]
    pub leave_type: Option<LeaveType>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<LeaveStatus>,
    #[serde(default)]
    pub manager_comments: Option<String>,
}
