//! Persisted entity types for the HR domain, plus the draft/patch payloads
//! accepted on create and update. Records are plain data; relationships are
//! numeric foreign keys resolved by the store.

pub mod department;
pub mod employee;
pub mod leave;
pub mod recruitment;

pub use department::{Department, DepartmentDraft, DepartmentPatch};
pub use employee::{
    display_id, Employee, EmployeeDraft, EmployeePatch, EmployeeStatus, EmploymentType, Gender,
};
pub use leave::{LeaveDraft, LeavePatch, LeaveRequest, LeaveStatus, LeaveType};
pub use recruitment::{
    ApplicationStatus, JobApplication, JobApplicationDraft, JobApplicationPatch, JobPosting,
    JobPostingDraft, JobPostingPatch,
};

/// Lightweight email shape check: one `@`, a non-empty local part, and a
/// dotted domain. Deliberately permissive beyond that.
pub fn email_is_valid(raw: &str) -> bool {
    let mut parts = raw.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || raw.contains(char::is_whitespace)
    {
        return false;
    }

    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
