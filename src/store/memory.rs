//! Mutex-guarded table set backing the default deployment. Every trait
//! method takes the lock once, so multi-row effects (cascading deletes in
//! particular) are atomic relative to concurrent requests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};

use super::{
    DashboardStats, EmployeeFilter, EmployeeRecord, HrStore, JobApplicationRecord,
    JobPostingRecord, LeaveRecord, StoreError, ValidationError,
};
use crate::domain::{
    display_id, email_is_valid, ApplicationStatus, Department, DepartmentDraft, DepartmentPatch,
    Employee, EmployeeDraft, EmployeePatch, JobApplication, JobApplicationDraft,
    JobApplicationPatch, JobPosting, JobPostingDraft, JobPostingPatch, LeaveDraft, LeavePatch,
    LeaveRequest, LeaveStatus,
};

#[derive(Debug, Default)]
struct Tables {
    departments: BTreeMap<u64, Department>,
    employees: BTreeMap<u64, Employee>,
    leave_requests: BTreeMap<u64, LeaveRequest>,
    job_postings: BTreeMap<u64, JobPosting>,
    job_applications: BTreeMap<u64, JobApplication>,
    last_department_id: u64,
    last_employee_id: u64,
    last_leave_id: u64,
    last_posting_id: u64,
    last_application_id: u64,
}

impl Tables {
    fn employee_record(&self, employee: &Employee) -> EmployeeRecord {
        let (department_name, abbreviation) = self
            .departments
            .get(&employee.department_id)
            .map(|department| (department.name.clone(), department.abbreviation.clone()))
            .unwrap_or_default();
        // Rank is recomputed on every read; deleting an earlier colleague
        // silently shifts every later display id in the department.
        let rank = self
            .employees
            .values()
            .filter(|other| {
                other.department_id == employee.department_id && other.id <= employee.id
            })
            .count();

        EmployeeRecord {
            employee: employee.clone(),
            department_name,
            employee_id: display_id(&abbreviation, rank),
            full_name: employee.full_name(),
        }
    }

    fn leave_record(&self, request: &LeaveRequest) -> LeaveRecord {
        let employee = self.employees.get(&request.employee_id);
        let department_name = employee
            .and_then(|employee| self.departments.get(&employee.department_id))
            .map(|department| department.name.clone())
            .unwrap_or_default();

        LeaveRecord {
            request: request.clone(),
            employee_name: employee
                .map(|employee| employee.first_name.clone())
                .unwrap_or_default(),
            employee_last_name: employee
                .map(|employee| employee.last_name.clone())
                .unwrap_or_default(),
            department_name,
        }
    }

    fn posting_record(&self, posting: &JobPosting) -> JobPostingRecord {
        JobPostingRecord {
            posting: posting.clone(),
            department_name: self
                .departments
                .get(&posting.department_id)
                .map(|department| department.name.clone())
                .unwrap_or_default(),
        }
    }

    fn application_record(&self, application: &JobApplication) -> JobApplicationRecord {
        JobApplicationRecord {
            application: application.clone(),
            job_title: self
                .job_postings
                .get(&application.job_posting_id)
                .map(|posting| posting.title.clone())
                .unwrap_or_default(),
        }
    }

    /// `exclude` carries the record's own id on update so it does not
    /// collide with itself on the email uniqueness check.
    fn check_employee_draft(
        &self,
        draft: &EmployeeDraft,
        exclude: Option<u64>,
    ) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        if !email_is_valid(&draft.email) {
            errors.add("email", "enter a valid email address");
        } else if self
            .employees
            .values()
            .any(|other| other.email == draft.email && Some(other.id) != exclude)
        {
            errors.add("email", "employee with this email already exists");
        }

        if !self.departments.contains_key(&draft.department_id) {
            errors.add(
                "department",
                format!("unknown department id {}", draft.department_id),
            );
        }

        errors.into_result()
    }

    fn check_leave_draft(&self, draft: &LeaveDraft) -> Result<(), ValidationError> {
        if self.employees.contains_key(&draft.employee_id) {
            Ok(())
        } else {
            Err(ValidationError::single(
                "employee",
                format!("unknown employee id {}", draft.employee_id),
            ))
        }
    }

    fn check_posting_draft(&self, draft: &JobPostingDraft) -> Result<(), ValidationError> {
        if self.departments.contains_key(&draft.department_id) {
            Ok(())
        } else {
            Err(ValidationError::single(
                "department",
                format!("unknown department id {}", draft.department_id),
            ))
        }
    }

    fn check_application_draft(&self, draft: &JobApplicationDraft) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();

        if !email_is_valid(&draft.candidate_email) {
            errors.add("candidate_email", "enter a valid email address");
        }
        if !self.job_postings.contains_key(&draft.job_posting_id) {
            errors.add(
                "job_posting",
                format!("unknown job posting id {}", draft.job_posting_id),
            );
        }

        errors.into_result()
    }
}

/// In-process store; state lives for the lifetime of the service.
#[derive(Debug, Default)]
pub struct InMemoryHrStore {
    tables: Mutex<Tables>,
}

impl InMemoryHrStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("store mutex poisoned")
    }
}

impl HrStore for InMemoryHrStore {
    fn create_department(&self, draft: DepartmentDraft) -> Result<Department, StoreError> {
        let mut tables = self.lock();
        tables.last_department_id += 1;
        let department = Department {
            id: tables.last_department_id,
            name: draft.name,
            abbreviation: draft.abbreviation,
            created_at: Utc::now(),
        };
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let tables = self.lock();
        Ok(tables.departments.values().cloned().collect())
    }

    fn get_department(&self, id: u64) -> Result<Department, StoreError> {
        let tables = self.lock();
        tables.departments.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    fn replace_department(
        &self,
        id: u64,
        draft: DepartmentDraft,
    ) -> Result<Department, StoreError> {
        let mut tables = self.lock();
        let department = tables.departments.get_mut(&id).ok_or(StoreError::NotFound)?;
        department.name = draft.name;
        department.abbreviation = draft.abbreviation;
        Ok(department.clone())
    }

    fn patch_department(&self, id: u64, patch: DepartmentPatch) -> Result<Department, StoreError> {
        let mut tables = self.lock();
        let department = tables.departments.get_mut(&id).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            department.name = name;
        }
        if let Some(abbreviation) = patch.abbreviation {
            department.abbreviation = abbreviation;
        }
        Ok(department.clone())
    }

    fn delete_department(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if tables.departments.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }

        let employee_ids: Vec<u64> = tables
            .employees
            .values()
            .filter(|employee| employee.department_id == id)
            .map(|employee| employee.id)
            .collect();
        tables
            .employees
            .retain(|_, employee| employee.department_id != id);
        tables
            .leave_requests
            .retain(|_, request| !employee_ids.contains(&request.employee_id));

        let posting_ids: Vec<u64> = tables
            .job_postings
            .values()
            .filter(|posting| posting.department_id == id)
            .map(|posting| posting.id)
            .collect();
        tables
            .job_postings
            .retain(|_, posting| posting.department_id != id);
        tables
            .job_applications
            .retain(|_, application| !posting_ids.contains(&application.job_posting_id));

        Ok(())
    }

    fn create_employee(&self, draft: EmployeeDraft) -> Result<EmployeeRecord, StoreError> {
        let mut tables = self.lock();
        tables.check_employee_draft(&draft, None)?;

        tables.last_employee_id += 1;
        let now = Utc::now();
        let employee = Employee {
            id: tables.last_employee_id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            gender: draft.gender,
            date_of_birth: draft.date_of_birth,
            address: draft.address,
            role: draft.role,
            employment_type: draft.employment_type,
            department_id: draft.department_id,
            salary: draft.salary,
            hire_date: draft.hire_date,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        tables.employees.insert(employee.id, employee.clone());
        Ok(tables.employee_record(&employee))
    }

    fn list_employees(&self, filter: &EmployeeFilter) -> Result<Vec<EmployeeRecord>, StoreError> {
        let tables = self.lock();
        let needle = filter
            .department
            .as_ref()
            .map(|department| department.to_lowercase());

        let mut records: Vec<EmployeeRecord> = tables
            .employees
            .values()
            .map(|employee| tables.employee_record(employee))
            .filter(|record| {
                needle
                    .as_ref()
                    .map(|needle| record.department_name.to_lowercase().contains(needle))
                    .unwrap_or(true)
            })
            .filter(|record| {
                filter
                    .status
                    .as_deref()
                    .map(|status| record.employee.status.label() == status)
                    .unwrap_or(true)
            })
            .collect();

        records.sort_by(|a, b| {
            a.employee
                .first_name
                .cmp(&b.employee.first_name)
                .then_with(|| a.employee.last_name.cmp(&b.employee.last_name))
                .then_with(|| a.employee.id.cmp(&b.employee.id))
        });
        Ok(records)
    }

    fn get_employee(&self, id: u64) -> Result<EmployeeRecord, StoreError> {
        let tables = self.lock();
        let employee = tables.employees.get(&id).ok_or(StoreError::NotFound)?;
        Ok(tables.employee_record(employee))
    }

    fn replace_employee(
        &self,
        id: u64,
        draft: EmployeeDraft,
    ) -> Result<EmployeeRecord, StoreError> {
        let mut tables = self.lock();
        if !tables.employees.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.check_employee_draft(&draft, Some(id))?;

        let employee = tables
            .employees
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        employee.first_name = draft.first_name;
        employee.last_name = draft.last_name;
        employee.email = draft.email;
        employee.phone = draft.phone;
        employee.gender = draft.gender;
        employee.date_of_birth = draft.date_of_birth;
        employee.address = draft.address;
        employee.role = draft.role;
        employee.employment_type = draft.employment_type;
        employee.department_id = draft.department_id;
        employee.salary = draft.salary;
        employee.hire_date = draft.hire_date;
        employee.status = draft.status;
        employee.updated_at = Utc::now();

        let employee = employee.clone();
        Ok(tables.employee_record(&employee))
    }

    fn patch_employee(&self, id: u64, patch: EmployeePatch) -> Result<EmployeeRecord, StoreError> {
        let mut tables = self.lock();
        let mut updated = tables
            .employees
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        if let Some(first_name) = patch.first_name {
            updated.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            updated.last_name = last_name;
        }
        if let Some(email) = patch.email {
            updated.email = email;
        }
        if let Some(phone) = patch.phone {
            updated.phone = phone;
        }
        if let Some(gender) = patch.gender {
            updated.gender = gender;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            updated.date_of_birth = date_of_birth;
        }
        if let Some(address) = patch.address {
            updated.address = address;
        }
        if let Some(role) = patch.role {
            updated.role = role;
        }
        if let Some(employment_type) = patch.employment_type {
            updated.employment_type = employment_type;
        }
        if let Some(department_id) = patch.department_id {
            updated.department_id = department_id;
        }
        if let Some(salary) = patch.salary {
            updated.salary = salary;
        }
        if let Some(hire_date) = patch.hire_date {
            updated.hire_date = hire_date;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }

        let mut errors = ValidationError::new();
        if !email_is_valid(&updated.email) {
            errors.add("email", "enter a valid email address");
        } else if tables
            .employees
            .values()
            .any(|other| other.email == updated.email && other.id != id)
        {
            errors.add("email", "employee with this email already exists");
        }
        if !tables.departments.contains_key(&updated.department_id) {
            errors.add(
                "department",
                format!("unknown department id {}", updated.department_id),
            );
        }
        errors.into_result()?;

        updated.updated_at = Utc::now();
        tables.employees.insert(id, updated.clone());
        Ok(tables.employee_record(&updated))
    }

    fn delete_employee(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if tables.employees.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        tables
            .leave_requests
            .retain(|_, request| request.employee_id != id);
        Ok(())
    }

    fn create_leave_request(&self, draft: LeaveDraft) -> Result<LeaveRecord, StoreError> {
        let mut tables = self.lock();
        tables.check_leave_draft(&draft)?;

        tables.last_leave_id += 1;
        let now = Utc::now();
        let request = LeaveRequest {
            id: tables.last_leave_id,
            employee_id: draft.employee_id,
            leave_type: draft.leave_type,
            start_date: draft.start_date,
            end_date: draft.end_date,
            reason: draft.reason,
            status: draft.status,
            manager_comments: draft.manager_comments,
            created_at: now,
            updated_at: now,
        };
        tables.leave_requests.insert(request.id, request.clone());
        Ok(tables.leave_record(&request))
    }

    fn list_leave_requests(&self) -> Result<Vec<LeaveRecord>, StoreError> {
        let tables = self.lock();
        let mut records: Vec<LeaveRecord> = tables
            .leave_requests
            .values()
            .map(|request| tables.leave_record(request))
            .collect();
        // Newest first; ids break ties for requests created in the same instant.
        records.sort_by(|a, b| {
            b.request
                .created_at
                .cmp(&a.request.created_at)
                .then_with(|| b.request.id.cmp(&a.request.id))
        });
        Ok(records)
    }

    fn get_leave_request(&self, id: u64) -> Result<LeaveRecord, StoreError> {
        let tables = self.lock();
        let request = tables.leave_requests.get(&id).ok_or(StoreError::NotFound)?;
        Ok(tables.leave_record(request))
    }

    fn replace_leave_request(&self, id: u64, draft: LeaveDraft) -> Result<LeaveRecord, StoreError> {
        let mut tables = self.lock();
        if !tables.leave_requests.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.check_leave_draft(&draft)?;

        let request = tables
            .leave_requests
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        request.employee_id = draft.employee_id;
        request.leave_type = draft.leave_type;
        request.start_date = draft.start_date;
        request.end_date = draft.end_date;
        request.reason = draft.reason;
        request.status = draft.status;
        request.manager_comments = draft.manager_comments;
        request.updated_at = Utc::now();

        let request = request.clone();
        Ok(tables.leave_record(&request))
    }

    fn patch_leave_request(&self, id: u64, patch: LeavePatch) -> Result<LeaveRecord, StoreError> {
        let mut tables = self.lock();
        let mut updated = tables
            .leave_requests
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        if let Some(employee_id) = patch.employee_id {
            if !tables.employees.contains_key(&employee_id) {
                return Err(ValidationError::single(
                    "employee",
                    format!("unknown employee id {employee_id}"),
                )
                .into());
            }
            updated.employee_id = employee_id;
        }
        if let Some(leave_type) = patch.leave_type {
            updated.leave_type = leave_type;
        }
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            updated.end_date = end_date;
        }
        if let Some(reason) = patch.reason {
            updated.reason = reason;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(manager_comments) = patch.manager_comments {
            updated.manager_comments = manager_comments;
        }
        updated.updated_at = Utc::now();

        tables.leave_requests.insert(id, updated.clone());
        Ok(tables.leave_record(&updated))
    }

    fn delete_leave_request(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if tables.leave_requests.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn resolve_leave_request(
        &self,
        id: u64,
        status: LeaveStatus,
        comments: String,
    ) -> Result<LeaveRecord, StoreError> {
        let mut tables = self.lock();
        let request = tables
            .leave_requests
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        request.status = status;
        request.manager_comments = comments;
        request.updated_at = Utc::now();

        let request = request.clone();
        Ok(tables.leave_record(&request))
    }

    fn create_job_posting(&self, draft: JobPostingDraft) -> Result<JobPostingRecord, StoreError> {
        let mut tables = self.lock();
        tables.check_posting_draft(&draft)?;

        tables.last_posting_id += 1;
        let posting = JobPosting {
            id: tables.last_posting_id,
            title: draft.title,
            department_id: draft.department_id,
            description: draft.description,
            requirements: draft.requirements,
            salary_min: draft.salary_min,
            salary_max: draft.salary_max,
            is_active: draft.is_active,
            created_at: Utc::now(),
        };
        tables.job_postings.insert(posting.id, posting.clone());
        Ok(tables.posting_record(&posting))
    }

    fn list_job_postings(&self) -> Result<Vec<JobPostingRecord>, StoreError> {
        let tables = self.lock();
        let mut records: Vec<JobPostingRecord> = tables
            .job_postings
            .values()
            .filter(|posting| posting.is_active)
            .map(|posting| tables.posting_record(posting))
            .collect();
        records.sort_by(|a, b| {
            b.posting
                .created_at
                .cmp(&a.posting.created_at)
                .then_with(|| b.posting.id.cmp(&a.posting.id))
        });
        Ok(records)
    }

    fn get_job_posting(&self, id: u64) -> Result<JobPostingRecord, StoreError> {
        let tables = self.lock();
        let posting = tables.job_postings.get(&id).ok_or(StoreError::NotFound)?;
        Ok(tables.posting_record(posting))
    }

    fn replace_job_posting(
        &self,
        id: u64,
        draft: JobPostingDraft,
    ) -> Result<JobPostingRecord, StoreError> {
        let mut tables = self.lock();
        if !tables.job_postings.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.check_posting_draft(&draft)?;

        let posting = tables
            .job_postings
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        posting.title = draft.title;
        posting.department_id = draft.department_id;
        posting.description = draft.description;
        posting.requirements = draft.requirements;
        posting.salary_min = draft.salary_min;
        posting.salary_max = draft.salary_max;
        posting.is_active = draft.is_active;

        let posting = posting.clone();
        Ok(tables.posting_record(&posting))
    }

    fn patch_job_posting(
        &self,
        id: u64,
        patch: JobPostingPatch,
    ) -> Result<JobPostingRecord, StoreError> {
        let mut tables = self.lock();
        let mut updated = tables
            .job_postings
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        if let Some(department_id) = patch.department_id {
            if !tables.departments.contains_key(&department_id) {
                return Err(ValidationError::single(
                    "department",
                    format!("unknown department id {department_id}"),
                )
                .into());
            }
            updated.department_id = department_id;
        }
        if let Some(title) = patch.title {
            updated.title = title;
        }
        if let Some(description) = patch.description {
            updated.description = description;
        }
        if let Some(requirements) = patch.requirements {
            updated.requirements = requirements;
        }
        if let Some(salary_min) = patch.salary_min {
            updated.salary_min = salary_min;
        }
        if let Some(salary_max) = patch.salary_max {
            updated.salary_max = salary_max;
        }
        if let Some(is_active) = patch.is_active {
            updated.is_active = is_active;
        }

        tables.job_postings.insert(id, updated.clone());
        Ok(tables.posting_record(&updated))
    }

    fn delete_job_posting(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if tables.job_postings.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        tables
            .job_applications
            .retain(|_, application| application.job_posting_id != id);
        Ok(())
    }

    fn create_job_application(
        &self,
        draft: JobApplicationDraft,
    ) -> Result<JobApplicationRecord, StoreError> {
        let mut tables = self.lock();
        tables.check_application_draft(&draft)?;

        tables.last_application_id += 1;
        let now = Utc::now();
        let application = JobApplication {
            id: tables.last_application_id,
            job_posting_id: draft.job_posting_id,
            candidate_name: draft.candidate_name,
            candidate_email: draft.candidate_email,
            candidate_phone: draft.candidate_phone,
            resume_url: draft.resume_url,
            cover_letter: draft.cover_letter,
            status: draft.status,
            rating: draft.rating,
            created_at: now,
            updated_at: now,
        };
        tables
            .job_applications
            .insert(application.id, application.clone());
        Ok(tables.application_record(&application))
    }

    fn list_job_applications(&self) -> Result<Vec<JobApplicationRecord>, StoreError> {
        let tables = self.lock();
        let mut records: Vec<JobApplicationRecord> = tables
            .job_applications
            .values()
            .map(|application| tables.application_record(application))
            .collect();
        records.sort_by(|a, b| {
            b.application
                .created_at
                .cmp(&a.application.created_at)
                .then_with(|| b.application.id.cmp(&a.application.id))
        });
        Ok(records)
    }

    fn get_job_application(&self, id: u64) -> Result<JobApplicationRecord, StoreError> {
        let tables = self.lock();
        let application = tables
            .job_applications
            .get(&id)
            .ok_or(StoreError::NotFound)?;
        Ok(tables.application_record(application))
    }

    fn replace_job_application(
        &self,
        id: u64,
        draft: JobApplicationDraft,
    ) -> Result<JobApplicationRecord, StoreError> {
        let mut tables = self.lock();
        if !tables.job_applications.contains_key(&id) {
            return Err(StoreError::NotFound);
        }
        tables.check_application_draft(&draft)?;

        let application = tables
            .job_applications
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        application.job_posting_id = draft.job_posting_id;
        application.candidate_name = draft.candidate_name;
        application.candidate_email = draft.candidate_email;
        application.candidate_phone = draft.candidate_phone;
        application.resume_url = draft.resume_url;
        application.cover_letter = draft.cover_letter;
        application.status = draft.status;
        application.rating = draft.rating;
        application.updated_at = Utc::now();

        let application = application.clone();
        Ok(tables.application_record(&application))
    }

    fn patch_job_application(
        &self,
        id: u64,
        patch: JobApplicationPatch,
    ) -> Result<JobApplicationRecord, StoreError> {
        let mut tables = self.lock();
        let mut updated = tables
            .job_applications
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)?;

        if let Some(job_posting_id) = patch.job_posting_id {
            if !tables.job_postings.contains_key(&job_posting_id) {
                return Err(ValidationError::single(
                    "job_posting",
                    format!("unknown job posting id {job_posting_id}"),
                )
                .into());
            }
            updated.job_posting_id = job_posting_id;
        }
        if let Some(candidate_name) = patch.candidate_name {
            updated.candidate_name = candidate_name;
        }
        if let Some(candidate_email) = patch.candidate_email {
            if !email_is_valid(&candidate_email) {
                return Err(
                    ValidationError::single("candidate_email", "enter a valid email address")
                        .into(),
                );
            }
            updated.candidate_email = candidate_email;
        }
        if let Some(candidate_phone) = patch.candidate_phone {
            updated.candidate_phone = candidate_phone;
        }
        if let Some(resume_url) = patch.resume_url {
            updated.resume_url = resume_url;
        }
        if let Some(cover_letter) = patch.cover_letter {
            updated.cover_letter = cover_letter;
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(rating) = patch.rating {
            updated.rating = rating;
        }
        updated.updated_at = Utc::now();

        tables.job_applications.insert(id, updated.clone());
        Ok(tables.application_record(&updated))
    }

    fn delete_job_application(&self, id: u64) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if tables.job_applications.remove(&id).is_none() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    fn set_application_status(
        &self,
        id: u64,
        status: ApplicationStatus,
    ) -> Result<JobApplicationRecord, StoreError> {
        let mut tables = self.lock();
        let application = tables
            .job_applications
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        application.status = status;
        application.updated_at = Utc::now();

        let application = application.clone();
        Ok(tables.application_record(&application))
    }

    fn dashboard_stats(&self, today: NaiveDate) -> Result<DashboardStats, StoreError> {
        let tables = self.lock();
        Ok(DashboardStats {
            employees_on_leave: tables
                .leave_requests
                .values()
                .filter(|request| request.covers(today))
                .count() as u64,
            pending_requests: tables
                .leave_requests
                .values()
                .filter(|request| request.status == LeaveStatus::Pending)
                .count() as u64,
            open_positions: tables
                .job_postings
                .values()
                .filter(|posting| posting.is_active)
                .count() as u64,
            pending_applications: tables
                .job_applications
                .values()
                .filter(|application| application.status == ApplicationStatus::Pending)
                .count() as u64,
        })
    }
}
