use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An advertised opening. Closing a posting is done by flipping
/// `is_active` through a generic update; there is no dedicated endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u64,
    pub title: String,
    #[serde(rename = "department")]
    pub department_id: u64,
    pub description: String,
    pub requirements: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingDraft {
    pub title: String,
    #[serde(rename = "department")]
    pub department_id: u64,
    pub description: String,
    pub requirements: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPostingPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "department")]
    pub department_id: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default, with = "super::employee::double_option")]
    pub salary_min: Option<Option<f64>>,
    #[serde(default, with = "super::employee::double_option")]
    pub salary_max: Option<Option<f64>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Shortlisted,
    Interview,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Hired => "hired",
        }
    }
}

/// A candidate's application against a posting. `rating` is advisory
/// (0-5 intended) and not range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: u64,
    #[serde(rename = "job_posting")]
    pub job_posting_id: u64,
    pub candidate_name: String,
    pub candidate_email: String,
    pub candidate_phone: String,
    pub resume_url: String,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationDraft {
    #[serde(rename = "job_posting")]
    pub job_posting_id: u64,
    pub candidate_name: String,
    pub candidate_email: String,
    #[serde(default)]
    pub candidate_phone: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobApplicationPatch {
    #[serde(default, rename = "job_posting")]
    pub job_posting_id: Option<u64>,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub candidate_phone: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub cover_letter: Option<String>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posting_draft_defaults_to_active() {
        let draft: JobPostingDraft = serde_json::from_str(
            r#"{"title": "Backend Engineer", "department": 1,
                "description": "Build services", "requirements": "Rust"}"#,
        )
        .expect("draft parses");
        assert!(draft.is_active);
        assert_eq!(draft.salary_min, None);
    }

    #[test]
    fn application_draft_defaults_status_and_rating() {
        let draft: JobApplicationDraft = serde_json::from_str(
            r#"{"job_posting": 1, "candidate_name": "Sam Okafor",
                "candidate_email": "sam@example.com"}"#,
        )
        .expect("draft parses");
        assert_eq!(draft.status, ApplicationStatus::Pending);
        assert_eq!(draft.rating, 0);
    }

    #[test]
    fn status_labels_round_trip() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Shortlisted,
            ApplicationStatus::Interview,
            ApplicationStatus::Rejected,
            ApplicationStatus::Hired,
        ] {
            let json = serde_json::to_string(&status).expect("serializes");
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }
}
