use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organizational unit owning employees and job postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub name: String,
    pub abbreviation: String,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted on create and full update. Department names are not
/// required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDraft {
    pub name: String,
    #[serde(default = "default_abbreviation")]
    pub abbreviation: String,
}

fn default_abbreviation() -> String {
    "DEPT".to_string()
}

/// Partial-update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_defaults_abbreviation() {
        let draft: DepartmentDraft =
            serde_json::from_str(r#"{"name": "Engineering"}"#).expect("draft parses");
        assert_eq!(draft.abbreviation, "DEPT");
    }

    #[test]
    fn patch_tolerates_empty_body() {
        let patch: DepartmentPatch = serde_json::from_str("{}").expect("patch parses");
        assert_eq!(patch, DepartmentPatch::default());
    }
}
