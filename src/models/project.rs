use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project entries can be booked against.
///
/// Unique key = `(project_id, sub_code)`, rendered as "P100-01".
/// `usage_count` tracks how many entries reference the project; a referenced
/// project cannot be deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_id: String,
    pub sub_code: String,
    pub project_title: String,
    pub category: String,
    pub is_active: bool,
    pub usage_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Project {
    pub fn new(project_id: String, sub_code: String, project_title: String, category: String) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            project_id,
            sub_code,
            project_title,
            category,
            is_active: true,
            usage_count: 0,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Composite key as entries reference it ("P100-01").
    pub fn key(&self) -> String {
        format!("{}-{}", self.project_id, self.sub_code)
    }

    /// Split a composite key back into `(project_id, sub_code)`.
    /// The sub code is the part after the LAST dash, so project ids may
    /// themselves contain dashes.
    pub fn split_key(key: &str) -> Option<(&str, &str)> {
        let idx = key.rfind('-')?;
        let (pid, sub) = (&key[..idx], &key[idx + 1..]);
        if pid.is_empty() || sub.is_empty() {
            return None;
        }
        Some((pid, sub))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trip() {
        let p = Project::new("P100".into(), "01".into(), "Platform".into(), "Dev".into());
        assert_eq!(p.key(), "P100-01");
        assert_eq!(Project::split_key("P100-01"), Some(("P100", "01")));
    }

    #[test]
    fn split_key_uses_last_dash() {
        assert_eq!(Project::split_key("ACME-CORE-02"), Some(("ACME-CORE", "02")));
        assert_eq!(Project::split_key("nodash"), None);
        assert_eq!(Project::split_key("-01"), None);
    }
}
