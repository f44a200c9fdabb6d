//! Versioned JSON backup envelope:
//! `{version, exportDate, workLogData, projectData, metadata}`.
//! `workLogData` maps each date key to its ordered entry list, mirroring the
//! date-bucket ownership of the live data model.

use crate::errors::{AppError, AppResult};
use crate::models::entry::WorkEntry;
use crate::models::project::Project;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub const BACKUP_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEnvelope {
    pub version: u32,
    pub export_date: String,
    pub work_log_data: BTreeMap<String, Vec<WorkEntry>>,
    pub project_data: Vec<Project>,
    pub metadata: BackupMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMetadata {
    pub entry_count: usize,
    pub project_count: usize,
}

impl BackupEnvelope {
    pub fn build(entries: Vec<WorkEntry>, projects: Vec<Project>) -> Self {
        let entry_count = entries.len();

        let mut work_log_data: BTreeMap<String, Vec<WorkEntry>> = BTreeMap::new();
        for entry in entries {
            work_log_data.entry(entry.date_str()).or_default().push(entry);
        }

        Self {
            version: BACKUP_VERSION,
            export_date: Local::now().to_rfc3339(),
            metadata: BackupMetadata {
                entry_count,
                project_count: projects.len(),
            },
            work_log_data,
            project_data: projects,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &WorkEntry> {
        self.work_log_data.values().flatten()
    }

    pub fn write(&self, path: &Path) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Export(format!("serialize backup: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn read(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let envelope: BackupEnvelope = serde_json::from_str(&content)
            .map_err(|e| AppError::Import(format!("parse backup: {e}")))?;

        if envelope.version != BACKUP_VERSION {
            return Err(AppError::BackupVersion(envelope.version));
        }
        Ok(envelope)
    }
}
