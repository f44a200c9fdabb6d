use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    Work,
    FullLeave,
    HalfLeave,
    Holiday,
}

impl EntryType {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "work" | "w" => Some(Self::Work),
            "full-leave" | "fullleave" | "fl" => Some(Self::FullLeave),
            "half-leave" | "halfleave" | "hl" => Some(Self::HalfLeave),
            "holiday" | "h" => Some(Self::Holiday),
            _ => None,
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::FullLeave => "full-leave",
            EntryType::HalfLeave => "half-leave",
            EntryType::Holiday => "holiday",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(EntryType::Work),
            "full-leave" => Some(EntryType::FullLeave),
            "half-leave" => Some(EntryType::HalfLeave),
            "holiday" => Some(EntryType::Holiday),
            _ => None,
        }
    }

    /// Human-readable label used in listings and CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Work => "Work",
            EntryType::FullLeave => "Full Leave",
            EntryType::HalfLeave => "Half Leave",
            EntryType::Holiday => "Holiday",
        }
    }

    /// Hours fixed by the entry type; `None` means user-supplied (work).
    pub fn fixed_hours(&self) -> Option<f64> {
        match self {
            EntryType::Work => None,
            EntryType::HalfLeave => Some(4.0),
            EntryType::FullLeave | EntryType::Holiday => Some(8.0),
        }
    }

    /// Full-day entries exclude every other entry on the same date.
    pub fn is_full_day(&self) -> bool {
        matches!(self, EntryType::FullLeave | EntryType::Holiday)
    }
}
