use serde::{Deserialize, Serialize};

/// Half of a working day, used by half-leave entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HalfDayPeriod {
    Am,
    Pm,
}

impl HalfDayPeriod {
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "am" | "morning" => Some(Self::Am),
            "pm" | "afternoon" => Some(Self::Pm),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            HalfDayPeriod::Am => "am",
            HalfDayPeriod::Pm => "pm",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "am" => Some(HalfDayPeriod::Am),
            "pm" => Some(HalfDayPeriod::Pm),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HalfDayPeriod::Am => "AM",
            HalfDayPeriod::Pm => "PM",
        }
    }
}
