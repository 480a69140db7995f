use crate::dates::validate_date_range;
use crate::{Result, SharedError};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

static STATE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2}$").unwrap());

fn validate_state_code(state: &str) -> std::result::Result<(), ValidationError> {
    if STATE_CODE.is_match(state) {
        Ok(())
    } else {
        Err(ValidationError::new("state_code"))
    }
}

/// Lifecycle status of a tournament listing.
///
/// There is no transition function: the status is set directly at
/// creation/edit time by the organizing club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentStatus {
    Open,
    Closed,
    InProgress,
    Completed,
}

impl TournamentStatus {
    /// All statuses, in the order they appear in filter controls.
    pub fn all() -> [TournamentStatus; 4] {
        [
            TournamentStatus::Open,
            TournamentStatus::Closed,
            TournamentStatus::InProgress,
            TournamentStatus::Completed,
        ]
    }

    /// Wire/storage form (kebab-case), also used as the value of
    /// `<option>` elements.
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "open",
            TournamentStatus::Closed => "closed",
            TournamentStatus::InProgress => "in-progress",
            TournamentStatus::Completed => "completed",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "Open",
            TournamentStatus::Closed => "Closed",
            TournamentStatus::InProgress => "In progress",
            TournamentStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "open" => Ok(TournamentStatus::Open),
            "closed" => Ok(TournamentStatus::Closed),
            "in-progress" => Ok(TournamentStatus::InProgress),
            "completed" => Ok(TournamentStatus::Completed),
            other => Err(SharedError::Conversion(format!(
                "unknown tournament status: {other}"
            ))),
        }
    }
}

/// Where a tournament takes place. Denormalized display strings, not
/// foreign keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Location {
    #[validate(length(min = 1, max = 120, message = "City must be between 1 and 120 characters"))]
    pub city: String,

    /// Two-letter uppercase state code (e.g. "SP").
    #[validate(custom = "validate_state_code")]
    pub state: String,
}

/// One derived entry of the per-day schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    /// Editable label, defaults to "Day N".
    pub label: String,
    pub start_time: NaiveTime,
}

/// Generates one schedule entry per calendar day in `[start, end]`.
///
/// Deterministic: same range, same output. Labels default to "Day 1".."Day N"
/// and matches start at 09:00; both are editable afterwards in the wizard.
pub fn derive_schedule(start: NaiveDate, end: NaiveDate) -> Result<Vec<ScheduleDay>> {
    validate_date_range(start, end)?;
    let default_start = NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time");
    let days = start
        .iter_days()
        .take_while(|d| *d <= end)
        .enumerate()
        .map(|(i, date)| ScheduleDay {
            date,
            label: format!("Day {}", i + 1),
            start_time: default_start,
        })
        .collect();
    Ok(days)
}

/// A tournament listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Tournament {
    /// Unique identifier within the store (uuid v4 at creation).
    pub id: String,

    /// Display name of the tournament
    #[validate(length(
        min = 1,
        max = 200,
        message = "Name must be between 1 and 200 characters"
    ))]
    pub name: String,

    /// Organizing-club display name (denormalized)
    #[validate(length(min = 1, max = 200, message = "Club must be between 1 and 200 characters"))]
    pub club: String,

    #[validate]
    pub location: Location,

    /// First day of play (UTC calendar date)
    pub start_date: NaiveDate,

    /// Last day of play, inclusive (UTC calendar date)
    pub end_date: NaiveDate,

    pub status: TournamentStatus,

    /// Informational only; not derived from a registrant list.
    pub participants_count: u32,

    /// Per-day schedule derived from the date range by the creation wizard.
    #[serde(default)]
    pub schedule: Vec<ScheduleDay>,

    /// Id of the user who created this tournament
    pub created_by: String,

    /// When this tournament was created (UTC)
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Validates the tournament data, including the date-range ordering.
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))?;
        validate_date_range(self.start_date, self.end_date)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn create_test_tournament() -> Tournament {
        Tournament {
            id: "t-1".to_string(),
            name: "Copa Paulista Sub-17".to_string(),
            club: "AC Ipiranga".to_string(),
            location: Location {
                city: "Sao Paulo".to_string(),
                state: "SP".to_string(),
            },
            start_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
            status: TournamentStatus::Open,
            participants_count: 24,
            schedule: Vec::new(),
            created_by: "user-1".to_string(),
            created_at: "2024-01-10T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_tournament_validation_success() {
        assert!(create_test_tournament().validate_fields().is_ok());
    }

    #[test]
    fn test_tournament_validation_empty_name() {
        let mut tournament = create_test_tournament();
        tournament.name = String::new();
        let result = tournament.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().field_errors().contains_key("name"));
    }

    #[test]
    fn test_tournament_validation_bad_state_code() {
        let mut tournament = create_test_tournament();
        tournament.location.state = "Sao Paulo".to_string();
        assert!(tournament.validate_fields().is_err());

        tournament.location.state = "sp".to_string();
        assert!(tournament.validate_fields().is_err());

        tournament.location.state = "SP".to_string();
        assert!(tournament.validate_fields().is_ok());
    }

    #[test]
    fn test_tournament_validation_inverted_date_range() {
        let mut tournament = create_test_tournament();
        tournament.end_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(matches!(
            tournament.validate_fields(),
            Err(SharedError::InvalidDateRange { .. })
        ));
    }

    #[test]
    fn test_tournament_serialization_round_trip() {
        let tournament = create_test_tournament();
        let json = serde_json::to_string(&tournament).unwrap();
        let deserialized: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(tournament, deserialized);
    }

    #[test]
    fn test_status_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&TournamentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let parsed: TournamentStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, TournamentStatus::InProgress);
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!("cancelled".parse::<TournamentStatus>().is_err());
        assert_eq!(
            "open".parse::<TournamentStatus>().unwrap(),
            TournamentStatus::Open
        );
    }

    #[test]
    fn test_missing_schedule_defaults_to_empty() {
        // Records stored before the wizard added schedules have no field.
        let json = r#"{
            "id": "t-9",
            "name": "Torneio de Verao",
            "club": "EC Santos",
            "location": {"city": "Santos", "state": "SP"},
            "start_date": "2024-02-01",
            "end_date": "2024-02-01",
            "status": "completed",
            "participants_count": 8,
            "created_by": "user-2",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let tournament: Tournament = serde_json::from_str(json).unwrap();
        assert!(tournament.schedule.is_empty());
        assert!(tournament.validate_fields().is_ok());
    }

    #[test]
    fn test_derive_schedule_one_entry_per_day() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let schedule = derive_schedule(start, end).unwrap();
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].label, "Day 1");
        assert_eq!(schedule[2].label, "Day 3");
        assert_eq!(schedule[0].date, start);
        assert_eq!(schedule[2].date, end);
    }

    #[test]
    fn test_derive_schedule_single_day() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let schedule = derive_schedule(day, day).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].label, "Day 1");
    }

    #[test]
    fn test_derive_schedule_rejects_inverted_range() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(derive_schedule(start, end).is_err());
    }
}
