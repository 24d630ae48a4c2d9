use chrono::NaiveDate;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use matchday_backend::db::enums::CompetitionStatus;
use matchday_backend::db::models::{CreateCompetitionRequest, UpdateCompetitionRequest};
use matchday_backend::services::competitions_service::MAX_TEAMS_PER_COMPETITION;
use matchday_backend::validation::competition::{validate_name, validate_window};

#[test]
fn competition_name_rules() {
    assert!(validate_name("Sunday League").is_ok());
    assert!(validate_name("").is_err());
    assert!(validate_name("   ").is_err());
    assert!(validate_name(&"x".repeat(256)).is_err());
}

#[test]
fn competition_window_rules() {
    let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    assert!(validate_window(start, end).is_ok());
    assert!(validate_window(start, start).is_ok());
    assert!(validate_window(end, start).is_err());
}

#[test]
fn competition_status_parses_known_values_only() {
    assert_eq!(
        CompetitionStatus::from_str("scheduled").unwrap(),
        CompetitionStatus::Scheduled
    );
    assert_eq!(
        CompetitionStatus::from_str("canceled").unwrap(),
        CompetitionStatus::Canceled
    );
    assert_eq!(
        CompetitionStatus::from_str("finished").unwrap(),
        CompetitionStatus::Finished
    );
    assert!(CompetitionStatus::from_str("paused").is_err());
    assert!(CompetitionStatus::from_str("Scheduled").is_err());
}

#[test]
fn competition_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&CompetitionStatus::Scheduled).unwrap(),
        "\"scheduled\""
    );
    assert_eq!(
        serde_json::to_string(&CompetitionStatus::Finished).unwrap(),
        "\"finished\""
    );
}

#[test]
fn create_competition_request_rejects_blank_name() {
    let req = CreateCompetitionRequest {
        name: "".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
        status: None,
        logo_url: None,
        created_by: Uuid::new_v4(),
    };
    assert!(req.validate().is_err());

    let req = CreateCompetitionRequest {
        name: "Summer Cup".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 6, 6).unwrap(),
        status: Some("scheduled".to_string()),
        logo_url: None,
        created_by: Uuid::new_v4(),
    };
    assert!(req.validate().is_ok());
}

#[test]
fn update_competition_request_supports_empty_payloads() {
    let req = UpdateCompetitionRequest {
        name: None,
        start_date: None,
        end_date: None,
        status: None,
        logo_url: None,
    };
    assert!(req.validate().is_ok());
}

#[test]
fn enrollment_cap_is_twenty() {
    assert_eq!(MAX_TEAMS_PER_COMPETITION, 20);
}
