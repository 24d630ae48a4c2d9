use chrono::NaiveDate;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use matchday_backend::db::enums::{MatchStatus, PitchStatus};
use matchday_backend::db::models::{CreateMatchRequest, UpdateMatchScoreRequest};

#[test]
fn match_status_parses_known_values_only() {
    assert_eq!(
        MatchStatus::from_str("scheduled").unwrap(),
        MatchStatus::Scheduled
    );
    assert_eq!(
        MatchStatus::from_str("completed").unwrap(),
        MatchStatus::Completed
    );
    assert_eq!(
        MatchStatus::from_str("canceled").unwrap(),
        MatchStatus::Canceled
    );
    assert!(MatchStatus::from_str("postponed").is_err());
    assert!(MatchStatus::from_str("COMPLETED").is_err());
}

#[test]
fn statuses_serialize_lowercase() {
    assert_eq!(
        serde_json::to_string(&MatchStatus::Completed).unwrap(),
        "\"completed\""
    );
    assert_eq!(
        serde_json::to_string(&PitchStatus::Active).unwrap(),
        "\"active\""
    );
}

#[test]
fn score_request_rejects_negative_values() {
    let req = UpdateMatchScoreRequest {
        team_a_score: 2,
        team_b_score: 1,
    };
    assert!(req.validate().is_ok());

    let req = UpdateMatchScoreRequest {
        team_a_score: -1,
        team_b_score: 0,
    };
    assert!(req.validate().is_err());
}

#[test]
fn create_match_request_accepts_a_complete_payload() {
    let req = CreateMatchRequest {
        team_a_id: Uuid::new_v4(),
        team_b_id: Uuid::new_v4(),
        pitch_id: Uuid::new_v4(),
        date_time: NaiveDate::from_ymd_opt(2026, 7, 4)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap(),
        created_by: Uuid::new_v4(),
    };
    assert!(req.validate().is_ok());
}
