use uuid::Uuid;
use validator::Validate;

use matchday_backend::db::models::{CreateTeamRequest, UpdateTeamRequest};
use matchday_backend::services::teams_service::DEFAULT_TEAM_LOGO;
use matchday_backend::validation::team::{validate_name, validate_short_name};

#[test]
fn team_name_rules() {
    assert!(validate_name("Atletico Sunday").is_ok());
    assert!(validate_name("").is_err());
    assert!(validate_name("   ").is_err());
    assert!(validate_name(&"x".repeat(256)).is_err());
}

#[test]
fn team_short_name_rules() {
    assert!(validate_short_name("ATS").is_ok());
    assert!(validate_short_name("A").is_ok());
    assert!(validate_short_name("").is_err());
    assert!(validate_short_name("  ").is_err());
    assert!(validate_short_name("ELEVENCHARS").is_err());
}

#[test]
fn create_team_request_validator_rules() {
    let req = CreateTeamRequest {
        name: "Atletico Sunday".to_string(),
        short_name: "ATS".to_string(),
        logo_url: None,
        is_custom: Some(true),
        created_by: Uuid::new_v4(),
    };
    assert!(req.validate().is_ok());

    let req = CreateTeamRequest {
        name: "Atletico Sunday".to_string(),
        short_name: "WAYTOOLONG1".to_string(),
        logo_url: None,
        is_custom: None,
        created_by: Uuid::new_v4(),
    };
    assert!(req.validate().is_err());
}

#[test]
fn update_team_request_supports_empty_payloads() {
    let req = UpdateTeamRequest {
        name: None,
        short_name: None,
        logo_url: None,
    };
    assert!(req.validate().is_ok());
}

#[test]
fn default_logo_points_at_a_https_image() {
    assert!(DEFAULT_TEAM_LOGO.starts_with("https://"));
    assert!(DEFAULT_TEAM_LOGO.contains("default-team-logo"));
}
