use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use matchday_backend::services::fixtures::{
    competition_dates, kickoff_slots, round_robin_pairs, SlotPlanner,
};

fn team_ids(n: u128) -> Vec<Uuid> {
    (1..=n).map(Uuid::from_u128).collect()
}

#[test]
fn every_team_plays_every_opponent_home_and_away() {
    let teams = team_ids(4);
    let fixtures = round_robin_pairs(&teams);
    assert_eq!(fixtures.len(), 12);

    let mut appearances: HashMap<Uuid, usize> = HashMap::new();
    for fixture in &fixtures {
        *appearances.entry(fixture.home).or_default() += 1;
        *appearances.entry(fixture.away).or_default() += 1;
    }
    for team in &teams {
        assert_eq!(appearances[team], 6);
    }
}

#[test]
fn no_fixture_is_repeated() {
    let fixtures = round_robin_pairs(&team_ids(5));
    let mut seen = HashSet::new();
    for fixture in fixtures {
        assert_ne!(fixture.home, fixture.away);
        assert!(seen.insert((fixture.home, fixture.away)));
    }
}

#[test]
fn placements_stay_inside_the_window() {
    let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 6, 12).unwrap();
    let mut planner = SlotPlanner::new(start, end, vec![Uuid::from_u128(50)], []);

    for fixture in round_robin_pairs(&team_ids(3)) {
        let placed = planner.place(fixture).expect("window has room");
        let date = placed.kickoff.date();
        assert!(date >= start && date <= end);
    }
}

#[test]
fn slot_catalog_runs_from_morning_to_evening() {
    let slots = kickoff_slots();
    assert_eq!(slots.len(), 13);
    assert_eq!(slots.first().map(|t| t.to_string()), Some("08:30:00".to_string()));
    assert_eq!(slots.last().map(|t| t.to_string()), Some("20:30:00".to_string()));
}

#[test]
fn single_day_window_has_one_date() {
    let day = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    assert_eq!(competition_dates(day, day), vec![day]);
}
