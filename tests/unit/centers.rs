use chrono::Utc;
use uuid::Uuid;

use matchday_backend::db::enums::PitchStatus;
use matchday_backend::db::models::{Center, Pitch};
use matchday_backend::services::centers_service::group_center_rows;

fn center(name: &str) -> Center {
    Center {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: None,
        created_at: Utc::now(),
    }
}

fn pitch(center: &Center) -> Pitch {
    Pitch {
        id: Uuid::new_v4(),
        center_id: center.id,
        kind: "futbol7".to_string(),
        surface: Some("artificial".to_string()),
        status: PitchStatus::Active,
        created_at: Utc::now(),
    }
}

#[test]
fn centers_sharing_a_name_keep_their_own_pitches() {
    let first = center("Ciudad Deportiva");
    let second = center("Ciudad Deportiva");
    let p1 = pitch(&first);
    let p2 = pitch(&first);
    let p3 = pitch(&second);

    // Rows ordered by name alone can interleave the two centers.
    let rows = vec![
        (first.clone(), Some(p1.clone())),
        (second.clone(), Some(p3.clone())),
        (first.clone(), Some(p2.clone())),
    ];

    let grouped = group_center_rows(rows);
    assert_eq!(grouped.len(), 2);

    let of_first = grouped.iter().find(|c| c.id == first.id).unwrap();
    let pitch_ids: Vec<Uuid> = of_first.pitches.iter().map(|p| p.id).collect();
    assert_eq!(pitch_ids, vec![p1.id, p2.id]);

    let of_second = grouped.iter().find(|c| c.id == second.id).unwrap();
    assert_eq!(of_second.pitches.len(), 1);
    assert_eq!(of_second.pitches[0].id, p3.id);
}

#[test]
fn centers_without_pitches_appear_with_an_empty_list() {
    let lone = center("Polideportivo Norte");

    let grouped = group_center_rows(vec![(lone.clone(), None)]);

    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[0].id, lone.id);
    assert_eq!(grouped[0].name, "Polideportivo Norte");
    assert!(grouped[0].pitches.is_empty());
}
