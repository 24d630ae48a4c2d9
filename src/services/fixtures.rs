use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

/// One leg of a double round-robin: `home` hosts `away`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixturePair {
    pub home: Uuid,
    pub away: Uuid,
}

/// Both legs for every unordered pair of teams, in enrollment order: for
/// each `i < j`, team `i` hosts team `j` first and the return leg follows
/// immediately. A list of `n` teams yields `n * (n - 1)` fixtures.
pub fn round_robin_pairs(team_ids: &[Uuid]) -> Vec<FixturePair> {
    let mut fixtures =
        Vec::with_capacity(team_ids.len() * team_ids.len().saturating_sub(1));
    for i in 0..team_ids.len() {
        for j in (i + 1)..team_ids.len() {
            fixtures.push(FixturePair {
                home: team_ids[i],
                away: team_ids[j],
            });
            fixtures.push(FixturePair {
                home: team_ids[j],
                away: team_ids[i],
            });
        }
    }
    fixtures
}

/// Hourly kick-off times, 08:30 through 20:30.
pub fn kickoff_slots() -> Vec<NaiveTime> {
    (8..=20)
        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 30, 0))
        .collect()
}

/// Every playable date of a competition window, inclusive on both ends.
pub fn competition_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = start;
    while day <= end {
        dates.push(day);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}

/// A placement chosen by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotAssignment {
    pub pitch_id: Uuid,
    pub kickoff: NaiveDateTime,
}

/// Greedy first-fit allocator over the (date, pitch, kick-off time) grid.
///
/// The planner is seeded with every reservation already on record, and each
/// successful placement feeds the same accumulators, so later fixtures see
/// earlier ones. Two rules constrain a fixture: its slot must be free, and
/// neither team may already play on the chosen date.
pub struct SlotPlanner {
    dates: Vec<NaiveDate>,
    pitches: Vec<Uuid>,
    slots: Vec<NaiveTime>,
    reserved: HashSet<(Uuid, NaiveDateTime)>,
    engaged: HashMap<NaiveDate, HashSet<Uuid>>,
}

impl SlotPlanner {
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        mut pitches: Vec<Uuid>,
        existing: impl IntoIterator<Item = (Uuid, NaiveDateTime)>,
    ) -> Self {
        pitches.sort();
        Self {
            dates: competition_dates(start, end),
            pitches,
            slots: kickoff_slots(),
            reserved: existing.into_iter().collect(),
            engaged: HashMap::new(),
        }
    }

    /// First free slot for this fixture, scanning dates from the window
    /// start, then pitches ascending, then kick-off times ascending. Dates
    /// where either team already plays are skipped. `None` when the whole
    /// grid is exhausted for this fixture; the planner state is unchanged in
    /// that case.
    pub fn place(&mut self, fixture: FixturePair) -> Option<SlotAssignment> {
        for &date in &self.dates {
            if self.plays_on(date, fixture.home) || self.plays_on(date, fixture.away) {
                continue;
            }
            for &pitch in &self.pitches {
                for &slot in &self.slots {
                    let kickoff = date.and_time(slot);
                    if self.reserved.contains(&(pitch, kickoff)) {
                        continue;
                    }
                    self.reserved.insert((pitch, kickoff));
                    let day = self.engaged.entry(date).or_default();
                    day.insert(fixture.home);
                    day.insert(fixture.away);
                    return Some(SlotAssignment {
                        pitch_id: pitch,
                        kickoff,
                    });
                }
            }
        }
        None
    }

    fn plays_on(&self, date: NaiveDate, team: Uuid) -> bool {
        self.engaged
            .get(&date)
            .is_some_and(|teams| teams.contains(&team))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        date(day).and_time(NaiveTime::from_hms_opt(hour, 30, 0).unwrap())
    }

    #[test]
    fn double_round_robin_order_for_three_teams() {
        let (a, b, c) = (uid(1), uid(2), uid(3));
        let fixtures = round_robin_pairs(&[a, b, c]);
        let pairs: Vec<(Uuid, Uuid)> = fixtures.iter().map(|f| (f.home, f.away)).collect();
        assert_eq!(
            pairs,
            vec![(a, b), (b, a), (a, c), (c, a), (b, c), (c, b)]
        );
    }

    #[test]
    fn fixture_count_is_n_times_n_minus_one() {
        let teams: Vec<Uuid> = (1..=5).map(uid).collect();
        assert_eq!(round_robin_pairs(&teams).len(), 20);
        assert!(round_robin_pairs(&[uid(1)]).is_empty());
        assert!(round_robin_pairs(&[]).is_empty());
    }

    #[test]
    fn kickoff_catalog_runs_hourly_from_morning_to_evening() {
        let slots = kickoff_slots();
        assert_eq!(slots.len(), 13);
        assert_eq!(slots[0], NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(slots[12], NaiveTime::from_hms_opt(20, 30, 0).unwrap());
        for pair in slots.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::hours(1));
        }
    }

    #[test]
    fn window_dates_are_inclusive_on_both_ends() {
        assert_eq!(competition_dates(date(1), date(3)), vec![date(1), date(2), date(3)]);
        assert_eq!(competition_dates(date(5), date(5)), vec![date(5)]);
        assert!(competition_dates(date(5), date(4)).is_empty());
    }

    #[test]
    fn first_fixture_takes_earliest_date_lowest_pitch_first_slot() {
        let mut planner = SlotPlanner::new(date(1), date(2), vec![uid(20), uid(10)], []);
        let placed = planner
            .place(FixturePair { home: uid(1), away: uid(2) })
            .unwrap();
        assert_eq!(placed.pitch_id, uid(10));
        assert_eq!(placed.kickoff, at(1, 8));
    }

    #[test]
    fn three_team_draw_fills_six_days_without_collisions() {
        let teams: Vec<Uuid> = (1..=3).map(uid).collect();
        let pitch = uid(50);
        let mut planner = SlotPlanner::new(date(1), date(6), vec![pitch], []);

        let mut assignments = Vec::new();
        for fixture in round_robin_pairs(&teams) {
            assignments.push(planner.place(fixture).unwrap());
        }

        assert_eq!(assignments.len(), 6);
        let slots: HashSet<(Uuid, NaiveDateTime)> = assignments
            .iter()
            .map(|a| (a.pitch_id, a.kickoff))
            .collect();
        assert_eq!(slots.len(), 6, "every fixture holds a distinct slot");
        let days: HashSet<NaiveDate> = assignments.iter().map(|a| a.kickoff.date()).collect();
        assert_eq!(days.len(), 6, "one fixture per day once each team rests");
        assert!(assignments.iter().all(|a| a.pitch_id == pitch));
        assert!(assignments.iter().all(|a| a.kickoff.time() == kickoff_slots()[0]));
    }

    #[test]
    fn existing_bookings_push_placements_to_the_next_slot() {
        let pitch = uid(7);
        let mut planner =
            SlotPlanner::new(date(1), date(1), vec![pitch], [(pitch, at(1, 8))]);
        let placed = planner
            .place(FixturePair { home: uid(1), away: uid(2) })
            .unwrap();
        assert_eq!(placed.kickoff, at(1, 9));
    }

    #[test]
    fn return_leg_moves_to_the_next_free_date() {
        let mut planner = SlotPlanner::new(date(1), date(3), vec![uid(5), uid(6)], []);
        let first = planner
            .place(FixturePair { home: uid(1), away: uid(2) })
            .unwrap();
        let second = planner
            .place(FixturePair { home: uid(2), away: uid(1) })
            .unwrap();
        assert_eq!(first.kickoff.date(), date(1));
        assert_eq!(second.kickoff.date(), date(2), "same pair never shares a date");
    }

    #[test]
    fn disjoint_pairs_may_share_a_date() {
        let pitch = uid(9);
        let mut planner = SlotPlanner::new(date(1), date(1), vec![pitch], []);
        let first = planner
            .place(FixturePair { home: uid(1), away: uid(2) })
            .unwrap();
        let second = planner
            .place(FixturePair { home: uid(3), away: uid(4) })
            .unwrap();
        assert_eq!(first.kickoff, at(1, 8));
        assert_eq!(second.kickoff, at(1, 9));
    }

    #[test]
    fn nearly_full_grid_schedules_only_what_fits() {
        let pitch = uid(3);
        // All slots of the single day taken except the 20:30 one.
        let taken: Vec<(Uuid, NaiveDateTime)> =
            (8..20).map(|hour| (pitch, at(1, hour))).collect();
        let teams: Vec<Uuid> = (1..=4).map(uid).collect();
        let mut planner = SlotPlanner::new(date(1), date(1), vec![pitch], taken);

        let outcomes: Vec<Option<SlotAssignment>> = round_robin_pairs(&teams)
            .into_iter()
            .map(|fixture| planner.place(fixture))
            .collect();

        let placed: Vec<&SlotAssignment> = outcomes.iter().flatten().collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].kickoff, at(1, 20));
        assert_eq!(outcomes.iter().filter(|o| o.is_none()).count(), 11);
    }

    #[test]
    fn no_active_pitches_places_nothing() {
        let mut planner = SlotPlanner::new(date(1), date(6), Vec::new(), []);
        assert!(planner
            .place(FixturePair { home: uid(1), away: uid(2) })
            .is_none());
    }
}
