use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{LeaderboardEntry, StandingsEntry};

/// Points awarded per WOD placing: `base_points` for first, `decrement`
/// less for every place after, never below `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsTable {
    pub base_points: u32,
    pub decrement: u32,
    pub floor: u32,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            base_points: 100,
            decrement: 1,
            floor: 1,
        }
    }
}

impl PointsTable {
    pub fn points_for(&self, rank: u32) -> u32 {
        let penalty = rank.saturating_sub(1).saturating_mul(self.decrement);
        self.base_points.saturating_sub(penalty).max(self.floor)
    }
}

/// Folds several WOD leaderboards of one event category into overall
/// standings, most points first.
///
/// Athletes tied on points keep the order in which they first appear
/// across `leaderboards` and still get consecutive ranks.
pub fn standings(
    leaderboards: &[Vec<LeaderboardEntry>],
    table: &PointsTable,
) -> Vec<StandingsEntry> {
    let mut totals: Vec<StandingsEntry> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for leaderboard in leaderboards {
        for entry in leaderboard {
            let slot = *index.entry(entry.athlete_id).or_insert_with(|| {
                totals.push(StandingsEntry {
                    rank: 0,
                    athlete_id: entry.athlete_id,
                    total_points: 0,
                    wods_scored: 0,
                });
                totals.len() - 1
            });

            let standing = &mut totals[slot];
            standing.total_points += table.points_for(entry.rank);
            standing.wods_scored += 1;
        }
    }

    totals.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    for (idx, standing) in totals.iter_mut().enumerate() {
        standing.rank = idx as u32 + 1;
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClockTime, ScoreBreakdown};

    fn entry(rank: u32, athlete_id: Uuid) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            athlete_id,
            breakdown: ScoreBreakdown {
                all_completed: true,
                completion_time: ClockTime::from_seconds(500 + rank),
                completed_exercises: 1,
                total_exercises: 1,
                total_reps: 10,
                exercises: Vec::new(),
            },
        }
    }

    #[test]
    fn test_default_points_table() {
        let table = PointsTable::default();
        assert_eq!(table.points_for(1), 100);
        assert_eq!(table.points_for(3), 98);
        assert_eq!(table.points_for(100), 1);
        assert_eq!(table.points_for(250), 1);
    }

    #[test]
    fn test_custom_points_table() {
        let table = PointsTable {
            base_points: 50,
            decrement: 5,
            floor: 0,
        };
        assert_eq!(table.points_for(2), 45);
        assert_eq!(table.points_for(20), 0);
    }

    #[test]
    fn test_points_summed_across_wods() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let leaderboards = vec![
            vec![entry(1, a), entry(2, b), entry(3, c)],
            vec![entry(1, c), entry(2, a)],
        ];

        let result = standings(&leaderboards, &PointsTable::default());

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].athlete_id, a);
        assert_eq!(result[0].total_points, 199);
        assert_eq!(result[0].wods_scored, 2);
        assert_eq!(result[1].athlete_id, c);
        assert_eq!(result[1].total_points, 198);
        assert_eq!(result[2].athlete_id, b);
        assert_eq!(result[2].total_points, 99);
        assert_eq!(result[2].wods_scored, 1);
        assert_eq!(
            result.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_point_ties_keep_first_appearance_order() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let leaderboards = vec![
            vec![entry(1, a), entry(2, b)],
            vec![entry(1, b), entry(2, a)],
        ];

        let result = standings(&leaderboards, &PointsTable::default());

        assert_eq!(result[0].athlete_id, a);
        assert_eq!(result[1].athlete_id, b);
        assert_eq!(result[0].total_points, result[1].total_points);
        assert_eq!((result[0].rank, result[1].rank), (1, 2));
    }

    #[test]
    fn test_no_leaderboards() {
        assert!(standings(&[], &PointsTable::default()).is_empty());
    }
}
