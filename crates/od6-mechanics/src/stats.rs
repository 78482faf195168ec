//! Append-only statistics over roll outcomes.
//!
//! [`RollRecord`] captures a roll plus a timestamp; [`RollLog`] is the
//! in-memory materialization of the durable log, with aggregate queries.
//! Durability itself belongs to the store layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roll::{DIE_SIDES, RollStatus, WildRoll};

/// A single recorded roll outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    /// How many dice were rolled, wild die included.
    pub dice_count: u32,
    /// The ordinary (non-wild) faces.
    pub rolls: Vec<u32>,
    /// The wild die's face.
    pub wild_die: u32,
    /// Outcome classification.
    pub status: RollStatus,
    /// Exploding re-rolls, if any.
    pub bonus_rolls: Vec<u32>,
    /// The penalty die, if any.
    pub penalty_die: Option<u32>,
    /// When the roll was recorded.
    pub timestamp: DateTime<Utc>,
}

impl RollRecord {
    /// Capture a roll outcome with the current time.
    pub fn capture(roll: &WildRoll) -> Self {
        Self {
            dice_count: roll.dice_count,
            rolls: roll.rolls.clone(),
            wild_die: roll.wild_die,
            status: roll.status,
            bonus_rolls: roll.bonus_rolls.clone(),
            penalty_die: roll.penalty_die,
            timestamp: Utc::now(),
        }
    }

    /// Every face this roll produced: ordinary, wild, bonus, and penalty dice.
    pub fn all_faces(&self) -> impl Iterator<Item = u32> + '_ {
        self.rolls
            .iter()
            .copied()
            .chain(std::iter::once(self.wild_die))
            .chain(self.bonus_rolls.iter().copied())
            .chain(self.penalty_die)
    }
}

/// A chronological log of roll records with aggregate queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollLog {
    records: Vec<RollRecord>,
}

impl RollLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Records keep invocation order.
    pub fn append(&mut self, record: RollRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[RollRecord] {
        &self.records
    }

    /// Number of recorded rolls.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rolls with the given status.
    pub fn count_by_status(&self, status: RollStatus) -> usize {
        self.records.iter().filter(|r| r.status == status).count()
    }

    /// How often each face came up, indexed by `face - 1`.
    pub fn face_distribution(&self) -> [u64; DIE_SIDES as usize] {
        let mut counts = [0u64; DIE_SIDES as usize];
        for record in &self.records {
            for face in record.all_faces() {
                if (1..=DIE_SIDES).contains(&face) {
                    counts[(face - 1) as usize] += 1;
                }
            }
        }
        counts
    }

    /// The face rolled most often, or `None` if the log is empty.
    /// Ties resolve to the lowest face.
    pub fn most_common_face(&self) -> Option<u32> {
        let counts = self.face_distribution();
        let (best, &count) = counts
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
        if count == 0 {
            return None;
        }
        Some(best as u32 + 1)
    }

    /// Total individual dice rolled across all records.
    pub fn total_dice_rolled(&self) -> u64 {
        self.records.iter().map(|r| r.all_faces().count() as u64).sum()
    }

    /// Fraction of rolls that were critical successes, 0.0 when empty.
    pub fn critical_success_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.count_by_status(RollStatus::CriticalSuccess) as f64 / self.records.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(rolls: &[u32], wild_die: u32, status: RollStatus) -> RollRecord {
        RollRecord {
            dice_count: rolls.len() as u32 + 1,
            rolls: rolls.to_vec(),
            wild_die,
            status,
            bonus_rolls: Vec::new(),
            penalty_die: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_log() {
        let log = RollLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.most_common_face().is_none());
        assert_eq!(log.critical_success_rate(), 0.0);
    }

    #[test]
    fn append_preserves_order() {
        let mut log = RollLog::new();
        log.append(record(&[], 2, RollStatus::Normal));
        log.append(record(&[], 5, RollStatus::Normal));
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].wild_die, 2);
        assert_eq!(log.records()[1].wild_die, 5);
    }

    #[test]
    fn count_by_status() {
        let mut log = RollLog::new();
        log.append(record(&[3], 4, RollStatus::Normal));
        log.append(record(&[2], 6, RollStatus::CriticalSuccess));
        log.append(record(&[5], 1, RollStatus::CriticalFailure));
        log.append(record(&[1], 6, RollStatus::CriticalSuccess));
        assert_eq!(log.count_by_status(RollStatus::Normal), 1);
        assert_eq!(log.count_by_status(RollStatus::CriticalSuccess), 2);
        assert_eq!(log.count_by_status(RollStatus::CriticalFailure), 1);
    }

    #[test]
    fn face_distribution_counts_every_die() {
        let mut log = RollLog::new();
        log.append(RollRecord {
            dice_count: 3,
            rolls: vec![2, 6],
            wild_die: 1,
            status: RollStatus::CriticalFailure,
            bonus_rolls: Vec::new(),
            penalty_die: Some(6),
            timestamp: Utc::now(),
        });
        let counts = log.face_distribution();
        assert_eq!(counts[0], 1); // the wild 1
        assert_eq!(counts[1], 1); // the ordinary 2
        assert_eq!(counts[5], 2); // the ordinary 6 and the penalty 6
        assert_eq!(log.total_dice_rolled(), 4);
    }

    #[test]
    fn most_common_face_ties_resolve_low() {
        let mut log = RollLog::new();
        log.append(record(&[2], 5, RollStatus::Normal));
        log.append(record(&[5], 2, RollStatus::Normal));
        assert_eq!(log.most_common_face(), Some(2));
    }

    #[test]
    fn critical_success_rate() {
        let mut log = RollLog::new();
        log.append(record(&[], 6, RollStatus::CriticalSuccess));
        log.append(record(&[], 4, RollStatus::Normal));
        assert!((log.critical_success_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn capture_copies_roll_fields() {
        let roll = WildRoll {
            dice_count: 2,
            rolls: vec![3],
            wild_die: 6,
            status: RollStatus::CriticalSuccess,
            bonus_rolls: vec![4],
            penalty_die: None,
        };
        let rec = RollRecord::capture(&roll);
        assert_eq!(rec.dice_count, 2);
        assert_eq!(rec.rolls, vec![3]);
        assert_eq!(rec.status, RollStatus::CriticalSuccess);
        assert_eq!(rec.bonus_rolls, vec![4]);
    }

    #[test]
    fn log_serde_roundtrip() {
        let mut log = RollLog::new();
        log.append(record(&[4], 6, RollStatus::CriticalSuccess));
        let json = serde_json::to_string(&log).unwrap();
        let back: RollLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.records()[0].wild_die, 6);
    }
}
