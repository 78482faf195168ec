//! Classic and Legend totals for a wild-die roll.
//!
//! Classic OpenD6 sums faces and adds pips. D6 Legend counts successes
//! against a fixed threshold instead; pips never apply to a Legend total.

use serde::{Deserialize, Serialize};

use crate::roll::{RollStatus, WildRoll};

/// In D6 Legend, a die counts as a success when its face beats this value.
pub const LEGEND_SUCCESS_THRESHOLD: u32 = 2;

/// Which OpenD6 resolution variant to apply to a roll.
///
/// Owned by external settings state and passed per call; the engine never
/// stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    /// Sum the faces and add pips.
    #[default]
    Classic,
    /// Count successes against a threshold (D6 Legend).
    Legend,
}

/// The classic total: ordinary faces + wild die + bonus rolls (on a
/// critical success) + pips.
///
/// The penalty die is informational only and is never subtracted here.
pub fn classic_total(roll: &WildRoll, pips: u32) -> u32 {
    let mut sum: u32 = roll.rolls.iter().sum();
    sum += roll.wild_die;

    if roll.status == RollStatus::CriticalSuccess {
        sum += roll.bonus_rolls.iter().sum::<u32>();
    }

    sum + pips
}

/// The Legend total: number of dice that scored a success.
///
/// Ordinary faces and the wild die count on a strict `>`; bonus rolls
/// count on `>=`.
// TODO: confirm the `>=` on bonus rolls against the Legend rulebook; the
// comparison is asymmetric in the source app and is kept as observed.
pub fn legend_successes(roll: &WildRoll) -> u32 {
    let mut successes = u32::from(roll.wild_die > LEGEND_SUCCESS_THRESHOLD);

    successes += roll
        .rolls
        .iter()
        .filter(|&&face| face > LEGEND_SUCCESS_THRESHOLD)
        .count() as u32;

    if roll.status == RollStatus::CriticalSuccess {
        successes += roll
            .bonus_rolls
            .iter()
            .filter(|&&face| face >= LEGEND_SUCCESS_THRESHOLD)
            .count() as u32;
    }

    successes
}

/// Compute the roll's total under the given ruleset.
///
/// `pips` is ignored in Legend mode.
pub fn total(roll: &WildRoll, pips: u32, ruleset: Ruleset) -> u32 {
    match ruleset {
        Ruleset::Classic => classic_total(roll, pips),
        Ruleset::Legend => legend_successes(roll),
    }
}
