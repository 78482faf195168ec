//! The OpenD6 wild-die roll.
//!
//! Every roll designates one d6 as the **wild die**. Its face drives the
//! outcome classification: a 6 explodes into a chain of bonus rolls, a 1
//! is a critical failure that (when other dice were rolled) also rolls a
//! penalty die.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Number of faces on an OpenD6 die.
pub const DIE_SIDES: u32 = 6;

/// Classification of a wild-die roll, driven by the wild die's face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollStatus {
    /// The wild die showed 2 through 5.
    Normal,
    /// The wild die showed 6 and exploded into bonus rolls.
    CriticalSuccess,
    /// The wild die showed 1.
    CriticalFailure,
}

impl std::fmt::Display for RollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}

/// The immutable outcome of a single wild-die roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildRoll {
    /// How many dice were rolled, wild die included.
    pub dice_count: u32,
    /// The ordinary (non-wild) faces in roll order. Length is `dice_count - 1`.
    pub rolls: Vec<u32>,
    /// The face shown by the wild die.
    pub wild_die: u32,
    /// Outcome classification.
    pub status: RollStatus,
    /// Exploding re-rolls. Non-empty exactly when the status is
    /// [`RollStatus::CriticalSuccess`]; every element but the last is a 6.
    pub bonus_rolls: Vec<u32>,
    /// The penalty die. Present exactly when the status is
    /// [`RollStatus::CriticalFailure`] and more than one die was rolled.
    pub penalty_die: Option<u32>,
}

/// Roll `dice_count` six-sided dice, one of them wild.
///
/// Rejects `dice_count == 0`; a roll always includes at least the wild die.
pub fn roll<R: Rng + ?Sized>(dice_count: u32, rng: &mut R) -> MechResult<WildRoll> {
    if dice_count == 0 {
        return Err(MechError::InvalidDiceCount(dice_count));
    }
    Ok(roll_with(dice_count, || rng.random_range(1..=DIE_SIDES)))
}

/// Roll using an arbitrary face source. Split out so tests can feed
/// fixed face sequences.
fn roll_with(dice_count: u32, mut die: impl FnMut() -> u32) -> WildRoll {
    let rolls: Vec<u32> = (1..dice_count).map(|_| die()).collect();
    let wild_die = die();

    let mut bonus_rolls = Vec::new();
    let mut penalty_die = None;

    let status = match wild_die {
        DIE_SIDES => {
            // Exploding chain: a loop, not recursion, so a rigged die
            // source cannot grow the stack. Ends at the first non-6.
            loop {
                let bonus = die();
                bonus_rolls.push(bonus);
                if bonus != DIE_SIDES {
                    break;
                }
            }
            RollStatus::CriticalSuccess
        }
        1 => {
            // A lone wild die has no other dice to penalize.
            if dice_count > 1 {
                penalty_die = Some(die());
            }
            RollStatus::CriticalFailure
        }
        _ => RollStatus::Normal,
    };

    WildRoll {
        dice_count,
        rolls,
        wild_die,
        status,
        bonus_rolls,
        penalty_die,
    }
}

impl std::fmt::Display for WildRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] wild {} ({})", faces.join(", "), self.wild_die, self.status)
    }
}
