//! OpenD6 dice mechanics engine.
//!
//! Implements the wild-die roll with exploding bonus dice and critical
//! outcomes, the classic (sum) and Legend (success-counting) totals, and
//! an append-only statistics log over roll outcomes.

pub mod error;
pub mod roll;
pub mod stats;
pub mod total;

pub use error::{MechError, MechResult};
pub use roll::{DIE_SIDES, RollStatus, WildRoll, roll};
pub use stats::{RollLog, RollRecord};
pub use total::{LEGEND_SUCCESS_THRESHOLD, Ruleset, classic_total, legend_successes, total};
