//! Build-point accounting for characters.
//!
//! Two independent projections over a character: the points spent on
//! dice and purchasable options, and the points granted back by
//! complications. They are reported separately and never netted against
//! each other, so a sheet can show both columns side by side.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::option::OptionCategory;

/// Conversion rates from dice and pips to build points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTable {
    /// Points per full die of an attribute's die code.
    pub points_per_die: i32,
    /// Points per leftover pip.
    pub points_per_pip: i32,
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            points_per_die: 4,
            points_per_pip: 1,
        }
    }
}

/// Total points spent: attribute dice priced by `costs`, plus the point
/// values of selected advantages and special abilities. Attributes with
/// no die code assigned contribute nothing.
pub fn total_points(character: &Character, costs: &CostTable) -> i32 {
    let dice_points: i32 = character
        .attributes
        .iter()
        .filter_map(|ca| ca.die_code)
        .map(|code| code.dice as i32 * costs.points_per_die + code.pips as i32 * costs.points_per_pip)
        .sum();

    let option_points: i32 = character
        .selected_options
        .iter()
        .filter(|o| o.category() != OptionCategory::Complication)
        .map(|o| o.points())
        .sum();

    dice_points + option_points
}

/// Points granted by selected complications.
pub fn complication_points(character: &Character) -> i32 {
    character
        .selected_options
        .iter()
        .filter(|o| o.category() == OptionCategory::Complication)
        .map(|o| o.points())
        .sum()
}
