//! Characters built from a template.
//!
//! A character owns a private copy of its template's attribute/skill
//! shape plus per-attribute die-code assignments, selected options,
//! appearance, health, and defenses. It never mutates the template it
//! was derived from. Like the template operations, character edits are
//! pure: snapshot in, snapshot out.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::{AttributeId, OptionId};
use crate::option::TemplateOption;
use crate::template::{Attribute, Template};

/// Body points are clamped to this magnitude.
pub const BODY_POINTS_LIMIT: i32 = 999;

/// An OpenD6 die code: a number of dice plus 0-2 pips.
///
/// Three pips carry into a full die, so construction normalizes
/// `2D+3` to `3D+0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieCode {
    /// Number of six-sided dice.
    pub dice: u32,
    /// Pip bonus, always 0-2 after normalization.
    pub pips: u32,
}

impl DieCode {
    /// Create a die code, carrying excess pips into dice.
    pub fn new(dice: u32, pips: u32) -> Self {
        Self {
            dice: dice + pips / 3,
            pips: pips % 3,
        }
    }

    /// Total pip value: three per die plus the pip bonus.
    pub fn total_pips(self) -> u32 {
        self.dice * 3 + self.pips
    }
}

impl std::fmt::Display for DieCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pips == 0 {
            write!(f, "{}D", self.dice)
        } else {
            write!(f, "{}D+{}", self.dice, self.pips)
        }
    }
}

/// One attribute on a character: the copied template attribute plus the
/// character's die-code assignment, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterAttribute {
    /// The character's private copy of the template attribute.
    pub attribute: Attribute,
    /// Dice assigned to this attribute. `None` until the player assigns.
    pub die_code: Option<DieCode>,
}

/// Physical appearance fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Appearance {
    /// Height, free text.
    pub height: String,
    /// Weight, free text.
    pub weight: String,
    /// Hair color/style.
    pub hair: String,
    /// Eye color.
    pub eyes: String,
}

/// Body-point pool for the body-points health system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPoints {
    /// Maximum body points.
    pub max: i32,
    /// Current body points; may go negative down to the clamp limit.
    pub current: i32,
}

impl Default for BodyPoints {
    fn default() -> Self {
        Self { max: 20, current: 20 }
    }
}

/// A step on the wound death spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WoundLevel {
    /// Briefly dazed.
    Stunned,
    /// Hurt.
    Wounded,
    /// Badly hurt.
    SeverelyWounded,
    /// Out of the fight.
    Incapacitated,
    /// Dying.
    MortallyWounded,
    /// Dead.
    Dead,
}

impl WoundLevel {
    /// All levels, mildest first.
    pub const ALL: [Self; 6] = [
        Self::Stunned,
        Self::Wounded,
        Self::SeverelyWounded,
        Self::Incapacitated,
        Self::MortallyWounded,
        Self::Dead,
    ];
}

impl std::fmt::Display for WoundLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stunned => write!(f, "Stunned"),
            Self::Wounded => write!(f, "Wounded"),
            Self::SeverelyWounded => write!(f, "Severely Wounded"),
            Self::Incapacitated => write!(f, "Incapacitated"),
            Self::MortallyWounded => write!(f, "Mortally Wounded"),
            Self::Dead => write!(f, "Dead"),
        }
    }
}

/// Checkboxes of the wound death spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WoundState {
    /// Stunned.
    pub stunned: bool,
    /// Wounded.
    pub wounded: bool,
    /// Severely wounded.
    pub severely_wounded: bool,
    /// Incapacitated.
    pub incapacitated: bool,
    /// Mortally wounded.
    pub mortally_wounded: bool,
    /// Dead.
    pub dead: bool,
}

impl WoundState {
    /// Flip one wound level.
    pub fn toggle(&mut self, level: WoundLevel) {
        let slot = match level {
            WoundLevel::Stunned => &mut self.stunned,
            WoundLevel::Wounded => &mut self.wounded,
            WoundLevel::SeverelyWounded => &mut self.severely_wounded,
            WoundLevel::Incapacitated => &mut self.incapacitated,
            WoundLevel::MortallyWounded => &mut self.mortally_wounded,
            WoundLevel::Dead => &mut self.dead,
        };
        *slot = !*slot;
    }

    /// The worst wound currently marked, if any.
    pub fn worst(&self) -> Option<WoundLevel> {
        WoundLevel::ALL
            .into_iter()
            .rev()
            .find(|level| self.is_set(*level))
    }

    fn is_set(&self, level: WoundLevel) -> bool {
        match level {
            WoundLevel::Stunned => self.stunned,
            WoundLevel::Wounded => self.wounded,
            WoundLevel::SeverelyWounded => self.severely_wounded,
            WoundLevel::Incapacitated => self.incapacitated,
            WoundLevel::MortallyWounded => self.mortally_wounded,
            WoundLevel::Dead => self.dead,
        }
    }
}

/// Character health: either body points or the wound spiral, selected by
/// `use_body_points`. Both states are kept so toggling the system does
/// not lose data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    /// True when the body-points system is active.
    pub use_body_points: bool,
    /// The body-point pool.
    pub body_points: BodyPoints,
    /// The wound spiral.
    pub wounds: WoundState,
}

impl Health {
    /// Set maximum body points, clamped to the limit.
    pub fn set_max_body_points(&mut self, value: i32) {
        self.body_points.max = value.clamp(-BODY_POINTS_LIMIT, BODY_POINTS_LIMIT);
    }

    /// Set current body points, clamped to the limit.
    pub fn set_current_body_points(&mut self, value: i32) {
        self.body_points.current = value.clamp(-BODY_POINTS_LIMIT, BODY_POINTS_LIMIT);
    }
}

/// Character defenses: rolled by default, or fixed static values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Defenses {
    /// True when static defense values are used instead of rolls.
    pub use_static: bool,
    /// Static dodge value.
    pub dodge: i32,
    /// Static block value.
    pub block: i32,
    /// Static parry value.
    pub parry: i32,
    /// Static soak value.
    pub soak: i32,
}

/// A character built against a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Species or race.
    pub species: String,
    /// Appearance fields.
    pub appearance: Appearance,
    /// Name of the template this character was built from.
    pub template_name: String,
    /// Private copy of the template's attributes plus die codes.
    pub attributes: Vec<CharacterAttribute>,
    /// Options the player selected.
    pub selected_options: Vec<TemplateOption>,
    /// Health configuration.
    pub health: Health,
    /// Defense configuration.
    pub defenses: Defenses,
}

impl Character {
    /// Build a fresh character from a template, copying its attribute and
    /// skill shape. The template itself is never touched afterwards.
    pub fn from_template(template: &Template, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: String::new(),
            appearance: Appearance::default(),
            template_name: template.name.clone(),
            attributes: template
                .attributes
                .iter()
                .map(|attribute| CharacterAttribute {
                    attribute: attribute.clone(),
                    die_code: None,
                })
                .collect(),
            selected_options: Vec::new(),
            health: Health::default(),
            defenses: Defenses::default(),
        }
    }

    /// Assign a die code to the attribute with the given ID.
    pub fn assign_die_code(mut self, id: AttributeId, die_code: DieCode) -> CoreResult<Self> {
        let slot = self
            .attributes
            .iter_mut()
            .find(|ca| ca.attribute.id == id)
            .ok_or(CoreError::AttributeNotFound(id))?;
        slot.die_code = Some(die_code);
        Ok(self)
    }

    /// Select an option, replacing a previous selection with the same ID.
    pub fn select_option(mut self, option: TemplateOption) -> Self {
        match self
            .selected_options
            .iter_mut()
            .find(|o| o.id() == option.id())
        {
            Some(slot) => *slot = option,
            None => self.selected_options.push(option),
        }
        self
    }

    /// Deselect an option. Idempotent.
    pub fn deselect_option(mut self, id: OptionId) -> Self {
        self.selected_options.retain(|o| o.id() != id);
        self
    }

    /// The die code assigned to the named attribute, if any.
    pub fn die_code_for(&self, attribute_name: &str) -> Option<DieCode> {
        self.attributes
            .iter()
            .find(|ca| ca.attribute.name == attribute_name)
            .and_then(|ca| ca.die_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Attribute;

    fn test_template() -> Template {
        let mut t = Template::new("Fantasy");
        t.attributes
            .push(Attribute::new("Physique", "Body").with_skills(["Lifting", "Running"]));
        t.attributes.push(Attribute::new("Intellect", "Mind"));
        t
    }

    #[test]
    fn die_code_normalizes_pips() {
        let code = DieCode::new(2, 3);
        assert_eq!(code, DieCode { dice: 3, pips: 0 });
        assert_eq!(DieCode::new(2, 5), DieCode { dice: 3, pips: 2 });
    }

    #[test]
    fn die_code_display() {
        assert_eq!(DieCode::new(3, 0).to_string(), "3D");
        assert_eq!(DieCode::new(3, 1).to_string(), "3D+1");
    }

    #[test]
    fn die_code_total_pips() {
        assert_eq!(DieCode::new(3, 2).total_pips(), 11);
    }

    #[test]
    fn from_template_copies_shape() {
        let template = test_template();
        let character = Character::from_template(&template, "Kara");
        assert_eq!(character.template_name, "Fantasy");
        assert_eq!(character.attributes.len(), 2);
        assert_eq!(character.attributes[0].attribute.skills.len(), 2);
        assert!(character.attributes.iter().all(|ca| ca.die_code.is_none()));
    }

    #[test]
    fn from_template_never_mutates_template() {
        let template = test_template();
        let before = template.clone();
        let character = Character::from_template(&template, "Kara");
        let id = character.attributes[0].attribute.id;
        let _ = character.assign_die_code(id, DieCode::new(4, 0)).unwrap();
        assert_eq!(template, before);
    }

    #[test]
    fn assign_die_code() {
        let template = test_template();
        let character = Character::from_template(&template, "Kara");
        let id = character.attributes[0].attribute.id;
        let character = character.assign_die_code(id, DieCode::new(3, 1)).unwrap();
        assert_eq!(character.die_code_for("Physique"), Some(DieCode::new(3, 1)));
        assert_eq!(character.die_code_for("Intellect"), None);
    }

    #[test]
    fn assign_die_code_unknown_attribute() {
        let character = Character::from_template(&test_template(), "Kara");
        let result = character.assign_die_code(AttributeId::new(), DieCode::new(3, 0));
        assert!(result.is_err());
    }

    #[test]
    fn select_option_replaces_same_id() {
        let character = Character::from_template(&test_template(), "Kara");
        let option = TemplateOption::advantage("Wealth", "", 4);
        let mut upgraded = option.clone();
        upgraded.body_mut().points = 8;

        let character = character.select_option(option).select_option(upgraded);
        assert_eq!(character.selected_options.len(), 1);
        assert_eq!(character.selected_options[0].points(), 8);
    }

    #[test]
    fn deselect_option_is_idempotent() {
        let option = TemplateOption::advantage("Wealth", "", 4);
        let id = option.id();
        let character = Character::from_template(&test_template(), "Kara").select_option(option);
        let character = character.deselect_option(id).deselect_option(id);
        assert!(character.selected_options.is_empty());
    }

    #[test]
    fn body_points_clamped() {
        let mut health = Health::default();
        health.set_current_body_points(5000);
        assert_eq!(health.body_points.current, BODY_POINTS_LIMIT);
        health.set_current_body_points(-5000);
        assert_eq!(health.body_points.current, -BODY_POINTS_LIMIT);
    }

    #[test]
    fn wound_toggle_and_worst() {
        let mut wounds = WoundState::default();
        assert!(wounds.worst().is_none());
        wounds.toggle(WoundLevel::Stunned);
        wounds.toggle(WoundLevel::SeverelyWounded);
        assert_eq!(wounds.worst(), Some(WoundLevel::SeverelyWounded));
        wounds.toggle(WoundLevel::SeverelyWounded);
        assert_eq!(wounds.worst(), Some(WoundLevel::Stunned));
    }

    #[test]
    fn character_json_shape() {
        let character = Character::from_template(&test_template(), "Kara");
        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["name"], "Kara");
        assert_eq!(json["templateName"], "Fantasy");
        assert_eq!(json["health"]["useBodyPoints"], false);
        assert_eq!(json["health"]["bodyPoints"]["max"], 20);
        assert_eq!(json["health"]["wounds"]["severelyWounded"], false);
        assert!(json["selectedOptions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn character_serde_roundtrip() {
        let character = Character::from_template(&test_template(), "Kara")
            .select_option(TemplateOption::complication("Debt", "", 5));
        let json = serde_json::to_string(&character).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, character);
    }
}
