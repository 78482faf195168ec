//! Core types for the OpenD6 companion toolkit.
//!
//! Provides the character template model (attributes, skills, options)
//! with pure, validated mutation operations, the character model built
//! from a template, build-point accounting, and template validation.

pub mod character;
pub mod error;
pub mod id;
pub mod option;
pub mod points;
pub mod template;
pub mod validate;

pub use character::{
    Appearance, BodyPoints, Character, CharacterAttribute, Defenses, DieCode, Health, WoundLevel,
    WoundState,
};
pub use error::{CoreError, CoreResult};
pub use id::{AttributeId, OptionId, SkillId};
pub use option::{OptionBody, OptionCategory, TemplateOption};
pub use points::{CostTable, complication_points, total_points};
pub use template::{Attribute, Skill, Template};
pub use validate::{ValidationIssue, validate_template};
