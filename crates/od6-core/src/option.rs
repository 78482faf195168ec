//! Character options: advantages, complications, and special abilities.
//!
//! The option space is a closed tagged variant so every call site is
//! exhaustively checked; the serialized form keeps the flat
//! `{name, description, points, category}` record shape.

use serde::{Deserialize, Serialize};

use crate::id::OptionId;

/// The three option categories of OpenD6 character creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionCategory {
    /// A beneficial trait bought with build points.
    Advantage,
    /// A drawback that grants bonus build points.
    Complication,
    /// An extranormal power bought with build points.
    SpecialAbility,
}

impl std::fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Advantage => write!(f, "Advantage"),
            Self::Complication => write!(f, "Complication"),
            Self::SpecialAbility => write!(f, "Special Ability"),
        }
    }
}

/// The fields shared by every option category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionBody {
    /// Stable identifier; generated when a record arrives without one.
    #[serde(default)]
    pub id: OptionId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Build-point value. Advantages and special abilities cost this many
    /// points; complications grant them instead.
    pub points: i32,
}

/// A purchasable (or point-granting) character option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum TemplateOption {
    /// A beneficial trait bought with build points.
    Advantage(OptionBody),
    /// A drawback that grants bonus build points.
    Complication(OptionBody),
    /// An extranormal power bought with build points.
    SpecialAbility(OptionBody),
}

impl TemplateOption {
    /// Create an advantage.
    pub fn advantage(name: impl Into<String>, description: impl Into<String>, points: i32) -> Self {
        Self::Advantage(OptionBody::new(name, description, points))
    }

    /// Create a complication.
    pub fn complication(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i32,
    ) -> Self {
        Self::Complication(OptionBody::new(name, description, points))
    }

    /// Create a special ability.
    pub fn special_ability(
        name: impl Into<String>,
        description: impl Into<String>,
        points: i32,
    ) -> Self {
        Self::SpecialAbility(OptionBody::new(name, description, points))
    }

    /// The shared fields of this option.
    pub fn body(&self) -> &OptionBody {
        match self {
            Self::Advantage(b) | Self::Complication(b) | Self::SpecialAbility(b) => b,
        }
    }

    /// Mutable access to the shared fields.
    pub fn body_mut(&mut self) -> &mut OptionBody {
        match self {
            Self::Advantage(b) | Self::Complication(b) | Self::SpecialAbility(b) => b,
        }
    }

    /// The option's stable identifier.
    pub fn id(&self) -> OptionId {
        self.body().id
    }

    /// The option's display name.
    pub fn name(&self) -> &str {
        &self.body().name
    }

    /// The option's build-point value.
    pub fn points(&self) -> i32 {
        self.body().points
    }

    /// Which category this option belongs to.
    pub fn category(&self) -> OptionCategory {
        match self {
            Self::Advantage(_) => OptionCategory::Advantage,
            Self::Complication(_) => OptionCategory::Complication,
            Self::SpecialAbility(_) => OptionCategory::SpecialAbility,
        }
    }
}

impl OptionBody {
    /// Create a body with a fresh ID.
    pub fn new(name: impl Into<String>, description: impl Into<String>, points: i32) -> Self {
        Self {
            id: OptionId::new(),
            name: name.into(),
            description: description.into(),
            points,
        }
    }
}
