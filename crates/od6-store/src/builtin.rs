//! Built-in base templates for the three OpenD6 genre books.
//!
//! These are constructed in code rather than loaded from disk, so they
//! are always available and cannot be edited or deleted. Custom
//! templates start as a copy of one of them.

use od6_core::{Attribute, Template, TemplateOption};

/// Name of the fantasy base template.
pub const FANTASY: &str = "Fantasy";
/// Name of the modern-adventure base template.
pub const ADVENTURE: &str = "Adventure";
/// Name of the space-opera base template.
pub const SPACE: &str = "Space";

/// True when `name` is one of the built-in base templates.
pub fn is_builtin(name: &str) -> bool {
    name == FANTASY || name == ADVENTURE || name == SPACE
}

/// All built-in base templates, in book order.
pub fn all() -> Vec<Template> {
    vec![fantasy(), adventure(), space()]
}

/// The built-in template with the given name, if any.
pub fn by_name(name: &str) -> Option<Template> {
    match name {
        FANTASY => Some(fantasy()),
        ADVENTURE => Some(adventure()),
        SPACE => Some(space()),
        _ => None,
    }
}

/// The fantasy base template.
pub fn fantasy() -> Template {
    let mut t = Template::new(FANTASY);
    t.attributes = vec![
        Attribute::new("Agility", "Balance, dexterity, and speed")
            .with_skills(["Acrobatics", "Climbing", "Dodge", "Melee Combat", "Riding"]),
        Attribute::new("Coordination", "Hand-eye coordination and fine motor skill")
            .with_skills(["Lockpicking", "Marksmanship", "Sleight of Hand", "Throwing"]),
        Attribute::new("Physique", "Raw strength, health, and endurance")
            .with_skills(["Lifting", "Running", "Stamina", "Swimming"]),
        Attribute::new("Intellect", "Memory, reasoning, and learned knowledge")
            .with_skills(["Healing", "Navigation", "Reading/Writing", "Trading"]),
        Attribute::new("Acumen", "Perception and practical cunning")
            .with_skills(["Gambling", "Hide", "Search", "Sneak", "Survival", "Tracking"]),
        Attribute::new("Charisma", "Force of personality")
            .with_skills(["Charm", "Command", "Intimidation", "Persuasion"]),
        Attribute::new("Magic", "Command of arcane forces")
            .with_skills(["Alteration", "Apportation", "Conjuration", "Divination"])
            .extranormal(),
    ];
    t.options = vec![
        TemplateOption::advantage("Patron", "A powerful benefactor watches over you", 3),
        TemplateOption::advantage("Wealth", "You start with significant assets", 4),
        TemplateOption::complication("Enemy", "Someone influential wants you ruined", 3),
        TemplateOption::complication("Debt", "You owe more than you can repay", 2),
        TemplateOption::special_ability("Iron Will", "Resist mental influence", 4),
    ];
    t
}

/// The modern-adventure base template.
pub fn adventure() -> Template {
    let mut t = Template::new(ADVENTURE);
    t.attributes = vec![
        Attribute::new("Reflexes", "Speed and physical response")
            .with_skills(["Brawling", "Dodge", "Driving", "Melee Combat", "Sneak"]),
        Attribute::new("Coordination", "Hand-eye coordination and fine motor skill")
            .with_skills(["Lockpicking", "Marksmanship", "Piloting", "Throwing"]),
        Attribute::new("Physique", "Raw strength, health, and endurance")
            .with_skills(["Lifting", "Running", "Stamina", "Swimming"]),
        Attribute::new("Knowledge", "Education and recall")
            .with_skills(["Business", "Forgery", "Languages", "Medicine", "Scholar"]),
        Attribute::new("Perception", "Awareness and intuition")
            .with_skills(["Gambling", "Investigation", "Search", "Streetwise"]),
        Attribute::new("Presence", "Bearing and social force")
            .with_skills(["Charm", "Command", "Con", "Intimidation", "Willpower"]),
        Attribute::new("Psionics", "Powers of the unquiet mind")
            .with_skills(["Astral Projection", "Empathy", "Telekinesis", "Telepathy"])
            .extranormal(),
    ];
    t.options = vec![
        TemplateOption::advantage("Contacts", "People in useful places owe you favors", 2),
        TemplateOption::advantage("Authority", "A badge or commission opens doors", 3),
        TemplateOption::complication("Infamy", "Your reputation precedes you, badly", 2),
        TemplateOption::complication("Phobia", "A fear you cannot reason away", 2),
        TemplateOption::special_ability("Danger Sense", "A warning prickle before the ambush", 3),
    ];
    t
}

/// The space-opera base template.
pub fn space() -> Template {
    let mut t = Template::new(SPACE);
    t.attributes = vec![
        Attribute::new("Agility", "Balance, dexterity, and speed")
            .with_skills(["Blaster", "Brawling", "Dodge", "Melee Combat"]),
        Attribute::new("Mechanical", "Operating vehicles and starships")
            .with_skills(["Astrogation", "Gunnery", "Piloting", "Sensors", "Shields"]),
        Attribute::new("Strength", "Raw power and resilience")
            .with_skills(["Climbing", "Lifting", "Stamina", "Swimming"]),
        Attribute::new("Knowledge", "Education and recall")
            .with_skills(["Bureaucracy", "Cultures", "Languages", "Streetwise", "Value"]),
        Attribute::new("Perception", "Awareness and intuition")
            .with_skills(["Bargain", "Command", "Con", "Gambling", "Search", "Sneak"]),
        Attribute::new("Technical", "Building and repairing machines")
            .with_skills(["Armor Repair", "Computers", "Demolitions", "Droid Repair", "Medicine"]),
        Attribute::new("Metaphysics", "Attunement to the energy that binds the galaxy")
            .with_skills(["Channel", "Sense", "Transform"])
            .extranormal(),
    ];
    t.options = vec![
        TemplateOption::advantage("Starship", "A battered but spaceworthy vessel", 6),
        TemplateOption::advantage("Cybernetics", "Military-grade augmentation", 4),
        TemplateOption::complication("Wanted", "A bounty hangs over your head", 4),
        TemplateOption::complication("Debt", "You owe more than you can repay", 2),
        TemplateOption::special_ability("Hardiness", "Shrug off wounds that fell others", 4),
    ];
    t
}
