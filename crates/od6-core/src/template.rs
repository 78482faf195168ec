//! Character templates: ordered attributes, each with ordered skills.
//!
//! Mutation operations are pure: they take the current template by value
//! and return the updated one, so the hosting layer can keep snapshots,
//! replay, or undo without the model knowing about storage or rendering.
//! Edits addressed by position fail with a stale-index error when the
//! list changed since the position was captured; deletions are addressed
//! by stable ID and are idempotent.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::id::{AttributeId, OptionId, SkillId};
use crate::option::{OptionCategory, TemplateOption};

/// A skill under an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable identifier; generated when a record arrives without one.
    #[serde(default)]
    pub id: SkillId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl Skill {
    /// Create a named skill.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// A blank skill, ready for the user to fill in.
    pub fn blank() -> Self {
        Self::new("", "")
    }
}

/// An attribute with its skills. Owned exclusively by one template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Stable identifier; generated when a record arrives without one.
    #[serde(default)]
    pub id: AttributeId,
    /// Display name, unique within its template (case-sensitive).
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether this is an extranormal attribute (magic, psionics, ...).
    pub is_extranormal: bool,
    /// The attribute's skills, in display order.
    pub skills: Vec<Skill>,
}

impl Attribute {
    /// Create a named attribute with no skills.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: AttributeId::new(),
            name: name.into(),
            description: description.into(),
            is_extranormal: false,
            skills: Vec::new(),
        }
    }

    /// A blank attribute, ready for the user to fill in.
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// Add skills in bulk. Used when building templates programmatically.
    pub fn with_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills
            .extend(names.into_iter().map(|n| Skill::new(n, "")));
        self
    }

    /// Mark the attribute as extranormal.
    pub fn extranormal(mut self) -> Self {
        self.is_extranormal = true;
        self
    }

    /// Position of the first skill with the given name, if any.
    pub fn skill_index(&self, name: &str) -> Option<usize> {
        self.skills.iter().position(|s| s.name == name)
    }
}

/// A reusable rule-set definition characters are built from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    /// Template name, globally unique among saved templates.
    pub name: String,
    /// Attributes in display order.
    pub attributes: Vec<Attribute>,
    /// Options in display order, all categories mixed.
    pub options: Vec<TemplateOption>,
}

impl Template {
    /// Create an empty template.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            options: Vec::new(),
        }
    }

    // --- attribute operations ---

    /// Append a blank attribute. Returns the updated template and the new
    /// attribute's position (always `len - 1` at the time of the call).
    pub fn add_attribute(mut self) -> (Self, usize) {
        self.attributes.push(Attribute::blank());
        let index = self.attributes.len() - 1;
        (self, index)
    }

    /// Replace the attribute at `index`.
    ///
    /// Fails with [`CoreError::StaleIndex`] when `index` no longer refers
    /// to a position in the current attribute list.
    pub fn edit_attribute(mut self, attribute: Attribute, index: usize) -> CoreResult<Self> {
        let len = self.attributes.len();
        let slot = self
            .attributes
            .get_mut(index)
            .ok_or(CoreError::StaleIndex { index, len })?;
        *slot = attribute;
        Ok(self)
    }

    /// Remove the attribute with the given ID. A no-op when it is already
    /// gone, so a delete raced against stale UI state cannot fail.
    pub fn delete_attribute(mut self, id: AttributeId) -> Self {
        self.attributes.retain(|a| a.id != id);
        self
    }

    /// Position of the first attribute with the given name (exact match).
    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// True when no *other* attribute carries `name`. `self_index` is the
    /// position of the attribute being edited; pass `None` for a new
    /// attribute not yet in the list.
    pub fn is_attribute_name_unique(&self, name: &str, self_index: Option<usize>) -> bool {
        !self
            .attributes
            .iter()
            .enumerate()
            .any(|(i, a)| Some(i) != self_index && a.name == name)
    }

    // --- skill operations ---

    /// Append a blank skill to the attribute at `attribute_index`.
    /// Returns the updated template and the new skill's position.
    pub fn add_skill(mut self, attribute_index: usize) -> CoreResult<(Self, usize)> {
        let len = self.attributes.len();
        let attribute = self
            .attributes
            .get_mut(attribute_index)
            .ok_or(CoreError::StaleIndex {
                index: attribute_index,
                len,
            })?;
        attribute.skills.push(Skill::blank());
        let skill_index = attribute.skills.len() - 1;
        Ok((self, skill_index))
    }

    /// Replace the skill at `skill_index` under the attribute at
    /// `attribute_index`. Either index being out of range is a stale-index
    /// error.
    pub fn edit_skill(
        mut self,
        attribute_index: usize,
        skill: Skill,
        skill_index: usize,
    ) -> CoreResult<Self> {
        let len = self.attributes.len();
        let attribute = self
            .attributes
            .get_mut(attribute_index)
            .ok_or(CoreError::StaleIndex {
                index: attribute_index,
                len,
            })?;
        let skills_len = attribute.skills.len();
        let slot = attribute
            .skills
            .get_mut(skill_index)
            .ok_or(CoreError::StaleIndex {
                index: skill_index,
                len: skills_len,
            })?;
        *slot = skill;
        Ok(self)
    }

    /// Remove the skill with the given ID from the attribute at
    /// `attribute_index`. Idempotent with respect to the skill.
    pub fn delete_skill(mut self, attribute_index: usize, id: SkillId) -> CoreResult<Self> {
        let len = self.attributes.len();
        let attribute = self
            .attributes
            .get_mut(attribute_index)
            .ok_or(CoreError::StaleIndex {
                index: attribute_index,
                len,
            })?;
        attribute.skills.retain(|s| s.id != id);
        Ok(self)
    }

    // --- option operations ---

    /// Append an option.
    pub fn add_option(mut self, option: TemplateOption) -> Self {
        self.options.push(option);
        self
    }

    /// Replace the option with the same ID as `option`.
    pub fn edit_option(mut self, option: TemplateOption) -> CoreResult<Self> {
        let slot = self
            .options
            .iter_mut()
            .find(|o| o.id() == option.id())
            .ok_or(CoreError::OptionNotFound(option.id()))?;
        *slot = option;
        Ok(self)
    }

    /// Remove the option with the given ID. Idempotent.
    pub fn remove_option(mut self, id: OptionId) -> Self {
        self.options.retain(|o| o.id() != id);
        self
    }

    /// Options of one category, in display order.
    pub fn options_in(&self, category: OptionCategory) -> impl Iterator<Item = &TemplateOption> {
        self.options
            .iter()
            .filter(move |o| o.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_attribute_template() -> Template {
        let mut t = Template::new("Test");
        t.attributes.push(Attribute::new("Strength", "Raw power"));
        t.attributes.push(Attribute::new("Agility", "Speed"));
        t
    }

    #[test]
    fn add_attribute_appends_blank_at_end() {
        let (t, index) = two_attribute_template().add_attribute();
        assert_eq!(index, 2);
        assert_eq!(t.attributes.len(), 3);
        assert_eq!(t.attributes[2].name, "");
    }

    #[test]
    fn edit_attribute_replaces_in_place() {
        let t = two_attribute_template();
        let replacement = Attribute::new("Might", "Renamed");
        let t = t.edit_attribute(replacement, 0).unwrap();
        assert_eq!(t.attributes[0].name, "Might");
        assert_eq!(t.attributes[1].name, "Agility");
    }

    #[test]
    fn edit_attribute_stale_index() {
        let t = two_attribute_template();
        let err = t.edit_attribute(Attribute::blank(), 5).unwrap_err();
        assert!(matches!(err, CoreError::StaleIndex { index: 5, len: 2 }));
    }

    #[test]
    fn delete_attribute_is_idempotent() {
        let t = two_attribute_template();
        let id = t.attributes[0].id;
        let t = t.delete_attribute(id);
        assert_eq!(t.attributes.len(), 1);
        let t = t.delete_attribute(id);
        assert_eq!(t.attributes.len(), 1);
        assert_eq!(t.attributes[0].name, "Agility");
    }

    #[test]
    fn attribute_index_lookup() {
        let t = two_attribute_template();
        assert_eq!(t.attribute_index("Agility"), Some(1));
        assert_eq!(t.attribute_index("Wisdom"), None);
    }

    #[test]
    fn attribute_index_is_case_sensitive() {
        let t = two_attribute_template();
        assert_eq!(t.attribute_index("agility"), None);
    }

    #[test]
    fn name_unique_excludes_self() {
        let t = two_attribute_template();
        assert!(t.is_attribute_name_unique("Strength", Some(0)));
        assert!(!t.is_attribute_name_unique("Strength", Some(1)));
    }

    #[test]
    fn name_unique_for_new_attribute() {
        let t = two_attribute_template();
        assert!(!t.is_attribute_name_unique("Strength", None));
        assert!(t.is_attribute_name_unique("Wisdom", None));
    }

    #[test]
    fn add_skill_appends_blank() {
        let (t, skill_index) = two_attribute_template().add_skill(0).unwrap();
        assert_eq!(skill_index, 0);
        assert_eq!(t.attributes[0].skills.len(), 1);
        assert!(t.attributes[1].skills.is_empty());
    }

    #[test]
    fn add_skill_stale_attribute_index() {
        let err = two_attribute_template().add_skill(9).unwrap_err();
        assert!(matches!(err, CoreError::StaleIndex { index: 9, len: 2 }));
    }

    #[test]
    fn edit_skill_replaces() {
        let (t, _) = two_attribute_template().add_skill(0).unwrap();
        let t = t
            .edit_skill(0, Skill::new("Climbing", "Scaling walls"), 0)
            .unwrap();
        assert_eq!(t.attributes[0].skills[0].name, "Climbing");
    }

    #[test]
    fn edit_skill_stale_skill_index() {
        let t = two_attribute_template();
        let err = t.edit_skill(0, Skill::blank(), 3).unwrap_err();
        assert!(matches!(err, CoreError::StaleIndex { index: 3, len: 0 }));
    }

    #[test]
    fn delete_skill_is_idempotent() {
        let (t, _) = two_attribute_template().add_skill(0).unwrap();
        let id = t.attributes[0].skills[0].id;
        let t = t.delete_skill(0, id).unwrap();
        assert!(t.attributes[0].skills.is_empty());
        let t = t.delete_skill(0, id).unwrap();
        assert!(t.attributes[0].skills.is_empty());
    }

    #[test]
    fn option_lifecycle() {
        let t = Template::new("Test")
            .add_option(TemplateOption::advantage("Wealth", "", 4))
            .add_option(TemplateOption::complication("Enemy", "", 3));
        assert_eq!(t.options.len(), 2);

        let mut edited = t.options[0].clone();
        edited.body_mut().points = 6;
        let t = t.edit_option(edited).unwrap();
        assert_eq!(t.options[0].points(), 6);

        let id = t.options[1].id();
        let t = t.remove_option(id);
        assert_eq!(t.options.len(), 1);
        let t = t.remove_option(id);
        assert_eq!(t.options.len(), 1);
    }

    #[test]
    fn edit_unknown_option_fails() {
        let t = Template::new("Test");
        let err = t
            .edit_option(TemplateOption::advantage("Wealth", "", 4))
            .unwrap_err();
        assert!(matches!(err, CoreError::OptionNotFound(_)));
    }

    #[test]
    fn options_in_filters_by_category() {
        let t = Template::new("Test")
            .add_option(TemplateOption::advantage("Wealth", "", 4))
            .add_option(TemplateOption::complication("Enemy", "", 3))
            .add_option(TemplateOption::advantage("Contacts", "", 2));
        let advantages: Vec<_> = t.options_in(OptionCategory::Advantage).collect();
        assert_eq!(advantages.len(), 2);
        assert_eq!(advantages[0].name(), "Wealth");
        assert_eq!(advantages[1].name(), "Contacts");
    }

    #[test]
    fn template_json_shape() {
        let mut t = Template::new("Fantasy");
        t.attributes
            .push(Attribute::new("Physique", "Body").with_skills(["Lifting"]));
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["name"], "Fantasy");
        assert_eq!(json["attributes"][0]["isExtranormal"], false);
        assert_eq!(json["attributes"][0]["skills"][0]["name"], "Lifting");
    }

    #[test]
    fn deserializes_record_without_ids() {
        let json = r#"{
            "name": "Imported",
            "attributes": [
                {"name": "Agility", "description": "", "isExtranormal": false,
                 "skills": [{"name": "Dodge", "description": ""}]}
            ],
            "options": []
        }"#;
        let t: Template = serde_json::from_str(json).unwrap();
        assert_eq!(t.attributes[0].skills[0].name, "Dodge");
    }
}
